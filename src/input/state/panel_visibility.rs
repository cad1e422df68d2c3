use std::time::{Duration, Instant};

use crate::core::data::point::PointerPosition;
use crate::core::data::surface_size::SurfaceSize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelTimings {
    /// Delay before the panel first hides after startup.
    pub initial_hide: Duration,
    /// Delay before the panel hides once the pointer leaves it.
    pub leave_hide: Duration,
    /// Fraction of the surface width covered by the top-left reveal zone.
    pub hot_zone_width: f64,
    pub hot_zone_height: f64,
}

impl Default for PanelTimings {
    fn default() -> Self {
        Self {
            initial_hide: Duration::from_secs(5),
            leave_hide: Duration::from_secs(3),
            hot_zone_width: 0.2,
            hot_zone_height: 0.2,
        }
    }
}

/// Auto-hiding control panel and its instructions box.
///
/// Time is always passed in, never read, so the hide schedule is deterministic.
#[derive(Debug, Clone)]
pub struct PanelVisibility {
    timings: PanelTimings,
    visible: bool,
    hovered: bool,
    hide_at: Option<Instant>,
    instructions_open: bool,
}

impl PanelVisibility {
    #[must_use]
    pub fn new(now: Instant, timings: PanelTimings) -> Self {
        Self {
            timings,
            visible: true,
            hovered: false,
            hide_at: Some(now + timings.initial_hide),
            instructions_open: false,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn instructions_open(&self) -> bool {
        self.instructions_open
    }

    pub fn toggle_instructions(&mut self) {
        self.instructions_open = !self.instructions_open;
    }

    /// When the next scheduled hide is due, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.hide_at
    }

    #[must_use]
    pub fn in_hot_zone(&self, position: PointerPosition, surface: SurfaceSize) -> bool {
        position.x >= 0.0
            && position.y >= 0.0
            && position.x < f64::from(surface.width) * self.timings.hot_zone_width
            && position.y < f64::from(surface.height) * self.timings.hot_zone_height
    }

    /// Reveals the panel when the pointer enters the hot zone. Returns `true`
    /// if visibility changed.
    pub fn pointer_moved(&mut self, position: PointerPosition, surface: SurfaceSize) -> bool {
        if !self.in_hot_zone(position, surface) {
            return false;
        }

        self.hide_at = None;

        let changed = !self.visible;
        self.visible = true;
        changed
    }

    /// Tracks whether the pointer is over the panel itself. Leaving it
    /// schedules a hide.
    pub fn set_hovered(&mut self, hovered: bool, now: Instant) {
        if hovered == self.hovered {
            return;
        }

        self.hovered = hovered;

        if hovered {
            self.hide_at = None;
        } else if self.visible {
            self.hide_at = Some(now + self.timings.leave_hide);
        }
    }

    /// Applies a due hide. Returns `true` if the panel was hidden.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.hide_at {
            Some(deadline) if now >= deadline => {
                self.hide_at = None;
                let changed = self.visible;
                self.visible = false;
                changed
            }
            _ => false,
        }
    }
}
