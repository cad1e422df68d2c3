use log::{debug, warn};

use crate::core::data::point::PointerPosition;
use crate::core::data::surface_size::SurfaceSize;
use crate::core::interaction::config::{InteractionConfig, PANEL_MAX_SCALE, PANEL_MIN_SCALE};
use crate::core::interaction::pointer_event::PointerEvent;
use crate::core::interaction::render_trigger::RenderTrigger;
use crate::core::viewport::{Viewport, ViewportError};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { last: PointerPosition },
}

/// Single writer of the viewport.
///
/// Every input is applied here and answered with a [`RenderTrigger`]; the host
/// renders snapshots taken through [`InteractionController::viewport`].
#[derive(Debug, Clone)]
pub struct InteractionController {
    viewport: Viewport,
    surface: SurfaceSize,
    drag: DragState,
    config: InteractionConfig,
}

impl InteractionController {
    #[must_use]
    pub fn new(viewport: Viewport, surface: SurfaceSize, config: InteractionConfig) -> Self {
        Self {
            viewport,
            surface,
            drag: DragState::Idle,
            config,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    pub fn resize(&mut self, surface: SurfaceSize) -> RenderTrigger {
        if surface == self.surface {
            return RenderTrigger::None;
        }

        debug!(
            "surface resized {}x{} -> {}x{}",
            self.surface.width, self.surface.height, surface.width, surface.height
        );
        self.surface = surface;

        RenderTrigger::Schedule
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> RenderTrigger {
        match event {
            PointerEvent::Down { x, y } => self.begin_drag(PointerPosition { x, y }),
            PointerEvent::Move { x, y } => self.drag_to(PointerPosition { x, y }),
            PointerEvent::Up | PointerEvent::Leave => self.end_drag(),
            PointerEvent::Wheel { x, y, delta_y } => self.wheel(PointerPosition { x, y }, delta_y),
        }
    }

    /// Quality slider entry point; the value is clamped to the panel range.
    pub fn set_scale(&mut self, scale: f64) -> RenderTrigger {
        if scale.is_nan() {
            return rejected("set scale", ViewportError::InvalidScale(scale));
        }

        let clamped = scale.clamp(PANEL_MIN_SCALE, PANEL_MAX_SCALE);

        if clamped == self.viewport.scale() {
            return RenderTrigger::None;
        }

        match self.viewport.set_scale(clamped) {
            Ok(_) => RenderTrigger::Schedule,
            Err(err) => rejected("set scale", err),
        }
    }

    /// Zooms about the view center by the button factor.
    pub fn zoom_in(&mut self) -> RenderTrigger {
        match self.viewport.scale_zoom(self.config.button_zoom_in) {
            Ok(()) => RenderTrigger::Schedule,
            Err(err) => rejected("zoom in", err),
        }
    }

    pub fn reset(&mut self) -> RenderTrigger {
        self.viewport.reset();
        self.drag = DragState::Idle;

        RenderTrigger::Schedule
    }

    fn begin_drag(&mut self, position: PointerPosition) -> RenderTrigger {
        if !self.is_dragging() {
            if let Err(err) = self
                .viewport
                .set_max_iterations(self.config.drag_max_iterations)
            {
                warn!("drag iteration budget rejected: {}", err);
            }
        }

        self.drag = DragState::Dragging { last: position };

        // The cheaper budget only shows once the pointer moves.
        RenderTrigger::None
    }

    fn drag_to(&mut self, position: PointerPosition) -> RenderTrigger {
        let DragState::Dragging { last } = self.drag else {
            return RenderTrigger::None;
        };

        let zoom = self.viewport.zoom();
        let dx = (position.x - last.x) / zoom;
        let dy = (position.y - last.y) / zoom;

        self.drag = DragState::Dragging { last: position };

        if dx == 0.0 && dy == 0.0 {
            return RenderTrigger::None;
        }

        match self.viewport.pan(dx, dy) {
            Ok(()) => RenderTrigger::Schedule,
            Err(err) => rejected("pan", err),
        }
    }

    fn end_drag(&mut self) -> RenderTrigger {
        if !self.is_dragging() {
            return RenderTrigger::None;
        }

        self.drag = DragState::Idle;

        if let Err(err) = self
            .viewport
            .set_max_iterations(self.config.idle_max_iterations)
        {
            warn!("idle iteration budget rejected: {}", err);
        }

        RenderTrigger::Force
    }

    fn wheel(&mut self, position: PointerPosition, delta_y: f64) -> RenderTrigger {
        let factor = if delta_y > 0.0 {
            self.config.wheel_zoom_out
        } else {
            self.config.wheel_zoom_in
        };

        match self.viewport.zoom_at(position, self.surface, factor) {
            Ok(()) => RenderTrigger::Schedule,
            Err(err) => rejected("wheel zoom", err),
        }
    }
}

fn rejected(action: &str, err: ViewportError) -> RenderTrigger {
    warn!("{} rejected: {}", action, err);

    RenderTrigger::None
}
