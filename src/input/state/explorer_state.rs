use std::time::Instant;

use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::core::data::surface_size::SurfaceSize;
use crate::core::interaction::{InteractionConfig, InteractionController, RenderTrigger};
use crate::core::viewport::Viewport;
use crate::input::state::panel_visibility::{PanelTimings, PanelVisibility};

/// Everything the window keeps between frames.
pub struct ExplorerState {
    pub interaction: InteractionController,
    pub panel: PanelVisibility,
    last_submitted_request: Option<RenderRequest>,
    pub latest_submitted_generation: u64,
    force_pending: bool,
}

impl ExplorerState {
    #[must_use]
    pub fn new(surface: SurfaceSize, now: Instant) -> Self {
        Self {
            interaction: InteractionController::new(
                Viewport::default(),
                surface,
                InteractionConfig::default(),
            ),
            panel: PanelVisibility::new(now, PanelTimings::default()),
            last_submitted_request: None,
            latest_submitted_generation: 0,
            force_pending: false,
        }
    }

    /// Records the outcome of an input. Returns `true` if a render is wanted.
    pub fn apply(&mut self, trigger: RenderTrigger) -> bool {
        if trigger == RenderTrigger::Force {
            self.force_pending = true;
        }

        trigger.needs_render()
    }

    #[must_use]
    pub fn build_render_request(&self) -> RenderRequest {
        RenderRequest {
            viewport: self.interaction.viewport(),
            surface: self.interaction.surface(),
        }
    }

    /// A request is submitted when it differs from the last one, or when a
    /// forced render is outstanding. Empty surfaces are never submitted.
    #[must_use]
    pub fn should_submit(&self, request: &RenderRequest) -> bool {
        if request.surface.is_empty() {
            return false;
        }

        self.force_pending
            || self
                .last_submitted_request
                .as_ref()
                .is_none_or(|last| last != request)
    }

    pub fn record_submission(&mut self, request: RenderRequest, generation: u64) {
        self.last_submitted_request = Some(request);
        self.latest_submitted_generation = generation;
        self.force_pending = false;
    }
}
