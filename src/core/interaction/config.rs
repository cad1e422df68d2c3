use crate::core::viewport::viewport::DEFAULT_MAX_ITERATIONS;

/// Quality range offered by the control panel slider.
pub const PANEL_MIN_SCALE: f64 = 0.2;
pub const PANEL_MAX_SCALE: f64 = 1.0;

/// Tunables for pointer and panel interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionConfig {
    /// Iteration budget restored when a drag ends.
    pub idle_max_iterations: u32,
    /// Cheaper budget used while the pointer is dragging.
    pub drag_max_iterations: u32,
    pub wheel_zoom_in: f64,
    pub wheel_zoom_out: f64,
    pub button_zoom_in: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            idle_max_iterations: DEFAULT_MAX_ITERATIONS,
            drag_max_iterations: 30,
            wheel_zoom_in: 1.1,
            wheel_zoom_out: 0.9,
            button_zoom_in: 1.5,
        }
    }
}
