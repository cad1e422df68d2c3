use std::sync::Arc;
use std::time::Duration;

use egui::Context as EguiContext;
use winit::{event_loop::EventLoopProxy, window::Window};

use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::input::gui::events::GuiEvent;

pub trait GuiPresenterPort: Sized {
    fn new(window: &'static Window, event_loop_proxy: EventLoopProxy<GuiEvent>) -> Result<Self, pixels::Error>;
    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error>;
    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort>;
    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;
    /// Moves any newly delivered frame onto the surface. Returns `true` if the
    /// visible image changed.
    fn poll_frame(&mut self) -> bool;
    /// The surface as last presented, for export.
    fn current_frame(&self) -> Option<&PixelBuffer>;
    fn last_render_duration(&self) -> Option<Duration>;
    fn last_error_message(&self) -> Option<&str>;
}
