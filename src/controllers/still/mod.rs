mod still_render_controller;

pub use still_render_controller::StillRenderController;
