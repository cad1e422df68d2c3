//! Windowed explorer: winit for the window and input, pixels for the
//! framebuffer, egui for the control panel.

pub mod app;
pub mod command;
pub mod events;
