//! Input adapters for the explorer.
//!
//! `state` holds presentation state that is independent of any windowing
//! library; `gui` adapts winit and egui events onto it.

#[cfg(feature = "gui")]
pub mod gui;
pub mod state;
