pub mod config;
pub mod controller;
pub mod pointer_event;
pub mod render_trigger;

pub use config::InteractionConfig;
pub use controller::{DragState, InteractionController};
pub use pointer_event::PointerEvent;
pub use render_trigger::RenderTrigger;
