//! Background rendering for the interactive explorer.
//!
//! The GUI submits a [`RenderRequest`] whenever the viewport or surface
//! changes. A single worker renders the newest request, cancelling any
//! render it supersedes, and hands finished frames to a presenter port.

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::InteractiveController;
pub use data::frame_data::FrameData;
pub use data::render_request::RenderRequest;
pub use errors::render_error::RenderError;
pub use events::render_event::RenderEvent;
pub use ports::presenter::InteractiveControllerPresenterPort;
