pub mod compensated;
pub mod errors;
#[allow(clippy::module_inception)]
pub mod viewport;

pub use errors::ViewportError;
pub use viewport::Viewport;
