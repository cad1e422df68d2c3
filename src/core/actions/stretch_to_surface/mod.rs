#[allow(clippy::module_inception)]
pub mod stretch_to_surface;
