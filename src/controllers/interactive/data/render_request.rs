use crate::core::data::surface_size::SurfaceSize;
use crate::core::viewport::Viewport;

/// Snapshot of everything one render needs.
///
/// `PartialEq` lets the host skip submitting a request identical to the last one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub viewport: Viewport,
    pub surface: SurfaceSize,
}
