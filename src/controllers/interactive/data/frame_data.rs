use std::time::Duration;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::surface_size::SurfaceSize;

#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    /// Full surface, already stretched from the raster.
    pub pixel_buffer: PixelBuffer,
    pub raster_size: SurfaceSize,
    pub render_duration: Duration,
}
