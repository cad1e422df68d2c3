/// Width and height in device pixels.
///
/// Used both for the host surface and for the downscaled raster that is
/// actually computed; zero in either dimension is a valid, empty size.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Raster dimensions for a render at `scale`: `floor(W·scale) × floor(H·scale)`.
    #[must_use]
    pub fn scaled(&self, scale: f64) -> Self {
        Self {
            width: scale_dimension(self.width, scale),
            height: scale_dimension(self.height, scale),
        }
    }
}

fn scale_dimension(dimension: u32, scale: f64) -> u32 {
    let scaled = (f64::from(dimension) * scale).floor();

    if scaled.is_finite() && scaled > 0.0 {
        scaled.min(f64::from(dimension)) as u32
    } else {
        0
    }
}
