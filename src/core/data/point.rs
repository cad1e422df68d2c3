/// A pixel address inside a raster, origin at the top-left.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct PixelPoint {
    pub x: u32,
    pub y: u32,
}

/// A pointer position in full-resolution device pixels, relative to the surface.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}
