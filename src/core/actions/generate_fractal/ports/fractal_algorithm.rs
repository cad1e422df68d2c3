use crate::core::data::point::PixelPoint;
use crate::core::data::surface_size::SurfaceSize;
use std::error::Error;

/// Computes one value per raster pixel.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn raster_size(&self) -> SurfaceSize;

    fn compute(&self, pixel: PixelPoint) -> Result<Self::Success, Self::Failure>;
}
