use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::PixelPoint;
use crate::core::data::surface_size::SurfaceSize;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::escape_time::escape_time;
use crate::core::viewport::Viewport;

/// Escape counts for every pixel of the raster a viewport computes for a surface.
#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    viewport: Viewport,
    raster: SurfaceSize,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(viewport: Viewport, surface: SurfaceSize) -> Self {
        Self {
            viewport,
            raster: viewport.raster_size(surface),
        }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.viewport.max_iterations()
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;
    type Failure = MandelbrotError;

    fn raster_size(&self) -> SurfaceSize {
        self.raster
    }

    fn compute(&self, pixel: PixelPoint) -> Result<Self::Success, Self::Failure> {
        if pixel.x >= self.raster.width || pixel.y >= self.raster.height {
            return Err(MandelbrotError::PixelOutsideRaster {
                pixel,
                raster: self.raster,
            });
        }

        let c = self.viewport.render_pixel_to_fractal(pixel, self.raster);

        Ok(escape_time(c, self.viewport.max_iterations()))
    }
}
