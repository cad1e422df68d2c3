use crate::core::data::point::PixelPoint;
use crate::core::data::surface_size::SurfaceSize;
use std::{error::Error, fmt};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MandelbrotError {
    PixelOutsideRaster {
        pixel: PixelPoint,
        raster: SurfaceSize,
    },
    IterationsExceedMax {
        iterations: u32,
        max_iterations: u32,
    },
}

impl fmt::Display for MandelbrotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideRaster { pixel, raster } => {
                write!(
                    f,
                    "pixel (x: {}, y: {}) is outside the {}x{} raster",
                    pixel.x, pixel.y, raster.width, raster.height
                )
            }
            Self::IterationsExceedMax {
                iterations,
                max_iterations,
            } => {
                write!(
                    f,
                    "iteration count {} exceeds maximum {}",
                    iterations, max_iterations
                )
            }
        }
    }
}

impl Error for MandelbrotError {}
