use std::error::Error;
use std::fmt;

use crate::core::actions::cancellation::{self, CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::{
    GenerateFractalError, generate_fractal_parallel_rayon_cancelable,
};
use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer, generate_pixel_buffer_cancelable,
};
use crate::core::actions::stretch_to_surface::stretch_to_surface::stretch_to_surface;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::surface_size::SurfaceSize;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::heatmap::MandelbrotHeatmap;
use crate::core::viewport::Viewport;

#[derive(Debug)]
pub enum RenderFrameError {
    Cancelled(Cancelled),
    Algorithm(MandelbrotError),
    ColourMap(MandelbrotError),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for RenderFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::Algorithm(err) => write!(f, "algorithm error: {}", err),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for RenderFrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::Algorithm(err) | Self::ColourMap(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<Cancelled> for RenderFrameError {
    fn from(value: Cancelled) -> Self {
        Self::Cancelled(value)
    }
}

impl From<GenerateFractalError<MandelbrotError>> for RenderFrameError {
    fn from(value: GenerateFractalError<MandelbrotError>) -> Self {
        match value {
            GenerateFractalError::Cancelled(c) => Self::Cancelled(c),
            GenerateFractalError::Algorithm(err) => Self::Algorithm(err),
        }
    }
}

impl From<GeneratePixelBufferError<MandelbrotError>> for RenderFrameError {
    fn from(value: GeneratePixelBufferError<MandelbrotError>) -> Self {
        match value {
            GeneratePixelBufferError::Cancelled(c) => Self::Cancelled(c),
            GeneratePixelBufferError::ColourMap(err) => Self::ColourMap(err),
            GeneratePixelBufferError::PixelBuffer(err) => Self::PixelBuffer(err),
        }
    }
}

impl From<PixelBufferError> for RenderFrameError {
    fn from(value: PixelBufferError) -> Self {
        Self::PixelBuffer(value)
    }
}

/// A finished frame: the full surface plus the raster it was stretched from.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFrame {
    pub raster_size: SurfaceSize,
    pub pixel_buffer: PixelBuffer,
}

pub fn render_frame(viewport: &Viewport, surface: SurfaceSize) -> Result<RenderedFrame, RenderFrameError> {
    render_frame_cancelable(viewport, surface, &NeverCancel)
}

/// Renders the downscaled raster for `viewport` and stretches it over `surface`.
///
/// The whole raster is assembled before stretching; a cancelled pass returns
/// [`RenderFrameError::Cancelled`] and leaves nothing behind.
pub fn render_frame_cancelable<C: CancelToken>(
    viewport: &Viewport,
    surface: SurfaceSize,
    cancel: &C,
) -> Result<RenderedFrame, RenderFrameError> {
    let raster = render_raster_cancelable(viewport, surface, cancel)?;

    cancellation::check(cancel)?;

    let pixel_buffer = stretch_to_surface(&raster, surface)?;

    Ok(RenderedFrame {
        raster_size: raster.size(),
        pixel_buffer,
    })
}

/// The downscaled raster only, `floor(W·scale) × floor(H·scale)` pixels.
pub fn render_raster_cancelable<C: CancelToken>(
    viewport: &Viewport,
    surface: SurfaceSize,
    cancel: &C,
) -> Result<PixelBuffer, RenderFrameError> {
    let algorithm = MandelbrotAlgorithm::new(*viewport, surface);
    let colour_map = MandelbrotHeatmap::new(algorithm.max_iterations());
    let raster = algorithm.raster_size();

    let escape_counts = generate_fractal_parallel_rayon_cancelable(&algorithm, cancel)?;

    cancellation::check(cancel)?;

    Ok(generate_pixel_buffer_cancelable(
        escape_counts,
        &colour_map,
        raster,
        cancel,
    )?)
}

/// Single-threaded reference for [`render_raster_cancelable`].
pub fn render_raster_serial(
    viewport: &Viewport,
    surface: SurfaceSize,
) -> Result<PixelBuffer, RenderFrameError> {
    let algorithm = MandelbrotAlgorithm::new(*viewport, surface);
    let colour_map = MandelbrotHeatmap::new(algorithm.max_iterations());

    let escape_counts = generate_fractal_serial(&algorithm).map_err(RenderFrameError::Algorithm)?;

    Ok(generate_pixel_buffer(
        escape_counts,
        &colour_map,
        algorithm.raster_size(),
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::data::point::PixelPoint;
    use crate::core::fractals::mandelbrot::escape_time::escape_time;
    use crate::core::fractals::mandelbrot::heatmap::colour_for;

    fn full_resolution() -> Viewport {
        Viewport::new(-0.5, 0.0, 200.0, 1.0, 100).unwrap()
    }

    #[test]
    fn test_center_pixel_is_inside_the_set() {
        let frame = render_frame(&full_resolution(), SurfaceSize::new(800, 600)).unwrap();

        assert_eq!(
            frame.pixel_buffer.pixel(PixelPoint { x: 400, y: 300 }),
            Some([0, 0, 0, 255])
        );
    }

    #[test]
    fn test_corner_pixel_escapes_immediately_and_is_black() {
        let frame = render_frame(&full_resolution(), SurfaceSize::new(800, 600)).unwrap();

        assert_eq!(
            frame.pixel_buffer.pixel(PixelPoint { x: 0, y: 0 }),
            Some([0, 0, 0, 255])
        );
    }

    #[test]
    fn test_half_scale_renders_small_raster_and_fills_surface() {
        let viewport = Viewport::default();
        let surface = SurfaceSize::new(81, 61);

        let frame = render_frame(&viewport, surface).unwrap();

        assert_eq!(frame.raster_size, SurfaceSize::new(40, 30));
        assert_eq!(frame.pixel_buffer.size(), surface);
        assert!(frame.pixel_buffer.buffer().chunks_exact(4).all(|p| p[3] == 255));
    }

    #[test]
    fn test_escaping_pixel_gets_heatmap_colour() {
        // Pixel (600, 300) sits on c = 0.5, outside the set.
        let frame = render_frame(&full_resolution(), SurfaceSize::new(800, 600)).unwrap();
        let count = escape_time(Complex::new(0.5, 0.0), 100);

        assert!(count > 0 && count < 100);
        assert_eq!(
            frame.pixel_buffer.pixel(PixelPoint { x: 600, y: 300 }),
            Some(colour_for(count, 100).to_rgba())
        );
        assert!(frame.pixel_buffer.buffer().chunks_exact(4).any(|p| p[2] > 0));
    }

    #[test]
    fn test_parallel_matches_serial() {
        let viewport = Viewport::new(-0.75, 0.1, 90.0, 0.7, 60).unwrap();
        let surface = SurfaceSize::new(64, 48);

        let parallel = render_raster_cancelable(&viewport, surface, &NeverCancel).unwrap();
        let serial = render_raster_serial(&viewport, surface).unwrap();

        assert_eq!(parallel, serial);
    }

    #[test]
    fn test_zero_surface_yields_empty_frame() {
        let frame = render_frame(&Viewport::default(), SurfaceSize::new(0, 600)).unwrap();

        assert!(frame.pixel_buffer.is_empty());
        assert_eq!(frame.raster_size.pixel_count(), 0);
    }

    #[test]
    fn test_tiny_surface_with_empty_raster_is_black() {
        let frame = render_frame(&Viewport::default(), SurfaceSize::new(1, 1)).unwrap();

        assert_eq!(frame.raster_size.pixel_count(), 0);
        assert_eq!(frame.pixel_buffer.buffer(), &[0, 0, 0, 255]);
    }

    #[test]
    fn test_cancelled_render_returns_cancelled() {
        let cancel = || true;

        let result = render_frame_cancelable(&Viewport::default(), SurfaceSize::new(40, 40), &cancel);

        assert!(matches!(result, Err(RenderFrameError::Cancelled(_))));
    }
}
