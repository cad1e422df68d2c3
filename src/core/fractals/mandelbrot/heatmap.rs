use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// Colour for an escape count: black for bounded orbits, otherwise the heatmap
/// at `t = escape_count / max_iterations`.
#[must_use]
pub fn colour_for(escape_count: u32, max_iterations: u32) -> Colour {
    if escape_count >= max_iterations {
        return Colour::BLACK;
    }

    heatmap_colour(f64::from(escape_count) / f64::from(max_iterations))
}

/// `(255·t³, 255·t^1.5, 255·t)`, floored, each channel clamped to `[0, 255]`.
#[must_use]
pub fn heatmap_colour(t: f64) -> Colour {
    Colour {
        r: channel(t.powi(3)),
        g: channel(t.powf(1.5)),
        b: channel(t),
    }
}

fn channel(fraction: f64) -> u8 {
    let value = (255.0 * fraction).floor();

    if value.is_nan() {
        return 0;
    }

    value.clamp(0.0, 255.0) as u8
}

/// The escape-count colour map used for every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MandelbrotHeatmap {
    max_iterations: u32,
}

impl MandelbrotHeatmap {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl ColourMap<u32> for MandelbrotHeatmap {
    type Failure = MandelbrotError;

    fn map(&self, iterations: u32) -> Result<Colour, MandelbrotError> {
        if iterations > self.max_iterations {
            return Err(MandelbrotError::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            });
        }

        Ok(colour_for(iterations, self.max_iterations))
    }
}
