use crate::core::data::complex::Complex;

pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Escape-time count for `c` under `z ↦ z² + c`, starting from `z = c`.
///
/// Returns a value in `[0, max_iterations]`; `max_iterations` means the orbit
/// stayed bounded for the whole budget.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = c;
    let mut iteration = 0;

    while z.norm_sqr() <= ESCAPE_RADIUS_SQUARED && iteration < max_iterations {
        z = z.square() + c;
        iteration += 1;
    }

    iteration
}
