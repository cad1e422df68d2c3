use rayon::prelude::*;

use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::PixelPoint;

/// Error type for cancelable fractal generation.
///
/// Distinguishes between algorithm failures and cancellation so callers can
/// drop superseded work quietly.
#[derive(Debug)]
pub enum GenerateFractalError<E> {
    Cancelled(Cancelled),
    Algorithm(E),
}

impl<E: std::fmt::Display> std::fmt::Display for GenerateFractalError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateFractalError::Cancelled(c) => write!(f, "{}", c),
            GenerateFractalError::Algorithm(e) => write!(f, "algorithm error: {}", e),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for GenerateFractalError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateFractalError::Cancelled(c) => Some(c),
            GenerateFractalError::Algorithm(e) => Some(e),
        }
    }
}

/// Computes every raster pixel, one rayon task per row, polling `cancel` at
/// the start of each row and every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within it.
///
/// Rows are computed independently and flattened back into row-major order
/// only once all of them have finished.
pub fn generate_fractal_parallel_rayon_cancelable<Alg, C>(
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
    C: CancelToken,
{
    let raster = algorithm.raster_size();
    let row_width = raster.width as usize;

    type Rows<S, F> = Result<Vec<Vec<S>>, GenerateFractalError<F>>;

    let rows: Rows<Alg::Success, Alg::Failure> = (0..raster.height)
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(row_width);

            for (i, x) in (0..raster.width).enumerate() {
                if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                    return Err(GenerateFractalError::Cancelled(Cancelled));
                }

                let value = algorithm
                    .compute(PixelPoint { x, y })
                    .map_err(GenerateFractalError::Algorithm)?;
                row.push(value);
            }

            Ok(row)
        })
        .collect();

    rows.map(|r| r.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
    use crate::core::data::surface_size::SurfaceSize;
    use std::error::Error;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl std::fmt::Display for StubError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    #[derive(Debug)]
    struct StubSuccessAlgorithm {
        raster: SurfaceSize,
    }

    impl FractalAlgorithm for StubSuccessAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn raster_size(&self) -> SurfaceSize {
            self.raster
        }

        fn compute(&self, pixel: PixelPoint) -> Result<Self::Success, Self::Failure> {
            Ok(u64::from(pixel.y) * 1000 + u64::from(pixel.x))
        }
    }

    #[derive(Debug)]
    struct StubFailureAlgorithm {}

    impl FractalAlgorithm for StubFailureAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn raster_size(&self) -> SurfaceSize {
            SurfaceSize::new(4, 3)
        }

        fn compute(&self, _: PixelPoint) -> Result<Self::Success, Self::Failure> {
            Err(StubError {})
        }
    }

    #[test]
    fn test_rayon_generates_same_results_as_serial() {
        let algorithm = StubSuccessAlgorithm {
            raster: SurfaceSize::new(11, 9),
        };

        let serial = generate_fractal_serial(&algorithm).unwrap();
        let parallel = generate_fractal_parallel_rayon_cancelable(&algorithm, &NeverCancel).unwrap();

        assert_eq!(parallel, serial);
        assert_eq!(parallel.len(), 99);
    }

    #[test]
    fn test_rayon_output_is_row_major() {
        let algorithm = StubSuccessAlgorithm {
            raster: SurfaceSize::new(3, 2),
        };

        let values = generate_fractal_parallel_rayon_cancelable(&algorithm, &NeverCancel).unwrap();

        assert_eq!(values, vec![0, 1, 2, 1000, 1001, 1002]);
    }

    #[test]
    fn test_rayon_with_empty_raster() {
        let algorithm = StubSuccessAlgorithm {
            raster: SurfaceSize::new(0, 5),
        };

        assert!(generate_fractal_parallel_rayon_cancelable(&algorithm, &NeverCancel).unwrap().is_empty());
    }

    #[test]
    fn test_rayon_propagates_algorithm_failure() {
        let result = generate_fractal_parallel_rayon_cancelable(&StubFailureAlgorithm {}, &NeverCancel);

        assert!(matches!(result, Err(GenerateFractalError::Algorithm(StubError {}))));
    }

    #[test]
    fn test_cancelable_returns_cancelled_when_token_is_set() {
        let algorithm = StubSuccessAlgorithm {
            raster: SurfaceSize::new(16, 16),
        };
        let cancelled = AtomicBool::new(true);
        let token = || cancelled.load(Ordering::Relaxed);

        let result = generate_fractal_parallel_rayon_cancelable(&algorithm, &token);

        assert!(matches!(result, Err(GenerateFractalError::Cancelled(_))));
    }

    #[test]
    fn test_cancel_mid_render_stops_early() {
        let algorithm = StubSuccessAlgorithm {
            raster: SurfaceSize::new(8, 64),
        };
        let polls = AtomicUsize::new(0);
        // Fire after a handful of rows have started.
        let token = || polls.fetch_add(1, Ordering::Relaxed) >= 4;

        let result = generate_fractal_parallel_rayon_cancelable(&algorithm, &token);

        assert!(matches!(result, Err(GenerateFractalError::Cancelled(_))));
    }

    #[test]
    fn test_cancelable_error_displays_algorithm_error() {
        let err: GenerateFractalError<StubError> = GenerateFractalError::Algorithm(StubError {});

        assert_eq!(err.to_string(), "algorithm error: StubError");
    }
}
