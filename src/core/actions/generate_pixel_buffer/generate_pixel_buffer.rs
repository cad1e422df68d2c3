use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferData, PixelBufferError};
use crate::core::data::surface_size::SurfaceSize;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GeneratePixelBufferError<E> {
    Cancelled(Cancelled),
    ColourMap(E),
    PixelBuffer(PixelBufferError),
}

impl<E: fmt::Display> fmt::Display for GeneratePixelBufferError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for GeneratePixelBufferError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::ColourMap(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

/// Maps row-major values to colours and packs them into an RGBA buffer.
pub fn generate_pixel_buffer<T, CMap: ColourMap<T>>(
    input: Vec<T>,
    mapper: &CMap,
    size: SurfaceSize,
) -> Result<PixelBuffer, GeneratePixelBufferError<CMap::Failure>> {
    generate_pixel_buffer_cancelable(input, mapper, size, &NeverCancel)
}

/// Like [`generate_pixel_buffer`], polling `cancel` every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels.
pub fn generate_pixel_buffer_cancelable<T, CMap, C>(
    input: Vec<T>,
    mapper: &CMap,
    size: SurfaceSize,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferError<CMap::Failure>>
where
    CMap: ColourMap<T>,
    C: CancelToken,
{
    let mut buffer: PixelBufferData = Vec::with_capacity(input.len() * BYTES_PER_PIXEL);

    for (i, value) in input.into_iter().enumerate() {
        if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(GeneratePixelBufferError::Cancelled(Cancelled));
        }

        let colour = mapper.map(value).map_err(GeneratePixelBufferError::ColourMap)?;
        buffer.extend_from_slice(&colour.to_rgba());
    }

    PixelBuffer::from_data(size, buffer).map_err(GeneratePixelBufferError::PixelBuffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[derive(Debug)]
    struct StubError;

    impl fmt::Display for StubError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "StubColourMapError")
        }
    }

    impl Error for StubError {}

    #[derive(Debug)]
    struct StubGreyMap {}

    impl ColourMap<u8> for StubGreyMap {
        type Failure = StubError;

        fn map(&self, value: u8) -> Result<Colour, StubError> {
            Ok(Colour {
                r: value,
                g: value,
                b: value,
            })
        }
    }

    #[derive(Debug)]
    struct StubFailingMap {}

    impl ColourMap<u8> for StubFailingMap {
        type Failure = StubError;

        fn map(&self, _: u8) -> Result<Colour, StubError> {
            Err(StubError)
        }
    }

    #[test]
    fn test_generates_opaque_rgba_buffer() {
        let input: Vec<u8> = vec![1, 2, 3, 4];

        let result = generate_pixel_buffer(input, &StubGreyMap {}, SurfaceSize::new(2, 2)).unwrap();

        assert_eq!(
            result.buffer(),
            &[1, 1, 1, 255, 2, 2, 2, 255, 3, 3, 3, 255, 4, 4, 4, 255]
        );
        assert_eq!(result.size(), SurfaceSize::new(2, 2));
    }

    #[test]
    fn test_empty_input_for_empty_size() {
        let result = generate_pixel_buffer(Vec::<u8>::new(), &StubGreyMap {}, SurfaceSize::new(0, 0));

        assert!(result.unwrap().is_empty());
    }

    #[test]
    fn test_propagates_colour_map_failure() {
        let result = generate_pixel_buffer(vec![1u8, 2], &StubFailingMap {}, SurfaceSize::new(2, 1));

        assert!(matches!(result, Err(GeneratePixelBufferError::ColourMap(_))));
    }

    #[test]
    fn test_size_mismatch_returns_err() {
        let result = generate_pixel_buffer(vec![1u8, 2, 3], &StubGreyMap {}, SurfaceSize::new(2, 2));

        assert!(matches!(
            result,
            Err(GeneratePixelBufferError::PixelBuffer(
                PixelBufferError::BoundsMismatch {
                    expected_len: 16,
                    buffer_len: 12
                }
            ))
        ));
    }

    #[test]
    fn test_cancelled_does_not_create_pixel_buffer() {
        let cancelled = AtomicBool::new(true);
        let token = || cancelled.load(Ordering::Relaxed);

        let result =
            generate_pixel_buffer_cancelable(vec![1u8, 2], &StubGreyMap {}, SurfaceSize::new(2, 1), &token);

        assert!(matches!(result, Err(GeneratePixelBufferError::Cancelled(_))));
    }

    #[test]
    fn test_error_display() {
        let err: GeneratePixelBufferError<StubError> = GeneratePixelBufferError::ColourMap(StubError);

        assert_eq!(err.to_string(), "colour map error: StubColourMapError");
    }
}
