use crate::core::data::colour::Colour;
use crate::core::data::point::PixelPoint;
use crate::core::data::surface_size::SurfaceSize;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 4;

fn size_to_buffer_len(size: SurfaceSize) -> usize {
    size.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: PixelPoint,
        size: SurfaceSize,
    },
    BoundsMismatch {
        expected_len: usize,
        buffer_len: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideBounds { pixel, size } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} buffer",
                    pixel.x, pixel.y, size.width, size.height
                )
            }
            Self::BoundsMismatch {
                expected_len,
                buffer_len,
            } => {
                write!(
                    f,
                    "buffer of {} bytes does not match expected {} bytes",
                    buffer_len, expected_len
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGBA raster, four bytes per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    size: SurfaceSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    /// A transparent-black buffer of the given size.
    #[must_use]
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            buffer: vec![0; size_to_buffer_len(size)],
        }
    }

    /// A buffer where every pixel is `colour`, fully opaque.
    #[must_use]
    pub fn filled(size: SurfaceSize, colour: Colour) -> Self {
        let buffer = colour.to_rgba().repeat(size.pixel_count());

        Self { size, buffer }
    }

    pub fn from_data(size: SurfaceSize, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let expected_len = size_to_buffer_len(size);

        if expected_len != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected_len,
                buffer_len: buffer.len(),
            });
        }

        Ok(Self { size, buffer })
    }

    #[must_use]
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.size.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.size.height
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn pixel(&self, pixel: PixelPoint) -> Option<[u8; 4]> {
        let index = self.index_of(pixel)?;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.buffer[index..index + BYTES_PER_PIXEL]);

        Some(rgba)
    }

    pub fn set_pixel(&mut self, pixel: PixelPoint, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(pixel).ok_or(PixelBufferError::PixelOutsideBounds {
            pixel,
            size: self.size,
        })?;

        self.buffer[index..index + BYTES_PER_PIXEL].copy_from_slice(&colour.to_rgba());

        Ok(())
    }

    fn index_of(&self, pixel: PixelPoint) -> Option<usize> {
        if pixel.x >= self.size.width || pixel.y >= self.size.height {
            return None;
        }

        Some((pixel.y as usize * self.size.width as usize + pixel.x as usize) * BYTES_PER_PIXEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let buffer = PixelBuffer::new(SurfaceSize::new(10, 5));

        assert_eq!(buffer.buffer().len(), 200);
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_new_with_empty_size_has_no_bytes() {
        let buffer = PixelBuffer::new(SurfaceSize::new(0, 600));

        assert!(buffer.is_empty());
    }

    #[test]
    fn test_filled_is_opaque() {
        let buffer = PixelBuffer::filled(SurfaceSize::new(2, 1), Colour::BLACK);

        assert_eq!(buffer.buffer(), &[0, 0, 0, 255, 0, 0, 0, 255]);
    }

    #[test]
    fn test_from_data_rejects_wrong_length() {
        let result = PixelBuffer::from_data(SurfaceSize::new(2, 2), vec![0; 12]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                expected_len: 16,
                buffer_len: 12
            }
        );
    }

    #[test]
    fn test_set_pixel_writes_rgba_at_row_major_offset() {
        let mut buffer = PixelBuffer::new(SurfaceSize::new(3, 3));
        let red = Colour { r: 255, g: 0, b: 0 };

        buffer.set_pixel(PixelPoint { x: 1, y: 1 }, red).unwrap();

        assert_eq!(&buffer.buffer()[16..20], &[255, 0, 0, 255]);
        assert_eq!(buffer.pixel(PixelPoint { x: 1, y: 1 }), Some([255, 0, 0, 255]));
        assert_eq!(buffer.pixel(PixelPoint { x: 0, y: 0 }), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let size = SurfaceSize::new(3, 3);
        let mut buffer = PixelBuffer::new(size);
        let pixel = PixelPoint { x: 3, y: 0 };

        assert_eq!(
            buffer.set_pixel(pixel, Colour::BLACK),
            Err(PixelBufferError::PixelOutsideBounds { pixel, size })
        );
        assert_eq!(buffer.pixel(pixel), None);
    }
}
