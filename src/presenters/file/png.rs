use crate::controllers::ports::export_error::ExportError;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use image::error::{ParameterError, ParameterErrorKind};
use image::{ImageError, ImageFormat, RgbaImage};
use std::path::Path;

/// RGBA PNG, regardless of the file extension.
#[derive(Debug, Default)]
pub struct PngFilePresenter {}

impl PngFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for PngFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> Result<(), ExportError> {
        if buffer.is_empty() {
            return Err(ExportError::EmptyFrame);
        }

        let image = RgbaImage::from_vec(buffer.width(), buffer.height(), buffer.buffer().to_vec())
            .ok_or_else(|| {
                ImageError::Parameter(ParameterError::from_kind(
                    ParameterErrorKind::DimensionMismatch,
                ))
            })?;

        image.save_with_format(filepath, ImageFormat::Png)?;

        Ok(())
    }
}
