use std::path::Path;

use crate::controllers::ports::export_error::ExportError;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes a presented RGBA surface to disk in some encoded format.
pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> Result<(), ExportError>;
}
