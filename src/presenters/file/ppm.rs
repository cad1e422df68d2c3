use crate::controllers::ports::export_error::ExportError;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::presenters::file::pixel_format::copy_rgba_to_rgb;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Binary PPM (P6). Alpha is dropped.
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> Result<(), ExportError> {
        if buffer.is_empty() {
            return Err(ExportError::EmptyFrame);
        }

        let mut rgb = vec![0; buffer.size().pixel_count() * 3];
        copy_rgba_to_rgb(buffer.buffer(), &mut rgb);

        let mut file = BufWriter::new(std::fs::File::create(filepath)?);

        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(file, "P6")?;
        writeln!(file, "{} {}", buffer.width(), buffer.height())?;
        writeln!(file, "255")?;
        file.write_all(&rgb)?;
        file.flush()?;

        Ok(())
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}
