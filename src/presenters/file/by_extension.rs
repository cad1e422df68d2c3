use crate::controllers::ports::export_error::ExportError;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::presenters::file::png::PngFilePresenter;
use crate::presenters::file::ppm::PpmFilePresenter;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFileFormat {
    Png,
    Ppm,
}

impl ImageFileFormat {
    /// Format named by the path's extension, case-insensitively.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();

        match extension.as_str() {
            "png" => Some(Self::Png),
            "ppm" => Some(Self::Ppm),
            _ => None,
        }
    }
}

/// Picks the PNG or PPM presenter from the target file's extension.
#[derive(Debug, Default)]
pub struct ByExtensionFilePresenter {}

impl ByExtensionFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for ByExtensionFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> Result<(), ExportError> {
        let path = filepath.as_ref();

        match ImageFileFormat::from_path(path) {
            Some(ImageFileFormat::Png) => PngFilePresenter::new().present(buffer, path),
            Some(ImageFileFormat::Ppm) => PpmFilePresenter::new().present(buffer, path),
            None => Err(ExportError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::surface_size::SurfaceSize;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ImageFileFormat::from_path(Path::new("out/a.png")), Some(ImageFileFormat::Png));
        assert_eq!(ImageFileFormat::from_path(Path::new("A.PPM")), Some(ImageFileFormat::Ppm));
        assert_eq!(ImageFileFormat::from_path(Path::new("a.jpg")), None);
        assert_eq!(ImageFileFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let buffer = PixelBuffer::filled(SurfaceSize::new(1, 1), Colour::BLACK);

        let result = ByExtensionFilePresenter::new().present(&buffer, "frame.bmp");

        assert!(matches!(result, Err(ExportError::UnsupportedFormat(_))));
    }
}
