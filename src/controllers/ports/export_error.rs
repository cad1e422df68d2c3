use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ExportError {
    /// Nothing has been rendered yet.
    EmptyFrame,
    /// The target path has no extension a presenter knows how to encode.
    UnsupportedFormat(PathBuf),
    Io(io::Error),
    Image(image::ImageError),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyFrame => write!(f, "no frame has been rendered to export"),
            Self::UnsupportedFormat(path) => write!(
                f,
                "unsupported image format for {} (expected .png or .ppm)",
                path.display()
            ),
            Self::Io(err) => write!(f, "failed to write image: {}", err),
            Self::Image(err) => write!(f, "failed to encode image: {}", err),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyFrame | Self::UnsupportedFormat(_) => None,
            Self::Io(err) => Some(err),
            Self::Image(err) => Some(err),
        }
    }
}

impl From<io::Error> for ExportError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<image::ImageError> for ExportError {
    fn from(value: image::ImageError) -> Self {
        Self::Image(value)
    }
}
