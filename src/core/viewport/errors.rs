use std::{error::Error, fmt};

/// A viewport mutation that was refused. The viewport is left unchanged.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidZoom(f64),
    InvalidScale(f64),
    ZeroMaxIterations,
    NonFiniteCenter { x: f64, y: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidZoom(zoom) => {
                write!(f, "zoom must be finite and greater than zero, got {}", zoom)
            }
            Self::InvalidScale(scale) => {
                write!(f, "scale must be a finite number, got {}", scale)
            }
            Self::ZeroMaxIterations => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::NonFiniteCenter { x, y } => {
                write!(f, "viewport center must be finite, got ({}, {})", x, y)
            }
        }
    }
}

impl Error for ViewportError {}
