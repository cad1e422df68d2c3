pub mod by_extension;
pub mod pixel_format;
pub mod png;
pub mod ppm;
