/// An opaque RGB colour. Alpha is added when the colour is written to a buffer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const OPAQUE_ALPHA: u8 = 255;

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    #[must_use]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, OPAQUE_ALPHA]
    }
}
