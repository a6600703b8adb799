use serde::Serialize;

/// Alpha value echoed for every reported color; the census treats all pixels
/// as fully opaque.
pub const OPAQUE_ALPHA: u8 = 255;

/// An opaque RGB triple as observed in the mask. Alpha never participates in
/// deduplication.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    #[inline]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}
