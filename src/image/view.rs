use crate::geometry::TileRect;
use crate::types::Rgb8;

/// Channel order of a packed pixel buffer.
///
/// The `image` crate decodes to RGBA, but raw mask dumps arrive in the
/// BGR(A) order their source encoding used, so the view carries the layout
/// instead of assuming one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelLayout {
    Rgb,
    Rgba,
    Bgr,
    Bgra,
}

impl PixelLayout {
    #[inline]
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            PixelLayout::Rgb | PixelLayout::Bgr => 3,
            PixelLayout::Rgba | PixelLayout::Bgra => 4,
        }
    }

    /// Decodes one packed pixel into an opaque RGB triple.
    #[inline]
    pub fn rgb(&self, px: &[u8]) -> Rgb8 {
        match self {
            PixelLayout::Rgb | PixelLayout::Rgba => Rgb8::new(px[0], px[1], px[2]),
            PixelLayout::Bgr | PixelLayout::Bgra => Rgb8::new(px[2], px[1], px[0]),
        }
    }
}

/// Borrowed, bounds-checked view over a row-major pixel buffer.
#[derive(Clone, Copy, Debug)]
pub struct PixelView<'a> {
    w: usize,
    h: usize,
    /// Bytes between row starts; at least `w * bytes_per_pixel`.
    stride: usize,
    layout: PixelLayout,
    data: &'a [u8],
}

impl<'a> PixelView<'a> {
    pub fn new(
        w: usize,
        h: usize,
        stride: usize,
        layout: PixelLayout,
        data: &'a [u8],
    ) -> Result<Self, String> {
        let row_bytes = w * layout.bytes_per_pixel();
        if stride < row_bytes {
            return Err(format!(
                "stride {stride} smaller than row width {row_bytes} bytes"
            ));
        }
        let needed = if h == 0 { 0 } else { stride * (h - 1) + row_bytes };
        if data.len() < needed {
            return Err(format!(
                "pixel buffer holds {} bytes, {needed} required for {w}x{h}",
                data.len()
            ));
        }
        Ok(Self {
            w,
            h,
            stride,
            layout,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }

    #[inline]
    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    /// Packed pixel bytes of row `y`, without the stride padding.
    #[inline]
    pub fn row(&self, y: usize) -> &'a [u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w * self.layout.bytes_per_pixel()]
    }

    #[inline]
    pub fn rgb(&self, x: usize, y: usize) -> Rgb8 {
        let bpp = self.layout.bytes_per_pixel();
        let start = y * self.stride + x * bpp;
        self.layout.rgb(&self.data[start..start + bpp])
    }

    /// Narrows the view to `rect`, rejecting rectangles that leave the
    /// buffer. This is the only place tile geometry meets pixel bounds.
    pub fn crop(&self, rect: &TileRect) -> Result<PixelView<'a>, String> {
        if rect.x < 0 || rect.y < 0 || rect.width <= 0 || rect.height <= 0 {
            return Err(format!(
                "tile rect ({}, {}, {}, {}) has a negative origin or empty extent",
                rect.x, rect.y, rect.width, rect.height
            ));
        }
        let (x, y) = (rect.x as usize, rect.y as usize);
        let (rw, rh) = (rect.width as usize, rect.height as usize);
        if x + rw > self.w || y + rh > self.h {
            return Err(format!(
                "tile rect ({}, {}, {}, {}) exceeds the {}x{} mask",
                rect.x, rect.y, rect.width, rect.height, self.w, self.h
            ));
        }
        let offset = y * self.stride + x * self.layout.bytes_per_pixel();
        Ok(PixelView {
            w: rw,
            h: rh,
            stride: self.stride,
            layout: self.layout,
            data: &self.data[offset..],
        })
    }
}
