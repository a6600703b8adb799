//! I/O helpers for the mask raster and JSON reports.
//!
//! - `load_mask_image`: read a PNG/BMP/etc. into an owned RGBA buffer.
//! - `save_tile_png`: write a cropped tile view to a PNG.
//! - `save_overlay_bmp`: write the annotated mask copy as a BMP.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{PixelLayout, PixelView};
use crate::types::Rgb8;
use image::{DynamicImage, ImageBuffer, Rgb, RgbaImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned RGBA mask buffer with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct MaskImage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl MaskImage {
    /// Construct an owned RGBA buffer from raw bytes (tightly packed).
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, String> {
        if data.len() != width * height * 4 {
            return Err(format!(
                "RGBA buffer holds {} bytes, {} required for {width}x{height}",
                data.len(),
                width * height * 4
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only pixel view.
    pub fn as_view(&self) -> PixelView<'_> {
        PixelView::new(
            self.width,
            self.height,
            self.width * 4,
            PixelLayout::Rgba,
            &self.data,
        )
        .expect("owned buffer is always consistent with its dimensions")
    }

    /// Overwrite the color channels of one pixel, keeping its alpha.
    /// Only the overlay renderer writes to the mask copy.
    #[inline]
    pub fn set_rgb(&mut self, x: usize, y: usize, color: Rgb8) {
        let idx = (y * self.width + x) * 4;
        self.data[idx] = color.r;
        self.data[idx + 1] = color.g;
        self.data[idx + 2] = color.b;
    }
}

/// Load an image from disk and convert to 8-bit RGBA.
pub fn load_mask_image(path: &Path) -> Result<MaskImage, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgba8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    MaskImage::new(width, height, img.into_raw())
}

/// Save a cropped tile view to a PNG.
pub fn save_tile_png(tile: &PixelView<'_>, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = RgbaImage::new(tile.width() as u32, tile.height() as u32);
    for y in 0..tile.height() {
        for x in 0..tile.width() {
            let px = tile.rgb(x, y);
            out.put_pixel(x as u32, y as u32, image::Rgba([px.r, px.g, px.b, 255]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save the annotated mask copy as a BMP (dropping alpha).
pub fn save_overlay_bmp(mask: &MaskImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let view = mask.as_view();
    let mut out: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::new(mask.width() as u32, mask.height() as u32);
    for y in 0..mask.height() {
        for x in 0..mask.width() {
            let px = view.rgb(x, y);
            out.put_pixel(x as u32, y as u32, Rgb([px.r, px.g, px.b]));
        }
    }
    DynamicImage::ImageRgb8(out)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_mismatched_buffer() {
        assert!(MaskImage::new(2, 2, vec![0u8; 15]).is_err());
    }

    #[test]
    fn set_rgb_keeps_alpha() {
        let mut mask = MaskImage::new(2, 1, vec![9u8; 8]).unwrap();
        mask.set_rgb(1, 0, Rgb8::new(1, 2, 3));
        let view = mask.as_view();
        assert_eq!(view.rgb(1, 0), Rgb8::new(1, 2, 3));
        assert_eq!(view.row(0)[7], 9, "alpha byte must survive the write");
    }
}
