//! Debug markers drawn on a full-size copy of the mask.
//!
//! Each failing tile gets its rectangle stroked in black on the copy; the
//! orchestrator persists the copy once, after the whole walk.

use crate::geometry::TileRect;
use crate::image::MaskImage;
use crate::types::Rgb8;

/// How far the marker reaches beyond the tile boundary, per side.
const MARKER_MARGIN: i64 = 5;
/// Pen width of the marker outline.
const STROKE_WIDTH: i64 = 10;
/// Marker pen color. Markers are outline-only; no fill is applied.
const STROKE_COLOR: Rgb8 = Rgb8 { r: 0, g: 0, b: 0 };

/// Grows `rect` outward by the marker margin on each axis whose origin
/// exceeds the margin, so markers remain visible past the tile edge.
pub fn expand_marker(rect: TileRect) -> TileRect {
    let mut out = rect;
    if out.x > MARKER_MARGIN {
        out.x -= MARKER_MARGIN;
        out.width += 2 * MARKER_MARGIN;
    }
    if out.y > MARKER_MARGIN {
        out.y -= MARKER_MARGIN;
        out.height += 2 * MARKER_MARGIN;
    }
    out
}

/// Strokes the outline of the expanded tile rectangle onto the overlay copy.
pub fn draw_marker(overlay: &mut MaskImage, rect: &TileRect) {
    let rect = expand_marker(*rect);
    stroke_rect(overlay, &rect, STROKE_WIDTH, STROKE_COLOR);
}

/// Paints the band of pixels within `width / 2` of the rectangle's outline,
/// clamped to the image. The pen is centered on the outline.
fn stroke_rect(image: &mut MaskImage, rect: &TileRect, width: i64, color: Rgb8) {
    let half = width / 2;
    let outer_x0 = rect.x - half;
    let outer_y0 = rect.y - half;
    let outer_x1 = rect.right() + half;
    let outer_y1 = rect.bottom() + half;
    let inner_x0 = rect.x + half;
    let inner_y0 = rect.y + half;
    let inner_x1 = rect.right() - half;
    let inner_y1 = rect.bottom() - half;

    let w = image.width() as i64;
    let h = image.height() as i64;
    for y in outer_y0.max(0)..outer_y1.min(h) {
        for x in outer_x0.max(0)..outer_x1.min(w) {
            let inside_inner = x >= inner_x0 && x < inner_x1 && y >= inner_y0 && y < inner_y1;
            if !inside_inner {
                image.set_rgb(x as usize, y as usize, color);
            }
        }
    }
}
