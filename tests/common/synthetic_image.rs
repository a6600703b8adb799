//! Synthetic mask painters shared by the integration tests.

use mask_checker::image::MaskImage;
use mask_checker::{GridGeometry, Rgb8};

/// A mask filled with a single color, sized to exactly cover the grid.
pub fn solid_mask(geometry: &GridGeometry, color: Rgb8) -> MaskImage {
    let extent = geometry.covered_extent() as usize;
    let mut data = Vec::with_capacity(extent * extent * 4);
    for _ in 0..extent * extent {
        data.extend_from_slice(&[color.r, color.g, color.b, 255]);
    }
    MaskImage::new(extent, extent, data).expect("solid mask buffer is consistent")
}

/// A solid mask with one extra marker pixel per tile, placed in the region
/// exclusive to that tile, so every tile sees exactly two distinct colors.
pub fn mask_with_tile_markers(geometry: &GridGeometry, background: Rgb8) -> MaskImage {
    let mut mask = solid_mask(geometry, background);
    for x in 0..geometry.tiles_count {
        for y in 0..geometry.tiles_count {
            let (px, py) = (exclusive_midpoint(geometry, x), exclusive_midpoint(geometry, y));
            let marker = marker_color(x, y, background);
            mask.set_rgb(px, py, marker);
        }
    }
    mask
}

/// Marker color for tile `(x, y)`, guaranteed distinct from the background.
pub fn marker_color(x: i64, y: i64, background: Rgb8) -> Rgb8 {
    let candidate = Rgb8::new(
        (x as u8).wrapping_mul(16).wrapping_add(1),
        (y as u8).wrapping_mul(16).wrapping_add(1),
        200,
    );
    if candidate == background {
        Rgb8::new(candidate.r, candidate.g, 201)
    } else {
        candidate
    }
}

/// Midpoint of the axis interval covered by tile `idx` and no neighbor.
fn exclusive_midpoint(geometry: &GridGeometry, idx: i64) -> usize {
    let rect = geometry.tile_rect(idx, 0);
    let lo = if idx == 0 {
        rect.x
    } else {
        geometry.tile_rect(idx - 1, 0).right()
    };
    let hi = if idx == geometry.tiles_count - 1 {
        rect.right()
    } else {
        geometry.tile_rect(idx + 1, 0).x
    };
    assert!(lo < hi, "tile {idx} has no exclusive interval");
    ((lo + hi) / 2) as usize
}
