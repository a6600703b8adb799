//! Tile rectangle derivation for the overlapping blend-tile grid.
//!
//! The grid is logical: `tiles_count × tiles_count` cells spaced
//! `tile_size − 2·overlap` apart, where `overlap` is already the halved
//! neighbor overlap (the CLI halves the raw value on ingestion). First and
//! last rows/columns get special-cased extents to match the crops the
//! blending pipeline actually consumes.

use serde::{Deserialize, Serialize};

/// A tile crop in mask-pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TileRect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl TileRect {
    #[inline]
    pub fn right(&self) -> i64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> i64 {
        self.y + self.height
    }
}

/// Grid parameters shared by every tile of one run.
///
/// `overlap` here is the internal (halved) rectangle overlap, not the raw
/// neighbor overlap the CLI accepts.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct GridGeometry {
    pub tile_size: i64,
    pub overlap: i64,
    pub tiles_count: i64,
}

impl GridGeometry {
    /// Stride between tile origins before the edge adjustments.
    #[inline]
    pub fn spacing(&self) -> i64 {
        self.tile_size - 2 * self.overlap
    }

    /// Rejects configurations that would produce empty or negative extents.
    pub fn validate(&self) -> Result<(), String> {
        if self.tiles_count < 1 {
            return Err(format!("tilesCount must be >= 1, got {}", self.tiles_count));
        }
        if self.overlap < 0 {
            return Err(format!("overlap must be >= 0, got {}", self.overlap));
        }
        if self.tile_size <= 2 * self.overlap {
            return Err(format!(
                "tileSize must exceed twice the halved overlap ({} <= {})",
                self.tile_size,
                2 * self.overlap
            ));
        }
        Ok(())
    }

    /// Derives the pixel rectangle for grid cell `(x, y)`.
    ///
    /// The first-tile branch is checked before the last-tile branch, so a
    /// single-tile grid always sizes its sole tile with the first-tile rule.
    /// That precedence is part of the crop contract with the blending
    /// pipeline and must not be reordered.
    pub fn tile_rect(&self, x: i64, y: i64) -> TileRect {
        let (width, pos_x) = self.axis_extent(x);
        let (height, pos_y) = self.axis_extent(y);
        TileRect {
            x: pos_x,
            y: pos_y,
            width,
            height,
        }
    }

    /// Axis-independent extent rule: first tile drops the leading overlap,
    /// last tile shrinks to three overlaps, interior tiles keep `tile_size`.
    fn axis_extent(&self, idx: i64) -> (i64, i64) {
        if idx == 0 {
            (self.tile_size - self.overlap, 0)
        } else if idx == self.tiles_count - 1 {
            (self.overlap * 3, self.spacing() * idx - self.overlap)
        } else {
            (self.tile_size, self.spacing() * idx - self.overlap)
        }
    }

    /// Total extent covered by the tile rectangles along one axis.
    pub fn covered_extent(&self) -> i64 {
        if self.tiles_count == 1 {
            self.tile_size - self.overlap
        } else {
            self.spacing() * (self.tiles_count - 1) + 2 * self.overlap
        }
    }
}

/// Canonical tile file name, shared by crops and report headers.
pub fn tile_name(x: i64, y: i64) -> String {
    format!("m_{x:03}_{y:03}_lca.png")
}
