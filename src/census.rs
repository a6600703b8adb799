//! Per-tile unique-color census.
//!
//! Rows of a tile are scanned in parallel; workers only read pixels and
//! insert into one shared deduplicating set, so membership is commutative
//! and no ordering guarantees are needed across workers.

use crate::image::PixelView;
use crate::types::Rgb8;
use log::debug;
use parking_lot::Mutex;
use rayon::prelude::*;
use std::collections::HashSet;

/// Concurrency-safe deduplicating set of colors.
///
/// `insert` reports whether the color was newly added; the discovery order
/// is kept so reports can enumerate colors as they were first seen (that
/// order is not stable across runs when rows race).
#[derive(Debug, Default)]
pub struct ColorSet {
    inner: Mutex<ColorSetInner>,
}

#[derive(Debug, Default)]
struct ColorSetInner {
    seen: HashSet<Rgb8>,
    order: Vec<Rgb8>,
}

impl ColorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` iff `color` was not present before.
    pub fn insert(&self, color: Rgb8) -> bool {
        let mut inner = self.inner.lock();
        if inner.seen.insert(color) {
            inner.order.push(color);
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consumes the set, yielding colors in discovery order.
    pub fn into_colors(self) -> Vec<Rgb8> {
        self.inner.into_inner().order
    }
}

/// Distinct colors found in one tile region, discovery-ordered.
#[derive(Clone, Debug)]
pub struct ColorCensus {
    pub colors: Vec<Rgb8>,
}

impl ColorCensus {
    pub fn count(&self) -> usize {
        self.colors.len()
    }
}

/// Visits every pixel of `tile` exactly once and collects the distinct
/// opaque RGB triples. Alpha is ignored for deduplication. An empty region
/// yields an empty census.
pub fn scan_colors(tile: &PixelView<'_>) -> ColorCensus {
    let set = ColorSet::new();
    let bpp = tile.layout().bytes_per_pixel();
    let layout = tile.layout();
    (0..tile.height()).into_par_iter().for_each(|y| {
        for px in tile.row(y).chunks_exact(bpp) {
            set.insert(layout.rgb(px));
        }
    });
    debug!(
        "census: {}x{} region holds {} distinct colors",
        tile.width(),
        tile.height(),
        set.len()
    );
    ColorCensus {
        colors: set.into_colors(),
    }
}
