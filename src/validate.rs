//! Threshold check for one tile's census.

use crate::census::ColorCensus;
use crate::types::{Rgb8, OPAQUE_ALPHA};
use serde::Serialize;
use std::fmt;

/// Outcome of validating one tile against `colorsPerTile`.
#[derive(Clone, Debug, Serialize)]
pub struct TileVerdict {
    pub tile_name: String,
    pub color_count: usize,
    /// Distinct colors in enumeration order; only populated on failure,
    /// since passing tiles never reach the report.
    pub colors: Vec<Rgb8>,
    pub needs_report: bool,
}

impl TileVerdict {
    /// Report header line for a failing tile.
    pub fn header(&self) -> String {
        format!("{} had {} colors", self.tile_name, self.color_count)
    }
}

impl fmt::Display for TileVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header())?;
        for (i, c) in self.colors.iter().enumerate() {
            writeln!(f, "\t{}: ({}, {}, {}, {})", i, c.r, c.g, c.b, OPAQUE_ALPHA)?;
        }
        Ok(())
    }
}

/// A tile fails iff it holds strictly more distinct colors than allowed.
pub fn validate_tile(tile_name: &str, census: ColorCensus, colors_per_tile: usize) -> TileVerdict {
    let color_count = census.count();
    let needs_report = color_count > colors_per_tile;
    TileVerdict {
        tile_name: tile_name.to_string(),
        color_count,
        colors: if needs_report { census.colors } else { Vec::new() },
        needs_report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn census(n: u8) -> ColorCensus {
        ColorCensus {
            colors: (0..n).map(|i| Rgb8::new(i, i, i)).collect(),
        }
    }

    #[test]
    fn count_at_threshold_passes() {
        let verdict = validate_tile("m_000_000_lca.png", census(3), 3);
        assert!(!verdict.needs_report);
        assert!(verdict.colors.is_empty());
    }

    #[test]
    fn count_above_threshold_fails() {
        let verdict = validate_tile("m_001_002_lca.png", census(4), 3);
        assert!(verdict.needs_report);
        assert_eq!(verdict.color_count, 4);
        assert_eq!(verdict.colors.len(), 4);
    }

    #[test]
    fn report_lines_match_expected_shape() {
        let verdict = validate_tile("m_001_002_lca.png", census(2), 1);
        let rendered = verdict.to_string();
        let mut lines = rendered.lines();
        assert_eq!(lines.next(), Some("m_001_002_lca.png had 2 colors"));
        assert_eq!(lines.next(), Some("\t0: (0, 0, 0, 255)"));
        assert_eq!(lines.next(), Some("\t1: (1, 1, 1, 255)"));
        assert_eq!(lines.next(), None);
    }
}
