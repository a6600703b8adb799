//! Accumulated run report, threaded through the orchestrator instead of any
//! global line buffer. Entries stay in grid-walk order.

use crate::validate::TileVerdict;
use serde::Serialize;
use std::fmt;

#[derive(Clone, Debug, Default, Serialize)]
pub struct Report {
    pub entries: Vec<TileVerdict>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, verdict: TileVerdict) {
        debug_assert!(verdict.needs_report);
        self.entries.push(verdict);
    }

    pub fn failing_tiles(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::census::ColorCensus;
    use crate::types::Rgb8;
    use crate::validate::validate_tile;

    #[test]
    fn entries_render_in_insertion_order() {
        let mut report = Report::new();
        for name in ["m_000_000_lca.png", "m_000_001_lca.png"] {
            let census = ColorCensus {
                colors: vec![Rgb8::new(1, 2, 3), Rgb8::new(4, 5, 6)],
            };
            report.push(validate_tile(name, census, 1));
        }
        let text = report.to_string();
        let headers: Vec<&str> = text.lines().filter(|l| l.contains(" had ")).collect();
        assert_eq!(
            headers,
            vec![
                "m_000_000_lca.png had 2 colors",
                "m_000_001_lca.png had 2 colors"
            ]
        );
        assert_eq!(report.failing_tiles(), 2);
    }
}
