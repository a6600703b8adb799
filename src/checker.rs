//! Run orchestration: one linear pass over the tile grid.
//!
//! The walk is strictly sequential in `(x, y)` with `x` outer, which fixes
//! both the report ordering and the order output files are written in. Only
//! the pixel census inside a tile runs in parallel.

use crate::census::scan_colors;
use crate::config::CheckerConfig;
use crate::geometry::tile_name;
use crate::image::{load_mask_image, save_overlay_bmp, save_tile_png, write_json_file, MaskImage};
use crate::overlay::draw_marker;
use crate::report::Report;
use crate::validate::validate_tile;
use log::debug;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Subdirectory of the mask's location receiving crops and the overlay.
pub const OUTPUT_DIR_NAME: &str = "Bad_Tiles";
/// File name of the annotated mask copy.
pub const OVERLAY_FILE_NAME: &str = "debugMask.bmp";

#[derive(Clone, Debug, Serialize)]
pub struct RunSummary {
    pub tiles_processed: usize,
    pub failing_tiles: usize,
    pub latency_ms: f64,
    pub report: Report,
}

pub struct MaskChecker {
    config: CheckerConfig,
}

impl MaskChecker {
    pub fn new(config: CheckerConfig) -> Self {
        Self { config }
    }

    /// Validates every tile of the mask, invoking `progress` with each tile
    /// name as it completes. Any load or save failure aborts the whole run;
    /// there is no partial-success mode.
    pub fn run(&self, progress: &mut dyn FnMut(&str)) -> Result<RunSummary, String> {
        let t0 = Instant::now();
        let mask = load_mask_image(&self.config.mask_path)?;
        self.run_on(&mask, progress, t0)
    }

    /// Same as [`run`](Self::run) but for an already loaded mask.
    pub fn run_on_mask(
        &self,
        mask: &MaskImage,
        progress: &mut dyn FnMut(&str),
    ) -> Result<RunSummary, String> {
        self.run_on(mask, progress, Instant::now())
    }

    fn run_on(
        &self,
        mask: &MaskImage,
        progress: &mut dyn FnMut(&str),
        t0: Instant,
    ) -> Result<RunSummary, String> {
        let geometry = &self.config.geometry;
        let mode = self.config.output_mode;
        let out_dir = self.output_dir();

        // full-size copy, written once at the end if any tile marked it
        let mut overlay = mode.draws_overlay().then(|| mask.clone());
        let mut overlay_dirty = false;
        let mut report = Report::new();
        let mut tiles_processed = 0usize;

        for x in 0..geometry.tiles_count {
            for y in 0..geometry.tiles_count {
                let rect = geometry.tile_rect(x, y);
                let tile = mask.as_view().crop(&rect)?;
                let census = scan_colors(&tile);
                let name = tile_name(x, y);
                let verdict = validate_tile(&name, census, self.config.colors_per_tile);

                if verdict.needs_report {
                    debug!(
                        "tile {name} failed: {} colors > {}",
                        verdict.color_count, self.config.colors_per_tile
                    );
                    if mode.exports_tiles() {
                        save_tile_png(&tile, &out_dir.join(&name))?;
                    }
                    if let Some(overlay) = overlay.as_mut() {
                        draw_marker(overlay, &rect);
                        overlay_dirty = true;
                    }
                    report.push(verdict);
                }

                tiles_processed += 1;
                progress(&name);
            }
        }

        if overlay_dirty {
            if let Some(overlay) = overlay.as_ref() {
                save_overlay_bmp(overlay, &out_dir.join(OVERLAY_FILE_NAME))?;
            }
        }

        if let Some(path) = &self.config.report_json {
            write_json_file(path, &report)?;
        }

        Ok(RunSummary {
            tiles_processed,
            failing_tiles: report.failing_tiles(),
            latency_ms: t0.elapsed().as_secs_f64() * 1000.0,
            report,
        })
    }

    /// `Bad_Tiles` directory next to the mask.
    pub fn output_dir(&self) -> PathBuf {
        self.config
            .mask_path
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(OUTPUT_DIR_NAME)
    }
}
