//! CLI configuration: positional mask path followed by `key=value` flags.
//!
//! `tileSize`, `overlap`, `tilesCount` and `colorsPerTile` are mandatory;
//! `outputTiles` defaults to reporting only. Unknown flags are logged and
//! skipped so callers can share invocation scripts with newer tools.

use crate::geometry::GridGeometry;
use log::warn;
use std::path::PathBuf;

/// Side-effect mode for failing tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    /// Console report only.
    None,
    /// Save each failing crop under `Bad_Tiles/`.
    ExportTiles,
    /// Draw markers on a mask copy, saved once as `Bad_Tiles/debugMask.bmp`.
    Overlay,
    /// Both crops and the marker overlay.
    Full,
}

impl OutputMode {
    pub fn from_raw(raw: i64) -> Result<Self, String> {
        match raw {
            0 => Ok(OutputMode::None),
            1 => Ok(OutputMode::ExportTiles),
            2 => Ok(OutputMode::Overlay),
            3 => Ok(OutputMode::Full),
            other => Err(format!("outputTiles must be in 0..=3, got {other}")),
        }
    }

    pub fn exports_tiles(&self) -> bool {
        matches!(self, OutputMode::ExportTiles | OutputMode::Full)
    }

    pub fn draws_overlay(&self) -> bool {
        matches!(self, OutputMode::Overlay | OutputMode::Full)
    }
}

#[derive(Clone, Debug)]
pub struct CheckerConfig {
    pub mask_path: PathBuf,
    /// Grid parameters; `overlap` is already halved from the raw flag value.
    pub geometry: GridGeometry,
    /// Inclusive upper bound on distinct colors per tile.
    pub colors_per_tile: usize,
    pub output_mode: OutputMode,
    /// Optional structured report destination.
    pub report_json: Option<PathBuf>,
}

impl CheckerConfig {
    /// Parses `[mask_path, key=value...]` as passed on the command line
    /// (program name already stripped).
    pub fn parse_args(args: &[String]) -> Result<CheckerConfig, String> {
        let mask_path = args
            .first()
            .ok_or_else(|| "missing mask image path".to_string())?;

        let mut tile_size = None;
        let mut overlap = None;
        let mut tiles_count = None;
        let mut colors_per_tile = None;
        let mut output_mode = OutputMode::None;
        let mut report_json = None;

        for arg in &args[1..] {
            let Some((key, value)) = arg.split_once('=') else {
                warn!("Unknown argument: {arg}");
                continue;
            };
            match key {
                "tileSize" => tile_size = Some(parse_int(key, value)?),
                // the raw flag is the neighbor overlap; the grid works with
                // half of it
                "overlap" => overlap = Some(parse_int(key, value)? / 2),
                "tilesCount" => tiles_count = Some(parse_int(key, value)?),
                "colorsPerTile" => colors_per_tile = Some(parse_int(key, value)?),
                "outputTiles" => output_mode = OutputMode::from_raw(parse_int(key, value)?)?,
                "reportJson" => report_json = Some(PathBuf::from(value)),
                _ => warn!("Unknown argument: {arg}"),
            }
        }

        let (Some(tile_size), Some(overlap), Some(tiles_count), Some(colors_per_tile)) =
            (tile_size, overlap, tiles_count, colors_per_tile)
        else {
            return Err(
                "tileSize, overlap, tilesCount and colorsPerTile are all required".to_string(),
            );
        };
        if colors_per_tile < 0 {
            return Err(format!("colorsPerTile must be >= 0, got {colors_per_tile}"));
        }

        let geometry = GridGeometry {
            tile_size,
            overlap,
            tiles_count,
        };
        geometry.validate()?;

        Ok(CheckerConfig {
            mask_path: PathBuf::from(mask_path),
            geometry,
            colors_per_tile: colors_per_tile as usize,
            output_mode,
            report_json,
        })
    }
}

fn parse_int(key: &str, value: &str) -> Result<i64, String> {
    value
        .parse::<i64>()
        .map_err(|e| format!("Failed to parse {key}={value}: {e}"))
}
