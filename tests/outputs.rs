mod common;

use common::synthetic_image::{mask_with_tile_markers, solid_mask};
use mask_checker::image::save_tile_png;
use mask_checker::{tile_name, CheckerConfig, GridGeometry, MaskChecker, OutputMode, Rgb8};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const BACKGROUND: Rgb8 = Rgb8 { r: 10, g: 20, b: 30 };

fn geometry() -> GridGeometry {
    GridGeometry {
        tile_size: 8,
        overlap: 1,
        tiles_count: 2,
    }
}

/// Writes a synthetic mask next to which the checker will create `Bad_Tiles`.
fn write_mask(dir: &Path, failing: bool) -> std::path::PathBuf {
    let geometry = geometry();
    let mask = if failing {
        mask_with_tile_markers(&geometry, BACKGROUND)
    } else {
        solid_mask(&geometry, BACKGROUND)
    };
    let path = dir.join("mask.png");
    save_tile_png(&mask.as_view(), &path).expect("mask fixture must save");
    path
}

fn config(mask_path: std::path::PathBuf, output_mode: OutputMode) -> CheckerConfig {
    CheckerConfig {
        mask_path,
        geometry: geometry(),
        colors_per_tile: 1,
        output_mode,
        report_json: None,
    }
}

#[test]
fn mode_none_never_touches_the_filesystem() {
    let dir = tempdir().unwrap();
    let mask_path = write_mask(dir.path(), true);

    let checker = MaskChecker::new(config(mask_path, OutputMode::None));
    let summary = checker.run(&mut |_| {}).unwrap();

    assert_eq!(summary.failing_tiles, 4);
    assert!(
        !dir.path().join("Bad_Tiles").exists(),
        "mode 0 must not create output directories"
    );
}

#[test]
fn mode_full_writes_crops_and_overlay() {
    let dir = tempdir().unwrap();
    let mask_path = write_mask(dir.path(), true);

    let checker = MaskChecker::new(config(mask_path, OutputMode::Full));
    let summary = checker.run(&mut |_| {}).unwrap();
    assert_eq!(summary.failing_tiles, 4);

    let out_dir = dir.path().join("Bad_Tiles");
    for x in 0..2 {
        for y in 0..2 {
            let crop = out_dir.join(tile_name(x, y));
            assert!(crop.exists(), "missing crop {}", crop.display());
        }
    }
    assert!(out_dir.join("debugMask.bmp").exists());
}

#[test]
fn mode_full_with_clean_mask_writes_nothing() {
    let dir = tempdir().unwrap();
    let mask_path = write_mask(dir.path(), false);

    let checker = MaskChecker::new(config(mask_path, OutputMode::Full));
    let summary = checker.run(&mut |_| {}).unwrap();

    assert_eq!(summary.failing_tiles, 0);
    assert!(!dir.path().join("Bad_Tiles").exists());
}

#[test]
fn mode_export_writes_crops_but_no_overlay() {
    let dir = tempdir().unwrap();
    let mask_path = write_mask(dir.path(), true);

    let checker = MaskChecker::new(config(mask_path, OutputMode::ExportTiles));
    checker.run(&mut |_| {}).unwrap();

    let out_dir = dir.path().join("Bad_Tiles");
    assert!(out_dir.join(tile_name(0, 0)).exists());
    assert!(!out_dir.join("debugMask.bmp").exists());
}

#[test]
fn mode_overlay_writes_only_the_annotated_copy() {
    let dir = tempdir().unwrap();
    let mask_path = write_mask(dir.path(), true);

    let checker = MaskChecker::new(config(mask_path, OutputMode::Overlay));
    checker.run(&mut |_| {}).unwrap();

    let out_dir = dir.path().join("Bad_Tiles");
    assert!(out_dir.join("debugMask.bmp").exists());
    assert!(!out_dir.join(tile_name(0, 0)).exists());
}

#[test]
fn report_json_flag_writes_structured_report() {
    let dir = tempdir().unwrap();
    let mask_path = write_mask(dir.path(), true);
    let json_path = dir.path().join("report.json");

    let mut config = config(mask_path, OutputMode::None);
    config.report_json = Some(json_path.clone());
    MaskChecker::new(config).run(&mut |_| {}).unwrap();

    let contents = fs::read_to_string(&json_path).unwrap();
    assert!(contents.contains("m_000_000_lca.png"));
    assert!(contents.contains("\"color_count\": 2"));
}
