#![doc = include_str!("../README.md")]

pub mod census;
pub mod checker;
pub mod config;
pub mod geometry;
pub mod image;
pub mod overlay;
pub mod report;
pub mod types;
pub mod validate;

// --- High-level re-exports -------------------------------------------------

pub use crate::checker::{MaskChecker, RunSummary};
pub use crate::config::{CheckerConfig, OutputMode};
pub use crate::geometry::{tile_name, GridGeometry, TileRect};
pub use crate::report::Report;
pub use crate::types::Rgb8;
