//! High-level facade for the `chartscan-*` workspace.
//!
//! This crate provides:
//! - stable re-exports of the detector and calibration crates
//! - (feature `image`) end-to-end helpers that load a chart image, detect
//!   its bars, and convert pixel measurements into calibrated values
//! - CSV export with optional evenly spaced date stamping
//! - (feature `cli`) the `chartscan` command-line binary.
//!
//! ## Quickstart
//!
//! ```no_run
//! use chartscan::pipeline::{self, CalibrationSpec};
//! use chartscan::BarDetectorParams;
//!
//! # fn main() -> Result<(), chartscan::ChartError> {
//! let img = pipeline::load_rgb("chart.png".as_ref())?;
//! let values = pipeline::digitize(
//!     &img,
//!     &BarDetectorParams::default(),
//!     &CalibrationSpec::Relative { value_lowest: 12.0, value_highest: 96.5 },
//! )?;
//! println!("{values:?}");
//! # Ok(())
//! # }
//! ```

pub use chartscan_bars as bars;
pub use chartscan_calib as calib;
pub use chartscan_core as core;

pub use chartscan_bars::{
    Bar, BarDetector, BarDetectorParams, BarSeries, BarSummary, DetectError, ShapeFilter,
};
pub use chartscan_calib::{CalibrateError, CalibrationAnchor};
pub use chartscan_core::{ColorRange, HsvBounds, MorphologyParams};

mod error;
pub mod export;

#[cfg(feature = "image")]
pub mod annotate;
#[cfg(feature = "image")]
pub mod pipeline;

pub use error::ChartError;
