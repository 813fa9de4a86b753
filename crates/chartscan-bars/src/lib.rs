//! Bar detection for roughly axis-aligned vertical bar charts.
//!
//! The pipeline: classify pixels against a [`ColorRange`], clean the mask up
//! morphologically, extract connected regions, optionally reject non-bar
//! shapes, and return the surviving bounding boxes in left-to-right order.
//!
//! ```no_run
//! use chartscan_bars::{BarDetector, BarDetectorParams};
//! use chartscan_core::{ColorRange, RgbImageView};
//!
//! # fn main() -> Result<(), chartscan_bars::DetectError> {
//! # let buffer: Vec<u8> = Vec::new();
//! let image = RgbImageView { width: 640, height: 480, data: &buffer };
//! let params = BarDetectorParams {
//!     color_range: ColorRange::red(),
//!     ..BarDetectorParams::default()
//! };
//! let series = BarDetector::new(params).detect(&image)?;
//! println!("{} bars", series.len());
//! # Ok(())
//! # }
//! ```

mod detector;
mod error;
mod regions;
mod types;

pub use chartscan_core::ColorRange;
pub use detector::{BarDetector, BarDetectorParams};
pub use error::DetectError;
pub use regions::find_regions;
pub use types::{Bar, BarSeries, BarSummary, ShapeFilter};
