//! End-to-end helpers: image file in, calibrated value series out.

use std::path::Path;

use image::RgbImage;
use log::info;
use serde::{Deserialize, Serialize};

use chartscan_bars::{BarDetector, BarDetectorParams, BarSeries};
use chartscan_calib::{calibrate_baseline, calibrate_relative};
use chartscan_core::RgbImageView;

use crate::error::ChartError;

/// Load and decode an image file into an RGB buffer.
pub fn load_rgb(path: &Path) -> Result<RgbImage, ChartError> {
    let img = image::ImageReader::open(path)?.decode()?.to_rgb8();
    info!(
        "loaded {} ({}x{})",
        path.display(),
        img.width(),
        img.height()
    );
    Ok(img)
}

/// Borrow an `image::RgbImage` as the detector's buffer view.
pub fn rgb_view(img: &RgbImage) -> RgbImageView<'_> {
    RgbImageView {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw(),
    }
}

/// Detect bars in a decoded image.
pub fn detect_bars(img: &RgbImage, params: &BarDetectorParams) -> Result<BarSeries, ChartError> {
    let series = BarDetector::new(params.clone()).detect(&rgb_view(img))?;
    info!("detected {} bars", series.len());
    Ok(series)
}

/// Which pixel metric feeds the affine calibration map.
///
/// The core has no default policy; picking one is the caller's choice.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum CalibrationSpec {
    /// No known baseline: anchor the shortest and tallest observed bars.
    Relative {
        value_lowest: f64,
        value_highest: f64,
    },
    /// Known axis geometry: baseline and top-of-scale pixel rows with
    /// their domain values.
    Baseline {
        baseline_row: u32,
        top_row: u32,
        value_at_baseline: f64,
        value_at_top: f64,
    },
}

/// Convert a detected series into calibrated values under `spec`.
pub fn calibrate_series(series: &BarSeries, spec: &CalibrationSpec) -> Result<Vec<f64>, ChartError> {
    let values = match *spec {
        CalibrationSpec::Relative {
            value_lowest,
            value_highest,
        } => calibrate_relative(&series.heights(), value_lowest, value_highest)?,
        CalibrationSpec::Baseline {
            baseline_row,
            top_row,
            value_at_baseline,
            value_at_top,
        } => calibrate_baseline(
            &series.bottoms(),
            baseline_row,
            top_row,
            value_at_baseline,
            value_at_top,
        )?,
    };
    Ok(values)
}

/// Full pipeline: detect bars, then calibrate their pixel measurements.
pub fn digitize(
    img: &RgbImage,
    params: &BarDetectorParams,
    spec: &CalibrationSpec,
) -> Result<Vec<f64>, ChartError> {
    let series = detect_bars(img, params)?;
    calibrate_series(&series, spec)
}
