//! Linear pixel-to-value calibration.
//!
//! Two anchors, each a known (pixel metric, domain value) pair, define an
//! affine map that converts every pixel measurement of a detected bar series
//! into a real value. The two supported pixel-metric policies, relative
//! height and absolute baseline distance, both reduce to this map.
//!
//! Pure functions of their inputs; nothing persists between calls.

use log::debug;
use serde::{Deserialize, Serialize};

/// A known (pixel metric, domain value) correspondence.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalibrationAnchor {
    pub pixel: f64,
    pub value: f64,
}

impl CalibrationAnchor {
    pub fn new(pixel: f64, value: f64) -> Self {
        Self { pixel, value }
    }
}

/// Errors returned by the calibration routines.
#[derive(thiserror::Error, Debug)]
pub enum CalibrateError {
    /// Both anchors sit at the same pixel metric; no finite slope exists.
    #[error("calibration anchors share the same pixel metric ({pixel})")]
    DegenerateAnchors { pixel: f64 },

    /// Nothing to convert.
    #[error("empty pixel-metric series")]
    EmptyInput,
}

/// Reported precision: two decimals, half rounded away from zero.
#[inline]
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Map every pixel metric through the affine function defined by the two
/// anchors. The output is index-aligned with the input.
pub fn calibrate(
    pixel_metrics: &[u32],
    low: CalibrationAnchor,
    high: CalibrationAnchor,
) -> Result<Vec<f64>, CalibrateError> {
    if pixel_metrics.is_empty() {
        return Err(CalibrateError::EmptyInput);
    }
    if low.pixel == high.pixel {
        return Err(CalibrateError::DegenerateAnchors { pixel: low.pixel });
    }

    let slope = (high.value - low.value) / (high.pixel - low.pixel);
    debug!(
        "calibration: {:.6} units per pixel over {} metrics",
        slope,
        pixel_metrics.len()
    );

    Ok(pixel_metrics
        .iter()
        .map(|&p| round2(low.value + (p as f64 - low.pixel) * slope))
        .collect())
}

/// Relative-height policy: no known baseline row.
///
/// Every height is shifted by the minimum observed height, so the shortest
/// bar sits at pixel metric 0 and carries `value_lowest`; the tallest sits
/// at the maximum shifted height and carries `value_highest`. A series of
/// all-equal heights has zero span and is degenerate.
pub fn calibrate_relative(
    heights: &[u32],
    value_lowest: f64,
    value_highest: f64,
) -> Result<Vec<f64>, CalibrateError> {
    let min = *heights.iter().min().ok_or(CalibrateError::EmptyInput)?;
    let shifted: Vec<u32> = heights.iter().map(|&h| h - min).collect();
    let span = *shifted.iter().max().unwrap_or(&0);

    calibrate(
        &shifted,
        CalibrationAnchor::new(0.0, value_lowest),
        CalibrationAnchor::new(span as f64, value_highest),
    )
}

/// Distance from each bar bottom up to the baseline row, clamped at zero.
///
/// A bar whose box extends to or below the baseline (a detection or
/// calibration slip) still contributes a defined, non-negative metric.
pub fn baseline_metrics(bottoms: &[u32], baseline_row: u32) -> Vec<u32> {
    bottoms
        .iter()
        .map(|&b| baseline_row.saturating_sub(b))
        .collect()
}

/// Absolute-baseline policy: the axis baseline row and a top-of-scale row
/// are known, with their domain values.
pub fn calibrate_baseline(
    bottoms: &[u32],
    baseline_row: u32,
    top_row: u32,
    value_at_baseline: f64,
    value_at_top: f64,
) -> Result<Vec<f64>, CalibrateError> {
    let metrics = baseline_metrics(bottoms, baseline_row);
    calibrate(
        &metrics,
        CalibrationAnchor::new(0.0, value_at_baseline),
        CalibrationAnchor::new(
            baseline_row as f64 - top_row as f64,
            value_at_top,
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn anchor(pixel: f64, value: f64) -> CalibrationAnchor {
        CalibrationAnchor::new(pixel, value)
    }

    #[test]
    fn maps_anchor_span_exactly() {
        let out = calibrate(&[0, 50, 100], anchor(0.0, 10.0), anchor(100.0, 110.0)).unwrap();
        assert_eq!(out, vec![10.0, 60.0, 110.0]);
    }

    #[test]
    fn equal_anchor_pixels_are_degenerate() {
        let err = calibrate(&[0, 10], anchor(5.0, 0.0), anchor(5.0, 100.0)).unwrap_err();
        assert!(matches!(
            err,
            CalibrateError::DegenerateAnchors { pixel } if pixel == 5.0
        ));
    }

    #[test]
    fn empty_metrics_are_rejected() {
        let err = calibrate(&[], anchor(0.0, 0.0), anchor(10.0, 1.0)).unwrap_err();
        assert!(matches!(err, CalibrateError::EmptyInput));
        let err = calibrate_relative(&[], 0.0, 1.0).unwrap_err();
        assert!(matches!(err, CalibrateError::EmptyInput));
    }

    #[test]
    fn positive_slope_preserves_order() {
        let metrics = [3, 3, 7, 20, 20, 41];
        let out = calibrate(&metrics, anchor(0.0, 2.0), anchor(50.0, 9.0)).unwrap();
        assert!(out.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn rounds_half_away_from_zero() {
        // 0.125 and -0.125 are exact in binary, so the half-way case is hit
        // exactly: 12.5 -> 13, -12.5 -> -13.
        let out = calibrate(&[0], anchor(0.0, 0.125), anchor(1.0, 1.0)).unwrap();
        assert_eq!(out, vec![0.13]);
        let out = calibrate(&[0], anchor(0.0, -0.125), anchor(1.0, 1.0)).unwrap();
        assert_eq!(out, vec![-0.13]);
    }

    #[test]
    fn relative_policy_anchors_shortest_and_tallest_bars() {
        let out = calibrate_relative(&[30, 80, 55], 10.0, 110.0).unwrap();
        assert_eq!(out, vec![10.0, 110.0, 60.0]);
    }

    #[test]
    fn relative_policy_with_all_equal_heights_is_degenerate() {
        let err = calibrate_relative(&[40, 40, 40], 5.0, 10.0).unwrap_err();
        assert!(matches!(err, CalibrateError::DegenerateAnchors { .. }));
    }

    #[test]
    fn baseline_policy_matches_hand_computed_scenario() {
        // baseline 400, top 50, 0..4000 units: a bar bottom at 380 is 20 px
        // above the baseline, 20 * 4000 / 350 = 228.571...
        let out = calibrate_baseline(&[380], 400, 50, 0.0, 4000.0).unwrap();
        assert_relative_eq!(out[0], 228.57, max_relative = 1e-9);
    }

    #[test]
    fn bars_at_or_below_the_baseline_clamp_to_the_baseline_value() {
        let out = calibrate_baseline(&[400, 410], 400, 50, 0.0, 4000.0).unwrap();
        assert_eq!(out, vec![0.0, 0.0]);
    }

    #[test]
    fn equal_baseline_and_top_rows_are_degenerate() {
        let err = calibrate_baseline(&[100], 200, 200, 0.0, 1.0).unwrap_err();
        assert!(matches!(err, CalibrateError::DegenerateAnchors { .. }));
    }
}
