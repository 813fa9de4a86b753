//! HSV conversion and color-range classification.
//!
//! Channels follow the 8-bit OpenCV convention most published bar-color
//! thresholds are tuned for: H in `0..=179` (degrees halved), S and V in
//! `0..=255`.

use serde::{Deserialize, Serialize};

/// Convert an RGB triple to 8-bit HSV (H in `0..=179`, S/V in `0..=255`).
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> [u8; 3] {
    let rf = r as f32 / 255.0;
    let gf = g as f32 / 255.0;
    let bf = b as f32 / 255.0;

    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;

    let h_deg = if delta == 0.0 {
        0.0
    } else if max == rf {
        60.0 * (((gf - bf) / delta) % 6.0)
    } else if max == gf {
        60.0 * ((bf - rf) / delta + 2.0)
    } else {
        60.0 * ((rf - gf) / delta + 4.0)
    };
    let h_deg = if h_deg < 0.0 { h_deg + 360.0 } else { h_deg };

    let h = ((h_deg / 2.0).round() as u16).min(179) as u8;
    let s = if max == 0.0 {
        0
    } else {
        (delta / max * 255.0).round() as u8
    };
    let v = (max * 255.0).round() as u8;

    [h, s, v]
}

/// One closed interval in HSV space, per-channel inclusive bounds.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct HsvBounds {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl HsvBounds {
    #[inline]
    pub fn contains(&self, hsv: [u8; 3]) -> bool {
        (0..3).all(|c| self.lower[c] <= hsv[c] && hsv[c] <= self.upper[c])
    }
}

/// Union of closed HSV intervals defining "bar-colored" pixels.
///
/// A single interval covers most chart colors; hues that wrap around the
/// color wheel (red) need two, built with [`ColorRange::hue_wrapping`].
/// Invariant after construction: per-channel `lower <= upper` in every
/// interval, and the interval list is non-empty.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ColorRange {
    pub intervals: Vec<HsvBounds>,
}

impl ColorRange {
    /// Range made of a single interval.
    pub fn single(lower: [u8; 3], upper: [u8; 3]) -> Self {
        Self {
            intervals: vec![HsvBounds { lower, upper }],
        }
    }

    /// Range whose hue span may wrap past the top of the hue axis.
    ///
    /// When `lower[0] > upper[0]` the span is split into
    /// `[lower.h, 179]` and `[0, upper.h]`, both keeping the given S/V
    /// bounds; otherwise this is the same as [`ColorRange::single`].
    pub fn hue_wrapping(lower: [u8; 3], upper: [u8; 3]) -> Self {
        if lower[0] <= upper[0] {
            return Self::single(lower, upper);
        }
        Self {
            intervals: vec![
                HsvBounds {
                    lower,
                    upper: [179, upper[1], upper[2]],
                },
                HsvBounds {
                    lower: [0, lower[1], lower[2]],
                    upper,
                },
            ],
        }
    }

    /// Typical blue bars (hue ~200-280 degrees).
    pub fn blue() -> Self {
        Self::single([100, 100, 50], [140, 255, 255])
    }

    /// Typical red bars; red wraps past hue 179.
    pub fn red() -> Self {
        Self::hue_wrapping([160, 80, 50], [10, 255, 255])
    }

    /// True when the HSV triple falls in any interval of the union.
    #[inline]
    pub fn contains(&self, hsv: [u8; 3]) -> bool {
        self.intervals.iter().any(|b| b.contains(hsv))
    }
}
