use log::debug;
use serde::{Deserialize, Serialize};

use chartscan_core::{close, open, ColorRange, Mask, MorphologyParams, RgbImageView};

use crate::error::DetectError;
use crate::regions::find_regions;
use crate::types::{BarSeries, ShapeFilter};

/// Configuration for the bar detector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarDetectorParams {
    /// HSV intervals classifying "bar-colored" pixels.
    pub color_range: ColorRange,
    /// Mask cleanup passes run before region extraction.
    #[serde(default)]
    pub morphology: MorphologyParams,
    /// Optional geometric rejection of non-bar regions. `None` (the
    /// default) passes every region through.
    #[serde(default)]
    pub shape_filter: Option<ShapeFilter>,
}

impl Default for BarDetectorParams {
    fn default() -> Self {
        Self {
            color_range: ColorRange::blue(),
            morphology: MorphologyParams::default(),
            shape_filter: None,
        }
    }
}

/// Detects bars of a target color in a raster image.
///
/// Stateless per call: two `detect` runs over the same image and parameters
/// return identical series.
pub struct BarDetector {
    params: BarDetectorParams,
}

impl BarDetector {
    pub fn new(params: BarDetectorParams) -> Self {
        Self { params }
    }

    #[inline]
    pub fn params(&self) -> &BarDetectorParams {
        &self.params
    }

    /// Run the full pipeline: segment, clean up, extract regions, filter,
    /// and order left-to-right (ties by ascending `y`).
    pub fn detect(&self, image: &RgbImageView<'_>) -> Result<BarSeries, DetectError> {
        if !image.is_valid() {
            return Err(DetectError::ImageDecode {
                width: image.width,
                height: image.height,
                expected: image.expected_len(),
                got: image.data.len(),
            });
        }

        let mut mask = Mask::from_color_range(image, &self.params.color_range);
        debug!(
            "segmentation: {} of {} pixels in range",
            mask.count_on(),
            image.width * image.height
        );

        // Opening first, so closing afterwards cannot resurrect noise the
        // opening was asked to remove.
        if self.params.morphology.opening_iterations > 0 {
            mask = open(&mask, self.params.morphology.opening_iterations);
        }
        if self.params.morphology.closing_iterations > 0 {
            mask = close(&mask, self.params.morphology.closing_iterations);
        }

        let mut bars = find_regions(&mask);
        debug!("region extraction: {} connected regions", bars.len());

        if let Some(filter) = &self.params.shape_filter {
            bars.retain(|bar| filter.accepts(bar));
            debug!("shape filter: {} regions kept", bars.len());
        }

        if bars.is_empty() {
            return Err(DetectError::EmptyResult);
        }

        // Stable reading order; the calibrated series is index-aligned
        // with this.
        bars.sort_by_key(|bar| (bar.x, bar.y));
        Ok(BarSeries { bars })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Bar;

    const WHITE: [u8; 3] = [255, 255, 255];
    const BLUE: [u8; 3] = [0, 0, 255];
    const RED: [u8; 3] = [255, 0, 0];

    fn chart(
        width: usize,
        height: usize,
        rects: &[(usize, usize, usize, usize)],
        color: [u8; 3],
    ) -> Vec<u8> {
        let mut data = Vec::with_capacity(width * height * 3);
        for _ in 0..width * height {
            data.extend_from_slice(&WHITE);
        }
        for &(x, y, w, h) in rects {
            for yy in y..y + h {
                for xx in x..x + w {
                    let i = (yy * width + xx) * 3;
                    data[i..i + 3].copy_from_slice(&color);
                }
            }
        }
        data
    }

    fn view(width: usize, height: usize, data: &[u8]) -> RgbImageView<'_> {
        RgbImageView {
            width,
            height,
            data,
        }
    }

    fn blue_detector() -> BarDetector {
        BarDetector::new(BarDetectorParams::default())
    }

    #[test]
    fn detects_all_rectangles_in_reading_order() {
        // Three disjoint bars, drawn right-to-left on purpose.
        let rects = [(60, 10, 8, 55), (35, 40, 8, 25), (10, 25, 8, 40)];
        let data = chart(90, 75, &rects, BLUE);
        let series = blue_detector().detect(&view(90, 75, &data)).unwrap();

        assert_eq!(
            series.bars,
            vec![
                Bar { x: 10, y: 25, width: 8, height: 40 },
                Bar { x: 35, y: 40, width: 8, height: 25 },
                Bar { x: 60, y: 10, width: 8, height: 55 },
            ]
        );
    }

    #[test]
    fn detect_is_idempotent() {
        let rects = [(10, 20, 8, 40), (30, 10, 8, 50)];
        let data = chart(60, 70, &rects, BLUE);
        let detector = blue_detector();
        let first = detector.detect(&view(60, 70, &data)).unwrap();
        let second = detector.detect(&view(60, 70, &data)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn equal_x_ties_break_by_ascending_y() {
        let rects = [(10, 45, 8, 12), (10, 5, 8, 12)];
        let data = chart(40, 70, &rects, BLUE);
        let series = blue_detector().detect(&view(40, 70, &data)).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.bars[0].y, 5);
        assert_eq!(series.bars[1].y, 45);
    }

    #[test]
    fn no_matching_pixels_is_an_empty_result() {
        let data = chart(40, 40, &[], BLUE);
        let err = blue_detector().detect(&view(40, 40, &data)).unwrap_err();
        assert!(matches!(err, DetectError::EmptyResult));
    }

    #[test]
    fn degenerate_color_range_is_an_empty_result_not_a_fault() {
        let rects = [(10, 10, 8, 40)];
        let data = chart(40, 60, &rects, BLUE);
        let params = BarDetectorParams {
            // Inverted hue bounds match nothing.
            color_range: ColorRange::single([140, 100, 50], [100, 255, 255]),
            ..BarDetectorParams::default()
        };
        let err = BarDetector::new(params)
            .detect(&view(40, 60, &data))
            .unwrap_err();
        assert!(matches!(err, DetectError::EmptyResult));
    }

    #[test]
    fn truncated_buffer_fails_as_image_decode() {
        let data = chart(40, 40, &[], BLUE);
        let err = blue_detector()
            .detect(&view(40, 40, &data[..100]))
            .unwrap_err();
        assert!(matches!(err, DetectError::ImageDecode { .. }));
    }

    #[test]
    fn zero_sized_image_fails_as_image_decode() {
        let err = blue_detector().detect(&view(0, 0, &[])).unwrap_err();
        assert!(matches!(err, DetectError::ImageDecode { .. }));
    }

    #[test]
    fn shape_filter_drops_noise_but_keeps_bars() {
        // One real bar plus a 2x2 noise blob.
        let rects = [(10, 15, 10, 40), (40, 30, 2, 2)];
        let data = chart(60, 70, &rects, BLUE);

        let unfiltered = blue_detector().detect(&view(60, 70, &data)).unwrap();
        assert_eq!(unfiltered.len(), 2);

        let params = BarDetectorParams {
            shape_filter: Some(ShapeFilter::default()),
            ..BarDetectorParams::default()
        };
        let filtered = BarDetector::new(params)
            .detect(&view(60, 70, &data))
            .unwrap();
        assert_eq!(
            filtered.bars,
            vec![Bar { x: 10, y: 15, width: 10, height: 40 }]
        );
    }

    #[test]
    fn wrapped_red_detects_the_same_geometry_as_plain_blue() {
        let rects = [(10, 20, 8, 40), (30, 10, 8, 50)];

        let blue_data = chart(60, 70, &rects, BLUE);
        let blue_series = blue_detector().detect(&view(60, 70, &blue_data)).unwrap();

        let red_data = chart(60, 70, &rects, RED);
        let red_params = BarDetectorParams {
            color_range: ColorRange::red(),
            ..BarDetectorParams::default()
        };
        let red_series = BarDetector::new(red_params)
            .detect(&view(60, 70, &red_data))
            .unwrap();

        assert_eq!(blue_series, red_series);
    }
}
