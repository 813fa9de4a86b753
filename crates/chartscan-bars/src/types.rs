use serde::{Deserialize, Serialize};

/// One detected bar: axis-aligned bounding box in pixel units, top-left
/// origin. `width` and `height` are always positive.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Bar {
    /// Pixel row just below the bar, `y + height`.
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Pixel column just right of the bar, `x + width`.
    #[inline]
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Height-over-width ratio. Bars are tall and narrow, so this is
    /// well above 1 for real bars.
    #[inline]
    pub fn aspect(&self) -> f32 {
        self.height as f32 / self.width as f32
    }
}

/// Bars ordered by ascending `x`, ties broken by ascending `y`.
///
/// The ordering is load-bearing: index `i` of the calibrated value series
/// corresponds to bar `i` here, which is the chart's reading order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BarSeries {
    pub bars: Vec<Bar>,
}

impl BarSeries {
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bar> {
        self.bars.iter()
    }

    /// Pixel heights in series order.
    pub fn heights(&self) -> Vec<u32> {
        self.bars.iter().map(|b| b.height).collect()
    }

    /// Bottom rows in series order, for baseline-anchored calibration.
    pub fn bottoms(&self) -> Vec<u32> {
        self.bars.iter().map(|b| b.bottom()).collect()
    }

    /// Shortest and tallest bar of the series, height ties broken by
    /// smallest `x`. `None` only for an empty series.
    pub fn summarize(&self) -> Option<BarSummary> {
        let mut iter = self.bars.iter();
        let first = *iter.next()?;
        let mut shortest = first;
        let mut tallest = first;
        for &bar in iter {
            if bar.height < shortest.height {
                shortest = bar;
            }
            if bar.height > tallest.height {
                tallest = bar;
            }
        }
        Some(BarSummary { shortest, tallest })
    }
}

impl<'a> IntoIterator for &'a BarSeries {
    type Item = &'a Bar;
    type IntoIter = std::slice::Iter<'a, Bar>;

    fn into_iter(self) -> Self::IntoIter {
        self.bars.iter()
    }
}

/// Extremes of a [`BarSeries`], the default anchors for auto-calibration.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BarSummary {
    pub shortest: Bar,
    pub tallest: Bar,
}

/// Bounds a region must satisfy to count as a bar.
///
/// Filtering is opt-in (`Option<ShapeFilter>` in the detector params):
/// color segmentation alone usually isolates the bars, and the filter exists
/// to drop legends, axis ticks and text when it does not.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapeFilter {
    pub min_width: u32,
    pub max_width: u32,
    pub min_height: u32,
    /// Minimum height-over-width ratio; bars are taller than wide.
    pub min_aspect: f32,
}

impl Default for ShapeFilter {
    fn default() -> Self {
        Self {
            min_width: 2,
            max_width: 50,
            min_height: 20,
            min_aspect: 1.5,
        }
    }
}

impl ShapeFilter {
    pub fn accepts(&self, bar: &Bar) -> bool {
        bar.width >= self.min_width
            && bar.width <= self.max_width
            && bar.height >= self.min_height
            && bar.aspect() >= self.min_aspect
    }
}
