use crate::color::{rgb_to_hsv, ColorRange};
use crate::image::RgbImageView;

/// Binary per-pixel classification of one image, on = 255, off = 0.
///
/// Derived per detection call, never persisted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Mask {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl Mask {
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    /// Classify every pixel of `img` against the union of `range` intervals.
    pub fn from_color_range(img: &RgbImageView<'_>, range: &ColorRange) -> Self {
        let mut mask = Mask::empty(img.width, img.height);
        for y in 0..img.height {
            for x in 0..img.width {
                let [r, g, b] = img.pixel(x, y);
                if range.contains(rgb_to_hsv(r, g, b)) {
                    mask.data[y * img.width + x] = 255;
                }
            }
        }
        mask
    }

    #[inline]
    pub fn is_on(&self, x: usize, y: usize) -> bool {
        self.data[y * self.width + x] != 0
    }

    #[inline]
    pub fn set_on(&mut self, x: usize, y: usize) {
        self.data[y * self.width + x] = 255;
    }

    /// Number of on pixels.
    pub fn count_on(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }
}
