/// Borrowed view over an interleaved RGB image.
#[derive(Clone, Copy, Debug)]
pub struct RgbImageView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8], // row-major, 3 bytes per pixel, len = w*h*3
}

impl<'a> RgbImageView<'a> {
    /// Expected buffer length for the view's dimensions.
    #[inline]
    pub fn expected_len(&self) -> usize {
        self.width * self.height * 3
    }

    /// True when the dimensions are non-zero and the buffer length matches.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0 && self.data.len() == self.expected_len()
    }

    /// RGB triple at `(x, y)`. Caller guarantees the coordinates are in range.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.width + x) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }
}
