/// Errors returned by the bar detector.
#[derive(thiserror::Error, Debug)]
pub enum DetectError {
    /// The pixel buffer does not match its declared dimensions, or the
    /// dimensions are zero. Fatal to the call: there is no image to process.
    #[error("invalid RGB buffer for {width}x{height} image (expected {expected} bytes, got {got})")]
    ImageDecode {
        width: usize,
        height: usize,
        expected: usize,
        got: usize,
    },

    /// No region survived segmentation and filtering. Recoverable: the
    /// caller may widen the color range or relax the shape filter and retry.
    #[error("no bar-shaped regions found")]
    EmptyResult,
}
