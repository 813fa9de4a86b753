use chartscan_bars::DetectError;
use chartscan_calib::CalibrateError;

/// Errors produced by the high-level helpers.
#[derive(thiserror::Error, Debug)]
pub enum ChartError {
    #[error(transparent)]
    Detect(#[from] DetectError),

    #[error(transparent)]
    Calibrate(#[from] CalibrateError),

    #[cfg(feature = "image")]
    #[error("failed to decode image: {0}")]
    ImageLoad(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("date stamps do not match the value series ({dates} dates, {values} values)")]
    DateStampMismatch { dates: usize, values: usize },
}
