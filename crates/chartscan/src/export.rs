//! CSV export of a calibrated value series, with optional date stamping.

use std::path::Path;

use chrono::{Duration, NaiveDate};
use log::info;

use crate::error::ChartError;

/// `n` dates evenly spaced between `start` and `end`, both included.
///
/// One row collapses to `start`; spacing is rounded to whole days. `end`
/// before `start` simply yields a descending range.
pub fn date_range(start: NaiveDate, end: NaiveDate, n: usize) -> Vec<NaiveDate> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let total_days = (end - start).num_days() as f64;
            (0..n)
                .map(|i| {
                    let offset = total_days * i as f64 / (n - 1) as f64;
                    start + Duration::days(offset.round() as i64)
                })
                .collect()
        }
    }
}

/// Write the value series to `path`, one row per value.
///
/// With `dates`, rows are `Date,Value`; without, a single `Value` column.
/// Values are written with two decimals, matching the calibration's
/// reported precision.
pub fn export_csv(
    path: &Path,
    values: &[f64],
    dates: Option<&[NaiveDate]>,
) -> Result<(), ChartError> {
    if let Some(dates) = dates {
        if dates.len() != values.len() {
            return Err(ChartError::DateStampMismatch {
                dates: dates.len(),
                values: values.len(),
            });
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    match dates {
        Some(dates) => {
            writer.write_record(["Date", "Value"])?;
            for (date, value) in dates.iter().zip(values) {
                writer.write_record([date.to_string(), format!("{value:.2}")])?;
            }
        }
        None => {
            writer.write_record(["Value"])?;
            for value in values {
                writer.write_record([format!("{value:.2}")])?;
            }
        }
    }
    writer.flush()?;
    info!("exported {} rows to {}", values.len(), path.display());
    Ok(())
}
