//! Command-line front end: digitize a bar-chart image into a CSV series.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use log::{info, LevelFilter};

use chartscan::annotate::annotate;
use chartscan::export::{date_range, export_csv};
use chartscan::pipeline::{calibrate_series, detect_bars, load_rgb, CalibrationSpec};
use chartscan::{BarDetectorParams, ColorRange, ShapeFilter};
use chartscan_core::init_with_level;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ColorPreset {
    Blue,
    Red,
}

#[derive(Parser, Debug)]
#[command(
    name = "chartscan",
    about = "Detect bars of a target color in a chart image and convert their heights into calibrated values"
)]
struct Cli {
    /// Chart image to digitize.
    image: PathBuf,

    /// Bar color preset. Ignored when --params is given.
    #[arg(long, value_enum, default_value_t = ColorPreset::Blue)]
    color: ColorPreset,

    /// Enable the default shape filter (drops legends, ticks, noise blobs).
    #[arg(long)]
    filter: bool,

    /// Detector parameters as JSON, overriding --color and --filter.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Value of the shortest bar (relative-height calibration).
    #[arg(long, requires = "high")]
    low: Option<f64>,
    /// Value of the tallest bar (relative-height calibration).
    #[arg(long, requires = "low")]
    high: Option<f64>,

    /// Pixel row of the axis baseline (absolute-baseline calibration).
    #[arg(long, requires_all = ["top_row", "value_at_baseline", "value_at_top"], conflicts_with_all = ["low", "high"])]
    baseline_row: Option<u32>,
    /// Pixel row of the top of the value scale.
    #[arg(long)]
    top_row: Option<u32>,
    /// Domain value at the baseline row.
    #[arg(long)]
    value_at_baseline: Option<f64>,
    /// Domain value at the top row.
    #[arg(long)]
    value_at_top: Option<f64>,

    /// Write a preview image with detected bars outlined.
    #[arg(long, value_name = "PNG")]
    annotate: Option<PathBuf>,

    /// Write the calibrated series to a CSV file.
    #[arg(long, value_name = "CSV")]
    csv: Option<PathBuf>,
    /// First date of the series (adds a Date column to the CSV).
    #[arg(long, requires_all = ["end_date", "csv"])]
    start_date: Option<NaiveDate>,
    /// Last date of the series.
    #[arg(long, requires = "start_date")]
    end_date: Option<NaiveDate>,

    /// Verbosity: -v for debug, -vv for trace.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    init_with_level(level)?;

    let params = detector_params(&cli)?;
    let img = load_rgb(&cli.image)?;
    let series = detect_bars(&img, &params)?;

    if let Some(path) = &cli.annotate {
        annotate(&img, &series).save(path)?;
        info!("wrote preview to {}", path.display());
    }

    let Some(spec) = calibration_spec(&cli) else {
        // No anchors given: report pixel measurements and stop.
        println!("bar heights (px): {:?}", series.heights());
        return Ok(());
    };

    let values = calibrate_series(&series, &spec)?;
    println!("bar values: {values:?}");

    if let Some(path) = &cli.csv {
        let dates = cli
            .start_date
            .zip(cli.end_date)
            .map(|(start, end)| date_range(start, end, values.len()));
        export_csv(path, &values, dates.as_deref())?;
    }

    Ok(())
}

fn detector_params(cli: &Cli) -> Result<BarDetectorParams, Box<dyn std::error::Error>> {
    if let Some(path) = &cli.params {
        let raw = fs::read_to_string(path)?;
        return Ok(serde_json::from_str(&raw)?);
    }

    let color_range = match cli.color {
        ColorPreset::Blue => ColorRange::blue(),
        ColorPreset::Red => ColorRange::red(),
    };
    Ok(BarDetectorParams {
        color_range,
        shape_filter: cli.filter.then(ShapeFilter::default),
        ..BarDetectorParams::default()
    })
}

fn calibration_spec(cli: &Cli) -> Option<CalibrationSpec> {
    if let (Some(baseline_row), Some(top_row), Some(value_at_baseline), Some(value_at_top)) = (
        cli.baseline_row,
        cli.top_row,
        cli.value_at_baseline,
        cli.value_at_top,
    ) {
        return Some(CalibrationSpec::Baseline {
            baseline_row,
            top_row,
            value_at_baseline,
            value_at_top,
        });
    }
    if let (Some(value_lowest), Some(value_highest)) = (cli.low, cli.high) {
        return Some(CalibrationSpec::Relative {
            value_lowest,
            value_highest,
        });
    }
    None
}
