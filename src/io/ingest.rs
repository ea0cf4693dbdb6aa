//! CSV ingest for the price series.
//!
//! The input is a two-column `date,price` file, most recent row first, with
//! dates in a fixed chrono format (`%m/%d/%y` by default). Unlike a screening
//! tool we cannot drop bad rows: every return depends on its neighbours, so
//! the first malformed row aborts the run (exit code 2).

use std::fs::File;
use std::io::Read;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::{PriceSample, ReportConfig};
use crate::error::AppError;

/// One CSV row before validation.
#[derive(Debug, Deserialize)]
struct RawRow {
    date: String,
    price: String,
}

/// Open `config.input` and parse it into samples.
pub fn load_price_series(config: &ReportConfig) -> Result<Vec<PriceSample>, AppError> {
    let file = File::open(&config.input).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to open CSV '{}': {e}", config.input.display()),
        )
    })?;

    let samples = read_price_series(file, &config.date_format, config.has_header)?;
    info!(
        path = %config.input.display(),
        rows = samples.len(),
        "loaded price series"
    );
    Ok(samples)
}

/// Parse samples from any reader. Rows keep file order.
pub fn read_price_series<R: Read>(
    reader: R,
    date_format: &str,
    has_header: bool,
) -> Result<Vec<PriceSample>, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(has_header)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let first_line = if has_header { 2 } else { 1 };
    let mut samples = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let line = idx + first_line;
        // Positional: header names, if any, are ignored.
        let row: RawRow = result
            .and_then(|record| record.deserialize(None))
            .map_err(|e| AppError::new(2, format!("Line {line}: CSV parse error: {e}")))?;
        let sample = parse_row(&row, date_format).map_err(|e| AppError::new(2, format!("Line {line}: {e}")))?;
        samples.push(sample);
    }

    check_ordering(&samples);
    Ok(samples)
}

fn parse_row(row: &RawRow, date_format: &str) -> Result<PriceSample, String> {
    let date = NaiveDate::parse_from_str(&row.date, date_format)
        .map_err(|e| format!("Invalid date '{}' (expected format {date_format}): {e}", row.date))?;
    let price = row
        .price
        .parse::<f64>()
        .map_err(|e| format!("Invalid price '{}': {e}", row.price))?;
    if !price.is_finite() || price <= 0.0 {
        return Err(format!("Invalid price '{}' (must be finite and > 0).", row.price));
    }
    Ok(PriceSample::new(date, price))
}

/// Warn about rows that are not strictly newer than the row after them.
fn check_ordering(samples: &[PriceSample]) {
    let out_of_order = samples.windows(2).filter(|w| w[0].date <= w[1].date).count();
    if out_of_order > 0 {
        warn!(
            out_of_order,
            "price series is not strictly most-recent-first; returns may be meaningless"
        );
    }
}
