//! Shared report pipeline:
//! CSV load -> return extraction -> weighting -> statistics -> report.
//!
//! The binary only adds argument parsing and printing on top of this.

use tracing::info;

use crate::domain::{PriceSample, ReportConfig, ReturnSeries};
use crate::error::AppError;
use crate::report::{Report, build_report};
use crate::returns::extract_returns;

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub samples: Vec<PriceSample>,
    pub returns: ReturnSeries,
    pub report: Report,
}

/// Execute the full pipeline, reading the input named in `config`.
pub fn run_report(config: &ReportConfig) -> Result<RunOutput, AppError> {
    config.validate().map_err(|e| AppError::new(2, e))?;
    let samples = crate::io::load_price_series(config)?;
    run_report_with_samples(config, samples)
}

/// Execute the pipeline on an already loaded, most-recent-first series.
pub fn run_report_with_samples(config: &ReportConfig, samples: Vec<PriceSample>) -> Result<RunOutput, AppError> {
    config.validate().map_err(|e| AppError::new(2, e))?;

    let Some(as_of) = samples.first().map(|s| s.date) else {
        return Err(AppError::new(3, "The price series is empty."));
    };

    let returns = extract_returns(&samples);
    info!(
        daily = returns.daily.len(),
        weekly = returns.weekly.len(),
        monthly = returns.monthly.len(),
        "derived returns"
    );

    let report = build_report(as_of, samples.len(), &returns, config)?;

    Ok(RunOutput {
        samples,
        returns,
        report,
    })
}
