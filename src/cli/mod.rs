//! Command-line parsing.
//!
//! Arguments are parsed here and turned into a [`ReportConfig`]; the
//! statistics code never sees clap types.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::{Granularity, ReportConfig};

/// Environment variable consulted for the input path when `--input` is absent.
pub const INPUT_ENV: &str = "RETURN_STATS_CSV";

/// Input path used when neither `--input` nor the environment provide one.
pub const DEFAULT_INPUT: &str = "prices.csv";

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "rstats",
    version,
    about = "Decay-weighted daily/weekly/monthly return statistics for a price series"
)]
pub struct Cli {
    /// Price CSV (`date,price`, most recent row first).
    ///
    /// Falls back to $RETURN_STATS_CSV (a `.env` file is honoured), then `prices.csv`.
    #[arg(short, long, value_name = "CSV")]
    pub input: Option<PathBuf>,

    /// chrono format of the date column.
    #[arg(long, default_value = ReportConfig::DEFAULT_DATE_FORMAT)]
    pub date_format: String,

    /// The first CSV row is a header.
    #[arg(long)]
    pub header: bool,

    /// Decay factor for daily returns.
    #[arg(long, default_value_t = Granularity::Daily.default_decay())]
    pub daily_decay: f64,

    /// Decay factor for weekly returns.
    #[arg(long, default_value_t = Granularity::Weekly.default_decay())]
    pub weekly_decay: f64,

    /// Decay factor for monthly returns.
    #[arg(long, default_value_t = Granularity::Monthly.default_decay())]
    pub monthly_decay: f64,

    /// Confidence level for the monthly VaR.
    #[arg(long, default_value_t = ReportConfig::DEFAULT_CONFIDENCE)]
    pub confidence: f64,
}

impl Cli {
    /// Resolve into a run configuration. `env_input` is the value of [`INPUT_ENV`], if set.
    pub fn into_config(self, env_input: Option<PathBuf>) -> ReportConfig {
        let input = self
            .input
            .or(env_input)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));

        ReportConfig {
            input,
            date_format: self.date_format,
            has_header: self.header,
            daily_decay: self.daily_decay,
            weekly_decay: self.weekly_decay,
            monthly_decay: self.monthly_decay,
            confidence: self.confidence,
        }
    }
}
