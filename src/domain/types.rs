//! Shared domain types.
//!
//! These are plain value types: a price sample read from the input, a return
//! observation derived from it, and the resolved run configuration.

use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};

/// One (date, price) row of the input series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceSample {
    pub date: NaiveDate,
    pub price: f64,
}

impl PriceSample {
    pub fn new(date: NaiveDate, price: f64) -> Self {
        Self { date, price }
    }

    /// Weekday ordinal, Sunday = 1 through Saturday = 7.
    pub fn day(&self) -> u32 {
        self.date.weekday().number_from_sunday()
    }

    /// Month ordinal (1-12).
    pub fn month(&self) -> u32 {
        self.date.month()
    }
}

/// A percentage return observed on `date`.
///
/// `weight` starts at zero and is filled in by [`crate::stats::assign_decay_weights`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReturnObservation {
    pub return_pct: f64,
    pub date: NaiveDate,
    pub weight: f64,
}

impl ReturnObservation {
    pub fn new(return_pct: f64, date: NaiveDate) -> Self {
        Self {
            return_pct,
            date,
            weight: 0.0,
        }
    }
}

/// Return horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    Daily,
    Weekly,
    Monthly,
}

impl Granularity {
    /// Report order.
    pub const ALL: [Granularity; 3] = [Granularity::Weekly, Granularity::Daily, Granularity::Monthly];

    pub fn label(self) -> &'static str {
        match self {
            Granularity::Daily => "daily",
            Granularity::Weekly => "weekly",
            Granularity::Monthly => "monthly",
        }
    }

    pub fn default_decay(self) -> f64 {
        match self {
            Granularity::Daily => 0.99,
            Granularity::Weekly => 0.97,
            Granularity::Monthly => 0.95,
        }
    }
}

/// The three return sequences, most recent observation first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReturnSeries {
    pub daily: Vec<ReturnObservation>,
    pub weekly: Vec<ReturnObservation>,
    pub monthly: Vec<ReturnObservation>,
}

impl ReturnSeries {
    pub fn get(&self, granularity: Granularity) -> &[ReturnObservation] {
        match granularity {
            Granularity::Daily => &self.daily,
            Granularity::Weekly => &self.weekly,
            Granularity::Monthly => &self.monthly,
        }
    }
}

/// Resolved configuration for a single report run.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub input: PathBuf,
    /// chrono format string for the date column.
    pub date_format: String,
    /// Skip the first CSV row.
    pub has_header: bool,
    pub daily_decay: f64,
    pub weekly_decay: f64,
    pub monthly_decay: f64,
    /// Confidence level for the monthly VaR.
    pub confidence: f64,
}

impl ReportConfig {
    pub const DEFAULT_DATE_FORMAT: &'static str = "%m/%d/%y";
    pub const DEFAULT_CONFIDENCE: f64 = 0.95;

    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            date_format: Self::DEFAULT_DATE_FORMAT.to_string(),
            has_header: false,
            daily_decay: Granularity::Daily.default_decay(),
            weekly_decay: Granularity::Weekly.default_decay(),
            monthly_decay: Granularity::Monthly.default_decay(),
            confidence: Self::DEFAULT_CONFIDENCE,
        }
    }

    pub fn decay(&self, granularity: Granularity) -> f64 {
        match granularity {
            Granularity::Daily => self.daily_decay,
            Granularity::Weekly => self.weekly_decay,
            Granularity::Monthly => self.monthly_decay,
        }
    }

    /// Reject decay factors outside `(0, 1]` and confidence outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), String> {
        for granularity in Granularity::ALL {
            let lambda = self.decay(granularity);
            if !(lambda > 0.0 && lambda <= 1.0) {
                return Err(format!(
                    "Invalid {} decay factor {lambda} (must be in (0, 1]).",
                    granularity.label()
                ));
            }
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(format!(
                "Invalid confidence level {} (must be in [0, 1]).",
                self.confidence
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_ordinal_starts_on_sunday() {
        // 2024-03-03 was a Sunday.
        let sunday = PriceSample::new(NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(), 1.0);
        let saturday = PriceSample::new(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(), 1.0);
        assert_eq!(sunday.day(), 1);
        assert_eq!(saturday.day(), 7);
        assert_eq!(sunday.month(), 3);
    }

    #[test]
    fn validate_rejects_out_of_range_decay() {
        let mut config = ReportConfig::new("prices.csv");
        assert!(config.validate().is_ok());

        config.weekly_decay = 0.0;
        assert!(config.validate().unwrap_err().contains("weekly"));

        config.weekly_decay = 1.0;
        config.confidence = 1.5;
        assert!(config.validate().is_err());
    }
}
