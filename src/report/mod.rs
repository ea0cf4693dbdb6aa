//! Per-granularity report assembly.
//!
//! For each horizon the most recent return is set aside, the remaining history
//! is decay-weighted, and the summary statistics are computed against it.

pub mod format;

pub use format::*;

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{Granularity, ReportConfig, ReturnObservation, ReturnSeries};
use crate::error::AppError;
use crate::stats::{self, Moments};

/// Months per year, for annualizing the monthly mean/stdev ratio.
const MONTHS_PER_YEAR: f64 = 12.0;

/// Summary for one return horizon.
#[derive(Debug, Clone)]
pub struct GranularityReport {
    pub granularity: Granularity,
    pub decay: f64,
    /// Most recent observation; excluded from `history`.
    pub latest: ReturnObservation,
    /// Weighted history, most recent first.
    pub history: Vec<ReturnObservation>,
    pub moments: Moments,
    /// Weighted empirical CDF of `history` at the latest return (weekly/daily).
    pub p_value: Option<f64>,
    /// `mean / stdev * sqrt(12)` (monthly).
    pub annualized_ratio: Option<f64>,
    /// Historical VaR at the configured confidence (monthly).
    pub value_at_risk: Option<f64>,
}

/// Full report for one run.
#[derive(Debug, Clone)]
pub struct Report {
    pub as_of: NaiveDate,
    pub n_samples: usize,
    pub confidence: f64,
    /// In `Granularity::ALL` order.
    pub sections: Vec<GranularityReport>,
}

impl Report {
    pub fn section(&self, granularity: Granularity) -> Option<&GranularityReport> {
        self.sections.iter().find(|s| s.granularity == granularity)
    }
}

/// Build the report from extracted returns.
pub fn build_report(
    as_of: NaiveDate,
    n_samples: usize,
    series: &ReturnSeries,
    config: &ReportConfig,
) -> Result<Report, AppError> {
    let sections = Granularity::ALL
        .into_iter()
        .map(|g| build_section(g, series.get(g), config))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Report {
        as_of,
        n_samples,
        confidence: config.confidence,
        sections,
    })
}

fn build_section(
    granularity: Granularity,
    observations: &[ReturnObservation],
    config: &ReportConfig,
) -> Result<GranularityReport, AppError> {
    let label = granularity.label();
    let Some((&latest, rest)) = observations.split_first() else {
        return Err(AppError::new(3, format!("No {label} returns could be derived from the price series.")));
    };
    if rest.len() < 2 {
        return Err(AppError::new(
            3,
            format!(
                "Not enough {label} history: need at least 2 returns besides the most recent one (got {}).",
                rest.len()
            ),
        ));
    }

    let decay = config.decay(granularity);
    let mut history = rest.to_vec();
    stats::assign_decay_weights(&mut history, decay);

    let moments = stats::weighted_moments(&history)?;
    if !moments.mean.is_finite() || !moments.stdev.is_finite() {
        return Err(AppError::new(4, format!("Non-finite {label} statistics.")));
    }

    let (p_value, annualized_ratio, value_at_risk) = match granularity {
        Granularity::Daily | Granularity::Weekly => (Some(stats::p_value(&history, latest.return_pct)), None, None),
        Granularity::Monthly => (
            None,
            Some(moments.mean / moments.stdev * MONTHS_PER_YEAR.sqrt()),
            Some(stats::value_at_risk(&history, config.confidence)?),
        ),
    };

    debug!(
        granularity = label,
        decay,
        n = history.len(),
        mean = moments.mean,
        stdev = moments.stdev,
        "computed weighted statistics"
    );

    Ok(GranularityReport {
        granularity,
        decay,
        latest,
        history,
        moments,
        p_value,
        annualized_ratio,
        value_at_risk,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn obs(returns: &[f64]) -> Vec<ReturnObservation> {
        let end = NaiveDate::from_ymd_opt(2024, 6, 28).unwrap();
        returns
            .iter()
            .enumerate()
            .map(|(i, &r)| ReturnObservation::new(r, end - Days::new(7 * i as u64)))
            .collect()
    }

    #[test]
    fn latest_return_is_excluded_from_history() {
        let config = ReportConfig::new("prices.csv");
        let section = build_section(Granularity::Weekly, &obs(&[50.0, 1.0, 1.0, 1.0]), &config).unwrap();

        assert_eq!(section.latest.return_pct, 50.0);
        assert_eq!(section.history.len(), 3);
        assert!((section.moments.mean - 1.0).abs() < 1e-12);
        assert!((section.p_value.unwrap() - 1.0).abs() < 1e-12);
        assert!(section.value_at_risk.is_none());

        let weight_sum: f64 = section.history.iter().map(|o| o.weight).sum();
        assert!((weight_sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn monthly_section_has_ratio_and_var() {
        let config = ReportConfig::new("prices.csv");
        let section = build_section(Granularity::Monthly, &obs(&[0.0, 2.0, -1.0, 3.0, 1.0]), &config).unwrap();

        let m = section.moments;
        let ratio = section.annualized_ratio.unwrap();
        assert!((ratio - m.mean / m.stdev * 12.0_f64.sqrt()).abs() < 1e-12);
        assert!(section.p_value.is_none());
        // With 4 observations every weight is well above 5%, so the scan
        // stops after the smallest and reports the second smallest.
        assert_eq!(section.value_at_risk.unwrap(), 1.0);
    }

    #[test]
    fn short_history_is_rejected() {
        let config = ReportConfig::new("prices.csv");
        let err = build_section(Granularity::Daily, &obs(&[1.0, 2.0]), &config).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert!(err.message().contains("daily"));

        let err = build_section(Granularity::Daily, &[], &config).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
