//! Daily / weekly / monthly return extraction.
//!
//! The input series is stored most recent first. We walk it backwards (oldest
//! to newest) and look at the neighbours of each sample to decide whether it
//! closes a day, a week, or a month:
//!
//! ```text
//! weekly : i == 0 || day[i-1]   <  day[i]     (next sample starts a new week)
//! monthly: i == 0 || month[i-1] != month[i]   (next sample starts a new month)
//! daily  : day[i] > day[i+1]                  (previous sample is earlier in the same week)
//! ```
//!
//! Weekly and monthly returns chain from the previous period close, seeded with
//! the oldest sample's price. The daily test is a plain "greater than" on the
//! weekday ordinal, so a Monday after a Friday does not produce a daily return.

use tracing::debug;

use crate::domain::{PriceSample, ReturnObservation, ReturnSeries};

/// Extract the three return sequences from a most-recent-first price series.
///
/// Each returned sequence has its most recent observation at index 0.
/// Fewer than two samples yield empty sequences.
pub fn extract_returns(samples: &[PriceSample]) -> ReturnSeries {
    let mut out = ReturnSeries::default();
    if samples.len() < 2 {
        return out;
    }

    let oldest = samples[samples.len() - 1].price;
    let mut last_week_end = oldest;
    let mut last_month_end = oldest;

    for i in (0..samples.len() - 1).rev() {
        let cur = &samples[i];
        let newer = i.checked_sub(1).map(|j| &samples[j]);

        if newer.is_none_or(|n| n.day() < cur.day()) {
            out.weekly.push(ReturnObservation::new(pct_change(cur.price, last_week_end), cur.date));
            last_week_end = cur.price;
        }

        if newer.is_none_or(|n| n.month() != cur.month()) {
            out.monthly.push(ReturnObservation::new(pct_change(cur.price, last_month_end), cur.date));
            last_month_end = cur.price;
        }

        let older = &samples[i + 1];
        if cur.day() > older.day() {
            out.daily.push(ReturnObservation::new(pct_change(cur.price, older.price), cur.date));
        }
    }

    // Emitted oldest first; flip so index 0 is the most recent.
    out.daily.reverse();
    out.weekly.reverse();
    out.monthly.reverse();

    debug!(
        daily = out.daily.len(),
        weekly = out.weekly.len(),
        monthly = out.monthly.len(),
        "extracted return observations"
    );

    out
}

/// Percentage change from `reference` to `price`.
fn pct_change(price: f64, reference: f64) -> f64 {
    (price / reference - 1.0) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    /// Build a most-recent-first series from chronological (date, price) pairs.
    fn series(chronological: &[(NaiveDate, f64)]) -> Vec<PriceSample> {
        chronological
            .iter()
            .rev()
            .map(|&(date, price)| PriceSample::new(date, price))
            .collect()
    }

    #[test]
    fn daily_returns_on_consecutive_weekdays() {
        // Mon 2024-03-04, Tue, Wed.
        let samples = series(&[(d(2024, 3, 4), 100.0), (d(2024, 3, 5), 101.0), (d(2024, 3, 6), 99.0)]);
        let out = extract_returns(&samples);

        let chronological: Vec<f64> = out.daily.iter().rev().map(|o| o.return_pct).collect();
        assert_eq!(chronological.len(), 2);
        assert!((chronological[0] - 1.0).abs() < 1e-9);
        assert!((chronological[1] - (99.0 / 101.0 - 1.0) * 100.0).abs() < 1e-9);
        assert!((chronological[1] + 1.980_198).abs() < 1e-6);

        assert_eq!(out.daily[0].date, d(2024, 3, 6));
        assert!(out.daily.iter().all(|o| o.weight == 0.0));
    }

    #[test]
    fn monday_after_friday_is_not_a_daily_return() {
        // Fri 2024-03-08 -> Mon 2024-03-11.
        let samples = series(&[(d(2024, 3, 8), 100.0), (d(2024, 3, 11), 105.0)]);
        let out = extract_returns(&samples);
        assert!(out.daily.is_empty());
    }

    #[test]
    fn weekly_returns_chain_from_previous_week_close() {
        // Thu, Fri of one week then Mon, Tue of the next.
        let samples = series(&[
            (d(2024, 3, 7), 100.0),
            (d(2024, 3, 8), 110.0),
            (d(2024, 3, 11), 121.0),
            (d(2024, 3, 12), 132.0),
        ]);
        let out = extract_returns(&samples);

        // Most recent first: partial week closing Tue, then week closing Fri.
        assert_eq!(out.weekly.len(), 2);
        assert_eq!(out.weekly[0].date, d(2024, 3, 12));
        assert!((out.weekly[0].return_pct - 20.0).abs() < 1e-9);
        assert_eq!(out.weekly[1].date, d(2024, 3, 8));
        assert!((out.weekly[1].return_pct - 10.0).abs() < 1e-9);
    }

    #[test]
    fn single_month_yields_one_monthly_observation() {
        let samples = series(&[
            (d(2024, 3, 4), 100.0),
            (d(2024, 3, 5), 101.0),
            (d(2024, 3, 6), 102.0),
            (d(2024, 3, 7), 103.0),
            (d(2024, 3, 8), 104.0),
        ]);
        let out = extract_returns(&samples);

        assert_eq!(out.monthly.len(), 1);
        assert_eq!(out.monthly[0].date, d(2024, 3, 8));
        assert!((out.monthly[0].return_pct - 4.0).abs() < 1e-9);
        // Same week throughout: one weekly observation, four daily.
        assert_eq!(out.weekly.len(), 1);
        assert_eq!(out.daily.len(), 4);
    }

    #[test]
    fn month_boundary_closes_on_last_sample_of_month() {
        let samples = series(&[
            (d(2024, 1, 30), 100.0),
            (d(2024, 1, 31), 90.0),
            (d(2024, 2, 1), 95.0),
            (d(2024, 2, 2), 99.0),
        ]);
        let out = extract_returns(&samples);

        assert_eq!(out.monthly.len(), 2);
        assert_eq!(out.monthly[1].date, d(2024, 1, 31));
        assert!((out.monthly[1].return_pct + 10.0).abs() < 1e-9);
        assert_eq!(out.monthly[0].date, d(2024, 2, 2));
        assert!((out.monthly[0].return_pct - (99.0 / 90.0 - 1.0) * 100.0).abs() < 1e-9);
    }

    #[test]
    fn too_short_series_is_empty() {
        assert_eq!(extract_returns(&[]), ReturnSeries::default());
        let one = [PriceSample::new(d(2024, 3, 4), 100.0)];
        assert_eq!(extract_returns(&one), ReturnSeries::default());
    }
}
