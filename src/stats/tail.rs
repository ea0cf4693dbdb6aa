//! Empirical tail measures over a weighted return sequence.
//!
//! Both measures walk the observations in ascending return order and
//! accumulate weight. They sort a copy, so the caller's most-recent-first
//! ordering is left alone.

use crate::domain::ReturnObservation;
use crate::error::AppError;

/// Weighted empirical CDF at `ret`: total weight of observations `<= ret`.
pub fn p_value(observations: &[ReturnObservation], ret: f64) -> f64 {
    sorted_ascending(observations)
        .iter()
        .take_while(|o| o.return_pct <= ret)
        .map(|o| o.weight)
        .sum()
}

/// Historical Value-at-Risk at confidence `p`.
///
/// Weight is accumulated in ascending order while it stays below `1 - p`; the
/// result is the return one position past the element that crossed the
/// threshold. If the whole sequence is consumed the largest return is used.
pub fn value_at_risk(observations: &[ReturnObservation], p: f64) -> Result<f64, AppError> {
    if observations.is_empty() {
        return Err(AppError::new(3, "Cannot compute VaR of an empty return history."));
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(AppError::new(2, format!("Invalid VaR confidence {p} (must be in [0, 1]).")));
    }

    let sorted = sorted_ascending(observations);
    let threshold = 1.0 - p;

    let mut cumulative = 0.0;
    let mut i = 0;
    while i < sorted.len() && cumulative < threshold {
        cumulative += sorted[i].weight;
        i += 1;
    }

    Ok(sorted[i.min(sorted.len() - 1)].return_pct)
}

fn sorted_ascending(observations: &[ReturnObservation]) -> Vec<ReturnObservation> {
    let mut sorted = observations.to_vec();
    sorted.sort_by(|a, b| {
        a.return_pct
            .total_cmp(&b.return_pct)
            .then_with(|| a.date.cmp(&b.date))
            .then_with(|| a.weight.total_cmp(&b.weight))
    });
    sorted
}
