//! Weighted mean and standard deviation.

use crate::domain::ReturnObservation;
use crate::error::AppError;

/// Weighted first and second moments of a return sequence (in percent).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    pub mean: f64,
    pub stdev: f64,
}

/// Compute the weighted mean and bias-corrected weighted standard deviation.
///
/// The variance is scaled by `n / (n - 1)` with `n` the number of observations,
/// not the effective sample size implied by the weights.
pub fn weighted_moments(observations: &[ReturnObservation]) -> Result<Moments, AppError> {
    let n = observations.len();
    if n < 2 {
        return Err(AppError::new(
            3,
            format!("Need at least 2 observations to compute a standard deviation (got {n})."),
        ));
    }

    let mean: f64 = observations.iter().map(|o| o.return_pct * o.weight).sum();
    let dispersion: f64 = observations
        .iter()
        .map(|o| (o.return_pct - mean).powi(2) * o.weight)
        .sum();
    let variance = dispersion * n as f64 / (n - 1) as f64;

    Ok(Moments {
        mean,
        stdev: variance.sqrt(),
    })
}
