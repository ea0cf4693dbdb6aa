//! Exponential-decay observation weights.
//!
//! For a sequence of `n` observations and decay `λ`:
//!
//! ```text
//! w_0 = (1 - λ) / (1 - λ^n)
//! w_i = w_{i-1} * λ
//! ```
//!
//! so the weights form a geometric series summing to 1. Index 0 (the most
//! recent observation in our sequences) carries the largest weight. `λ = 1`
//! degenerates to uniform weights `1/n`.

use crate::domain::ReturnObservation;

/// Fill in `weight` on every observation, in place.
///
/// `lambda` must lie in `(0, 1]`; `ReportConfig::validate` enforces this before
/// we get here. An empty slice is left untouched.
pub fn assign_decay_weights(observations: &mut [ReturnObservation], lambda: f64) {
    let n = observations.len();
    if n == 0 {
        return;
    }

    let first = if lambda == 1.0 {
        1.0 / n as f64
    } else {
        (1.0 - lambda) / (1.0 - lambda.powi(n as i32))
    };

    let mut w = first;
    for obs in observations.iter_mut() {
        obs.weight = w;
        w *= lambda;
    }
}
