//! Weighted statistics over return observations.
//!
//! - exponential-decay weights (`weights`)
//! - weighted mean / standard deviation (`moments`)
//! - empirical p-value and VaR (`tail`)

pub mod moments;
pub mod tail;
pub mod weights;

pub use moments::*;
pub use tail::*;
pub use weights::*;
