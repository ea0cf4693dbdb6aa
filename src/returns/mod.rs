//! Return derivation from a raw price series.

pub mod extract;

pub use extract::*;
