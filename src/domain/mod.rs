//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - input samples (`PriceSample`)
//! - derived returns (`ReturnObservation`, `ReturnSeries`, `Granularity`)
//! - the resolved run configuration (`ReportConfig`)

pub mod types;

pub use types::*;
