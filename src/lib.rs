//! `return-stats` library crate.
//!
//! The binary (`rstats`) is a thin wrapper around this library so that:
//!
//! - the return/statistics engine is testable without spawning processes
//! - the pipeline can be driven from an in-memory series

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod report;
pub mod returns;
pub mod stats;
