//! `zcurve` library crate.
//!
//! The binary (`zcurve`) is a thin wrapper around this library so that:
//!
//! - the loader, model and co-sort are testable without spawning processes
//! - the pipeline can be driven with any dataset, not just the built-in one

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;
