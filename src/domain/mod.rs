//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - model parameters and the params file contents (`ModelParams`, `ParamsFile`)
//! - paired samples and their co-sorted fitted form (`Dataset`, `FittedSeries`)
//! - resolved run settings (`PlotConfig`, `FitConfig`)

pub mod types;

pub use types::*;
