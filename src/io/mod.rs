//! Input/output helpers.
//!
//! - params file read/write (`params`)
//! - dataset file ingest (`dataset`)
//! - run exports (CSV/JSON) (`export`)

pub mod dataset;
pub mod export;
pub mod params;

pub use dataset::*;
pub use export::*;
pub use params::*;
