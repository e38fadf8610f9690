//! Sample data sources: the built-in readings or a dataset file.

pub mod readings;

pub use readings::*;
