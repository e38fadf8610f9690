//! Thermometer model implementation.
//!
//! The model is a small, pure function so that the plot pipeline and the
//! fitter can share it.

pub mod model;

pub use model::*;
