//! Mathematical utilities: stable co-sorting and numeric differentiation.

pub mod gradient;
pub mod permutation;

pub use gradient::*;
pub use permutation::*;
