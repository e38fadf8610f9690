//! Parameter fitting.
//!
//! Responsibilities:
//!
//! - minimize the SSE of one inlier set by gradient descent (`descent`)
//! - repeat over random inlier subsets and keep the best (`ransac`)

pub mod descent;
pub mod ransac;

pub use descent::*;
pub use ransac::*;
