//! Plot rendering.
//!
//! - image output via Plotters (`chart`)
//! - terminal preview (`ascii`)
//!
//! Both draw the same picture: observations as triangle markers, the model as
//! a connected line over the co-sorted inputs.

pub mod ascii;
pub mod chart;

pub use ascii::*;
pub use chart::*;

/// Finite min/max of `values`, or `None` when no value is finite.
pub(crate) fn finite_range<'a>(values: impl IntoIterator<Item = &'a f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values.into_iter().filter(|v| v.is_finite()) {
        min = min.min(v);
        max = max.max(v);
    }
    (min <= max).then_some((min, max))
}

/// Widen `[min, max]` by `frac` of its span on each side.
///
/// A zero-width range is widened by `0.5` on each side instead.
pub(crate) fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = max - min;
    let pad = if span > 0.0 { span * frac } else { 0.5 };
    (min - pad, max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_skips_non_finite() {
        let v = [3.0, f64::NAN, -1.0, f64::INFINITY, 2.0];
        assert_eq!(finite_range(&v), Some((-1.0, 3.0)));
        assert_eq!(finite_range(&[f64::NAN]), None);
    }

    #[test]
    fn pad_handles_zero_width() {
        assert_eq!(pad_range(0.0, 10.0, 0.05), (-0.5, 10.5));
        assert_eq!(pad_range(2.0, 2.0, 0.05), (1.5, 2.5));
    }
}
