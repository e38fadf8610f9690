//! Reporting utilities: residuals, SSE, and formatted terminal output.

pub mod format;

pub use format::*;

use crate::domain::{FittedSeries, Residual};

/// Per-sample residuals (`z - z_hat`), in series order.
pub fn compute_residuals(series: &FittedSeries) -> Vec<Residual> {
    series
        .t
        .iter()
        .zip(&series.z)
        .zip(&series.z_hat)
        .map(|((&t, &z), &z_hat)| Residual {
            t,
            z,
            z_hat,
            residual: z - z_hat,
        })
        .collect()
}

/// Sum of squared residuals over the series.
pub fn series_sse(series: &FittedSeries) -> f64 {
    compute_residuals(series)
        .iter()
        .map(|r| r.residual * r.residual)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residuals_and_sse() {
        let series = FittedSeries {
            t: vec![0.0, 1.0, 2.0],
            z: vec![10.0, 20.0, 30.0],
            z_hat: vec![11.0, 20.0, 27.0],
        };
        let residuals = compute_residuals(&series);
        assert_eq!(residuals.len(), 3);
        assert_eq!(residuals[0].residual, -1.0);
        assert_eq!(residuals[2].residual, 3.0);
        assert_eq!(series_sse(&series), 10.0);
    }
}
