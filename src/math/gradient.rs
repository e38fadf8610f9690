//! Forward-difference gradient of a scalar function.
//!
//! ```text
//! ∂f/∂x_i ≈ (f(x + eps * e_i) - f(x)) / eps
//! ```
//!
//! Only `n + 1` evaluations per gradient, which is all the fitter needs for a
//! four-parameter model.

use nalgebra::DVector;

/// Step used by the fitter.
pub const DEFAULT_EPS: f64 = 1e-3;

/// Approximate the gradient of `f` at `point`.
pub fn numeric_gradient<F>(f: F, point: &DVector<f64>, eps: f64) -> DVector<f64>
where
    F: Fn(&DVector<f64>) -> f64,
{
    let base = f(point);
    let mut nudged = point.clone();
    DVector::from_iterator(
        point.len(),
        (0..point.len()).map(|i| {
            nudged[i] += eps;
            let shifted = f(&nudged);
            nudged[i] = point[i];
            (shifted - base) / eps
        }),
    )
}
