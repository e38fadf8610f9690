//! Gradient descent on the SSE loss.
//!
//! Each iteration takes a forward-difference gradient of
//! `Σ (z_hat_i - z_i)^2` with respect to `(r0, rc, k, t0)` and steps every
//! parameter by its own learning rate:
//!
//! ```text
//! p <- p - lr ⊙ ∇L(p)
//! ```
//!
//! The parameters differ by orders of magnitude in sensitivity (`k` moves `z`
//! exponentially), hence per-parameter rates instead of one scalar.
//!
//! The returned iterate is the lowest-loss one seen, so the result never has a
//! higher loss than the starting point and a diverging run (NaN/inf) falls back
//! to its last good parameters.

use nalgebra::DVector;

use crate::domain::{Dataset, ModelParams};
use crate::math::{DEFAULT_EPS, numeric_gradient};
use crate::models::sse;

/// Outcome of one descent run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescentResult {
    pub params: ModelParams,
    pub loss: f64,
    /// Iteration at which `params` was reached (0 = initial).
    pub iteration: usize,
}

/// Minimize the SSE of `data` starting from `initial`.
pub fn gradient_descent(
    data: &Dataset,
    initial: &ModelParams,
    learning_rate: &[f64; ModelParams::LEN],
    iterations: usize,
) -> DescentResult {
    let loss = |p: &DVector<f64>| sse(&ModelParams::from_slice(p.as_slice()), data.t(), data.z());
    let lr = DVector::from_row_slice(learning_rate);

    let mut point = DVector::from_row_slice(&initial.to_array());
    let mut best = DescentResult {
        params: *initial,
        loss: loss(&point),
        iteration: 0,
    };

    for iteration in 1..=iterations {
        let grad = numeric_gradient(&loss, &point, DEFAULT_EPS);
        if grad.iter().any(|g| !g.is_finite()) {
            break;
        }
        point -= lr.component_mul(&grad);

        let current = loss(&point);
        if current < best.loss || (best.loss.is_nan() && current.is_finite()) {
            best = DescentResult {
                params: ModelParams::from_slice(point.as_slice()),
                loss: current,
                iteration,
            };
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::predict;

    fn synthetic(truth: &ModelParams) -> Dataset {
        let t: Vec<f64> = (-10..=60).step_by(5).map(f64::from).collect();
        let z = t.iter().map(|&ti| predict(truth, ti)).collect();
        Dataset::new(t, z).unwrap()
    }

    #[test]
    fn descent_reduces_loss() {
        let truth = ModelParams {
            r0: 1.0,
            rc: 1.0,
            k: 0.05,
            t0: 0.0,
        };
        let start = ModelParams { t0: 2.0, ..truth };
        let data = synthetic(&truth);
        let initial_loss = sse(&start, data.t(), data.z());

        let result = gradient_descent(&data, &start, &[0.0, 0.0, 0.0, 1e-6], 200);
        assert!(result.loss < initial_loss, "{} !< {initial_loss}", result.loss);
        assert!(result.params.t0 < start.t0 && result.params.t0 > -1.0);
        // Zero learning rate pins the other parameters.
        assert_eq!(result.params.r0, 1.0);
        assert_eq!(result.params.k, 0.05);
    }

    #[test]
    fn zero_iterations_returns_initial() {
        let p = ModelParams {
            r0: 1.0,
            rc: 2.0,
            k: 0.01,
            t0: 5.0,
        };
        let data = synthetic(&p);
        let result = gradient_descent(&data, &p, &[1e-3; 4], 0);
        assert_eq!(result.params, p);
        assert_eq!(result.iteration, 0);
        assert_eq!(result.loss, 0.0);
    }

    #[test]
    fn divergence_keeps_last_good_iterate() {
        let p = ModelParams {
            r0: 1.0,
            rc: 1.0,
            k: 0.05,
            t0: 0.0,
        };
        let data = synthetic(&ModelParams { t0: 10.0, ..p });
        // Absurd step on k pushes 10^(k t) into overflow.
        let result = gradient_descent(&data, &p, &[0.0, 0.0, 1e6, 0.0], 20);
        assert!(result.loss.is_finite());
        assert!(result.loss <= sse(&p, data.t(), data.z()));
    }
}
