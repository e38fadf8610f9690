//! Thermometer curve evaluation.
//!
//! ```text
//! r(t) = r0 * 10^(k (t - t0))
//! z(t) = 1024 * r / (rc + r)
//! ```
//!
//! `predict` is the raw IEEE evaluation used inside the fitter, where NaN/inf
//! simply makes a candidate lose. `evaluate` is the checked form used when a
//! value is about to be shown or plotted.

use crate::domain::ModelParams;
use crate::error::{AppError, EXIT_NUMERIC};

/// Full-scale reading of the sensor.
pub const FULL_SCALE: f64 = 1024.0;

/// Predict `z(t)` with plain floating-point semantics.
pub fn predict(params: &ModelParams, t: f64) -> f64 {
    let r = ratio(params, t);
    FULL_SCALE * r / (params.rc + r)
}

/// Predict `z(t)`, failing when the value is undefined.
///
/// A zero denominator (`rc + r == 0`) is an error rather than an infinity.
/// Any other non-finite result (overflow in `10^x`, NaN parameters) is
/// rejected as well.
pub fn evaluate(params: &ModelParams, t: f64) -> Result<f64, AppError> {
    let r = ratio(params, t);
    let denom = params.rc + r;
    if denom == 0.0 {
        return Err(AppError::new(
            EXIT_NUMERIC,
            format!("Model undefined at t={t}: rc + r == 0 (rc={}, r={r}).", params.rc),
        ));
    }
    let z = FULL_SCALE * r / denom;
    if !z.is_finite() {
        return Err(AppError::new(
            EXIT_NUMERIC,
            format!("Non-finite model value at t={t} (r={r}, z={z})."),
        ));
    }
    Ok(z)
}

/// Sum of squared errors `Σ (z_hat_i - z_i)^2`.
pub fn sse(params: &ModelParams, t: &[f64], z: &[f64]) -> f64 {
    t.iter()
        .zip(z)
        .map(|(&ti, &zi)| {
            let d = predict(params, ti) - zi;
            d * d
        })
        .sum()
}

fn ratio(params: &ModelParams, t: f64) -> f64 {
    params.r0 * 10f64.powf(params.k * (t - params.t0))
}
