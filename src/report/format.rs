//! Formatted terminal output.
//!
//! Formatting lives in one place so the pipeline and fitter stay free of
//! presentation details (and output changes stay localized).

use crate::domain::{FitOutcome, FittedSeries, ModelParams, ParamsFile};

use super::{compute_residuals, series_sse};

/// Parameter summary plus stored loss vs. SSE recomputed from the series.
pub fn format_run_summary(params_file: &ParamsFile, series: &FittedSeries) -> String {
    let mut out = String::new();

    out.push_str("=== zcurve - thermometer curve ===\n");
    out.push_str(&format_params(&params_file.params));
    out.push_str(&format!("Samples: n={}", series.len()));
    if let (Some(first), Some(last)) = (series.t.first(), series.t.last()) {
        out.push_str(&format!(" | t=[{first}, {last}]"));
    }
    out.push('\n');
    out.push_str(&format!("Loss (stored): {}\n", params_file.loss));
    out.push_str(&format!("SSE (all samples): {:.6}\n", series_sse(series)));

    out
}

/// Residual table in ascending `t`.
pub fn format_residual_table(series: &FittedSeries) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>10} {:>10} {:>12} {:>12}\n",
        "t", "z", "z_hat", "residual"
    ));
    out.push_str(&format!("{:-<10} {:-<10} {:-<12} {:-<12}\n", "", "", "", ""));

    for r in compute_residuals(series) {
        out.push_str(&format!(
            "{:>10} {:>10} {:>12.3} {:>12.3}\n",
            r.t, r.z, r.z_hat, r.residual
        ));
    }

    out
}

/// Result of `zcurve fit`.
pub fn format_fit_outcome(outcome: &FitOutcome, n_samples: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Best trial #{} ({} of {n_samples} samples as inliers)\n",
        outcome.trial, outcome.inliers
    ));
    out.push_str(&format_params(&outcome.params));
    out.push_str(&format!("Loss: {}\n", outcome.loss));
    out
}

fn format_params(p: &ModelParams) -> String {
    format!("r0={} rc={} k={} t0={}\n", p.r0, p.rc, p.k, p.t0)
}
