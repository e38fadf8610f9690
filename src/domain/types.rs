//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory by the plot and fit pipelines
//! - exported to JSON/CSV
//! - written back as a params file after fitting

use std::path::PathBuf;

use serde::Serialize;

use crate::error::{AppError, EXIT_DATASET};

/// Parameters of the thermometer curve `z(t) = 1024 r / (rc + r)`,
/// `r = r0 * 10^(k (t - t0))`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelParams {
    /// Baseline ratio.
    pub r0: f64,
    /// Half-saturation point.
    pub rc: f64,
    /// Growth rate (decades per unit of `t`).
    pub k: f64,
    /// Time offset.
    pub t0: f64,
}

impl ModelParams {
    pub const LEN: usize = 4;

    pub fn to_array(self) -> [f64; Self::LEN] {
        [self.r0, self.rc, self.k, self.t0]
    }

    pub fn from_slice(values: &[f64]) -> Self {
        Self {
            r0: values[0],
            rc: values[1],
            k: values[2],
            t0: values[3],
        }
    }
}

/// Contents of a params file: the model parameters followed by the fit loss.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamsFile {
    pub params: ModelParams,
    pub loss: f64,
}

/// Paired sample inputs `t` and observed outputs `z`.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    t: Vec<f64>,
    z: Vec<f64>,
}

impl Dataset {
    pub fn new(t: Vec<f64>, z: Vec<f64>) -> Result<Self, AppError> {
        if t.len() != z.len() {
            return Err(AppError::new(
                EXIT_DATASET,
                format!("Dataset length mismatch: {} inputs vs {} observations.", t.len(), z.len()),
            ));
        }
        if t.is_empty() {
            return Err(AppError::new(EXIT_DATASET, "Dataset is empty."));
        }
        Ok(Self { t, z })
    }

    /// Build from equally sized arrays (lengths match by construction).
    pub(crate) fn from_arrays<const N: usize>(t: [f64; N], z: [f64; N]) -> Self {
        Self {
            t: t.to_vec(),
            z: z.to_vec(),
        }
    }

    pub fn t(&self) -> &[f64] {
        &self.t
    }

    pub fn z(&self) -> &[f64] {
        &self.z
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Keep only the samples at `indices` (in the given order).
    pub fn subset(&self, indices: &[usize]) -> Self {
        Self {
            t: indices.iter().map(|&i| self.t[i]).collect(),
            z: indices.iter().map(|&i| self.z[i]).collect(),
        }
    }
}

/// Observed and modeled values co-sorted by ascending `t`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FittedSeries {
    pub t: Vec<f64>,
    pub z: Vec<f64>,
    pub z_hat: Vec<f64>,
}

impl FittedSeries {
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    pub fn observed_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.t.iter().copied().zip(self.z.iter().copied())
    }

    pub fn model_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.t.iter().copied().zip(self.z_hat.iter().copied())
    }
}

/// Per-sample fit residual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Residual {
    pub t: f64,
    pub z: f64,
    pub z_hat: f64,
    /// `z - z_hat`.
    pub residual: f64,
}

/// Chart size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartSize {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
        }
    }
}

/// Resolved settings for `zcurve plot` / `zcurve report`.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub params_path: PathBuf,
    pub output_path: PathBuf,
    /// Optional dataset file; the built-in readings are used when absent.
    pub data_path: Option<PathBuf>,
    pub size: ChartSize,
    pub ascii: bool,
    pub ascii_width: usize,
    pub ascii_height: usize,
    pub export_csv: Option<PathBuf>,
    pub export_json: Option<PathBuf>,
}

/// Resolved settings for `zcurve fit`.
#[derive(Debug, Clone)]
pub struct FitConfig {
    pub output_path: PathBuf,
    pub data_path: Option<PathBuf>,
    pub initial: ModelParams,
    /// Per-parameter step sizes, in `ModelParams::to_array` order.
    pub learning_rate: [f64; ModelParams::LEN],
    pub iterations: usize,
    pub samples: usize,
    pub seed: u64,
}

impl FitConfig {
    pub const DEFAULT_INITIAL: ModelParams = ModelParams {
        r0: 1.0,
        rc: 1.0,
        k: 0.0,
        t0: 0.0,
    };
    pub const DEFAULT_LEARNING_RATE: [f64; ModelParams::LEN] = [1e-6, 1e-5, 1e-10, 1e-4];
}

/// Best parameters found by the RANSAC search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitOutcome {
    pub params: ModelParams,
    /// SSE on the winning trial's inliers.
    pub loss: f64,
    pub trial: usize,
    pub inliers: usize,
}
