//! Shared plot pipeline used by the `plot` and `report` commands.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! params load -> dataset -> evaluate -> co-sort -> (render -> exports)
//!
//! Loading and evaluation finish before any file is created. If rendering or
//! an export then fails, the files already written by the run are removed,
//! so a failed run never leaves an image behind.

use std::path::Path;

use crate::data::load_dataset;
use crate::domain::{Dataset, FittedSeries, ModelParams, ParamsFile, PlotConfig};
use crate::error::AppError;
use crate::io::{read_params, write_run_json, write_series_csv};
use crate::math::{argsort, gather};
use crate::models::evaluate;

/// Computed outputs of a single plot run.
#[derive(Debug, Clone)]
pub struct PlotRun {
    pub params_file: ParamsFile,
    pub series: FittedSeries,
}

/// Evaluate the model over `dataset` and co-sort everything by `t`.
pub fn compute_series(params: &ModelParams, dataset: &Dataset) -> Result<FittedSeries, AppError> {
    let z_hat = dataset
        .t()
        .iter()
        .map(|&t| evaluate(params, t))
        .collect::<Result<Vec<f64>, AppError>>()?;

    let perm = argsort(dataset.t());
    Ok(FittedSeries {
        t: gather(dataset.t(), &perm),
        z: gather(dataset.z(), &perm),
        z_hat: gather(&z_hat, &perm),
    })
}

/// Load inputs and compute the sorted series, without rendering.
pub fn prepare(config: &PlotConfig) -> Result<PlotRun, AppError> {
    let params_file = read_params(&config.params_path)?;
    tracing::info!(
        path = %config.params_path.display(),
        r0 = params_file.params.r0,
        rc = params_file.params.rc,
        k = params_file.params.k,
        t0 = params_file.params.t0,
        loss = params_file.loss,
        "params loaded"
    );

    let dataset = load_dataset(config.data_path.as_deref())?;
    let series = compute_series(&params_file.params, &dataset)?;
    tracing::debug!(samples = series.len(), "series sorted");

    Ok(PlotRun { params_file, series })
}

/// Full plot run: prepare, render the chart to `config.output_path`, then
/// write the requested exports.
pub fn run_plot(config: &PlotConfig) -> Result<PlotRun, AppError> {
    let run = prepare(config)?;

    let mut written = Vec::new();
    if let Err(err) = write_outputs(config, &run, &mut written) {
        for path in written {
            let _ = std::fs::remove_file(path);
        }
        return Err(err);
    }
    Ok(run)
}

fn write_outputs<'a>(config: &'a PlotConfig, run: &PlotRun, written: &mut Vec<&'a Path>) -> Result<(), AppError> {
    crate::plot::render_chart(&config.output_path, &run.series, run.params_file.loss, config.size)?;
    written.push(&config.output_path);

    if let Some(path) = &config.export_csv {
        write_series_csv(path, &run.series)?;
        written.push(path);
        tracing::info!(path = %path.display(), "series CSV written");
    }
    if let Some(path) = &config.export_json {
        write_run_json(path, &run.params_file, &run.series)?;
        written.push(path);
        tracing::info!(path = %path.display(), "run JSON written");
    }
    Ok(())
}
