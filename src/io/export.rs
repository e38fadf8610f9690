//! Export a plot run to CSV or JSON.
//!
//! The exports are meant to be easy to consume in spreadsheets or downstream
//! scripts. Both carry the co-sorted series, so rows are in ascending `t`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::domain::{FittedSeries, ModelParams, ParamsFile, Residual};
use crate::error::{AppError, EXIT_IO};
use crate::report::compute_residuals;

/// JSON layout of an exported run.
#[derive(Debug, Serialize)]
struct RunExport<'a> {
    tool: &'static str,
    params: &'a ModelParams,
    loss: f64,
    /// SSE recomputed from the series.
    sse: f64,
    series: &'a FittedSeries,
}

/// Write `t,z,z_hat,residual` rows.
pub fn write_series_csv(path: &Path, series: &FittedSeries) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| AppError::io("create export CSV", path, e))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "t,z,z_hat,residual")
        .map_err(|e| AppError::new(EXIT_IO, format!("Failed to write export CSV header: {e}")))?;

    for Residual {
        t,
        z,
        z_hat,
        residual,
    } in compute_residuals(series)
    {
        writeln!(out, "{t},{z},{z_hat:.6},{residual:.6}")
            .map_err(|e| AppError::new(EXIT_IO, format!("Failed to write export CSV row: {e}")))?;
    }

    out.flush()
        .map_err(|e| AppError::new(EXIT_IO, format!("Failed to flush export CSV: {e}")))
}

/// Write the params, stored loss, recomputed SSE and series as pretty JSON.
pub fn write_run_json(path: &Path, params_file: &ParamsFile, series: &FittedSeries) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| AppError::io("create export JSON", path, e))?;

    let export = RunExport {
        tool: "zcurve",
        params: &params_file.params,
        loss: params_file.loss,
        sse: crate::report::series_sse(series),
        series,
    };

    serde_json::to_writer_pretty(BufWriter::new(file), &export)
        .map_err(|e| AppError::new(EXIT_IO, format!("Failed to write export JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("zcurve_export_{}_{name}", std::process::id()))
    }

    fn series() -> FittedSeries {
        FittedSeries {
            t: vec![-5.0, 2.0],
            z: vec![87.0, 122.0],
            z_hat: vec![90.0, 120.5],
        }
    }

    #[test]
    fn csv_has_header_and_rows() {
        let path = temp_path("series.csv");
        write_series_csv(&path, &series()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(
            text,
            "t,z,z_hat,residual\n-5,87,90.000000,-3.000000\n2,122,120.500000,1.500000\n"
        );
    }

    #[test]
    fn json_contains_params_and_series() {
        let path = temp_path("run.json");
        let params_file = ParamsFile {
            params: ModelParams {
                r0: 1.0,
                rc: 2.0,
                k: 0.1,
                t0: 0.0,
            },
            loss: 11.25,
        };
        write_run_json(&path, &params_file, &series()).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(value["tool"], "zcurve");
        assert_eq!(value["params"]["rc"], 2.0);
        assert_eq!(value["loss"], 11.25);
        assert_eq!(value["sse"], 11.25);
        assert_eq!(value["series"]["t"][0], -5.0);
    }
}
