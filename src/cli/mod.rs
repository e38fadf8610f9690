//! Command-line parsing for the thermometer curve tool.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! model/plot code: args are converted into plain config structs in `app`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "zcurve", version, about = "Thermometer curve: plot observed vs. modeled readings")]
pub struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: tracing::Level,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render observed vs. modeled values to an image (the default command).
    Plot(PlotArgs),
    /// Print parameters, residuals and recomputed SSE; writes no image.
    Report(InputArgs),
    /// Fit the model parameters and write them to a params file.
    Fit(FitArgs),
}

/// Where the params and samples come from.
#[derive(Debug, Args, Clone)]
pub struct InputArgs {
    /// Params file: `r0 rc k t0 loss`, whitespace separated.
    #[arg(long, default_value = "params.txt")]
    pub params: PathBuf,

    /// Headerless CSV dataset with one `t,z` record per line (built-in readings when omitted).
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,
}

/// Options for `zcurve plot`.
#[derive(Debug, Args, Clone)]
pub struct PlotArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output image; the format follows the extension.
    #[arg(short, long, default_value = "plot.png")]
    pub output: PathBuf,

    /// Image width (pixels).
    #[arg(long, default_value_t = 640)]
    pub width: u32,

    /// Image height (pixels).
    #[arg(long, default_value_t = 480)]
    pub height: u32,

    /// Also print an ASCII preview to the terminal.
    #[arg(long)]
    pub ascii: bool,

    /// ASCII preview width (columns).
    #[arg(long, default_value_t = 80)]
    pub ascii_width: usize,

    /// ASCII preview height (rows).
    #[arg(long, default_value_t = 20)]
    pub ascii_height: usize,

    /// Export the sorted series to CSV.
    #[arg(long = "export-csv", value_name = "CSV")]
    pub export_csv: Option<PathBuf>,

    /// Export params, loss and sorted series to JSON.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,
}

/// Options for `zcurve fit`.
#[derive(Debug, Args, Clone)]
pub struct FitArgs {
    /// Params file to write.
    #[arg(short, long, default_value = "params.txt")]
    pub output: PathBuf,

    /// Headerless CSV dataset with one `t,z` record per line (built-in readings when omitted).
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Number of random inlier trials.
    #[arg(long, default_value_t = 200)]
    pub samples: usize,

    /// Gradient descent iterations per trial.
    #[arg(long, default_value_t = 3000)]
    pub iterations: usize,

    /// Random seed for inlier selection.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}
