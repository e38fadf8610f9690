//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and sets up logging
//! - runs the plot pipeline (chart plus optional exports)
//! - prints reports and the ASCII preview
//! - runs the parameter fit and writes the params file

use clap::Parser;

use crate::cli::{Cli, Command, FitArgs, InputArgs, PlotArgs};
use crate::domain::{ChartSize, FitConfig, ParamsFile, PlotConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `zcurve` binary.
pub fn run() -> Result<(), AppError> {
    // `zcurve` and `zcurve --params p.txt` behave like `zcurve plot ...`.
    let argv = with_default_command(std::env::args().collect());
    let cli = Cli::parse_from(argv);

    init_logging(cli.log_level);

    match cli.command {
        Command::Plot(args) => handle_plot(&args),
        Command::Report(args) => handle_report(&args),
        Command::Fit(args) => handle_fit(&args),
    }
}

fn init_logging(level: tracing::Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_plot(args: &PlotArgs) -> Result<(), AppError> {
    let config = plot_config_from_args(args);
    let run = pipeline::run_plot(&config)?;

    if config.ascii {
        println!(
            "{}",
            crate::plot::render_ascii_plot(
                &run.series,
                run.params_file.loss,
                config.ascii_width,
                config.ascii_height,
            )
        );
    }

    Ok(())
}

fn handle_report(args: &InputArgs) -> Result<(), AppError> {
    let config = plot_config_from_input(args);
    let run = pipeline::prepare(&config)?;

    println!("{}", crate::report::format_run_summary(&run.params_file, &run.series));
    println!("{}", crate::report::format_residual_table(&run.series));
    Ok(())
}

fn handle_fit(args: &FitArgs) -> Result<(), AppError> {
    let config = fit_config_from_args(args);
    let dataset = crate::data::load_dataset(config.data_path.as_deref())?;
    tracing::info!(
        samples = config.samples,
        iterations = config.iterations,
        seed = config.seed,
        points = dataset.len(),
        "fitting"
    );

    let outcome = crate::fit::ransac(&dataset, &config)?;
    println!("{}", crate::report::format_fit_outcome(&outcome, dataset.len()));

    crate::io::write_params(
        &config.output_path,
        &ParamsFile {
            params: outcome.params,
            loss: outcome.loss,
        },
    )?;
    tracing::info!(path = %config.output_path.display(), "params written");
    Ok(())
}

pub fn plot_config_from_args(args: &PlotArgs) -> PlotConfig {
    PlotConfig {
        output_path: args.output.clone(),
        size: ChartSize {
            width: args.width,
            height: args.height,
        },
        ascii: args.ascii,
        ascii_width: args.ascii_width,
        ascii_height: args.ascii_height,
        export_csv: args.export_csv.clone(),
        export_json: args.export_json.clone(),
        ..plot_config_from_input(&args.input)
    }
}

fn plot_config_from_input(input: &InputArgs) -> PlotConfig {
    PlotConfig {
        params_path: input.params.clone(),
        output_path: "plot.png".into(),
        data_path: input.data.clone(),
        size: ChartSize::default(),
        ascii: false,
        ascii_width: 80,
        ascii_height: 20,
        export_csv: None,
        export_json: None,
    }
}

pub fn fit_config_from_args(args: &FitArgs) -> FitConfig {
    FitConfig {
        output_path: args.output.clone(),
        data_path: args.data.clone(),
        initial: FitConfig::DEFAULT_INITIAL,
        learning_rate: FitConfig::DEFAULT_LEARNING_RATE,
        iterations: args.iterations,
        samples: args.samples,
        seed: args.seed,
    }
}

const SUBCOMMANDS: [&str; 3] = ["plot", "report", "fit"];

/// Insert the default `plot` subcommand when argv does not name one.
///
/// Global options may precede the subcommand (`zcurve --log-level debug fit`),
/// so they are skipped before the first remaining word is inspected. Top-level
/// help and version requests pass through untouched.
fn with_default_command(mut argv: Vec<String>) -> Vec<String> {
    let at = command_position(&argv);
    let needs_plot = match argv.get(at).map(String::as_str) {
        None => true,
        Some(word) if SUBCOMMANDS.contains(&word) => false,
        Some("-h" | "--help" | "-V" | "--version" | "help") => false,
        Some(word) => word.starts_with('-'),
    };
    if needs_plot {
        argv.insert(at, "plot".to_string());
    }
    argv
}

/// Index of the first argv word after the binary name and global options.
fn command_position(argv: &[String]) -> usize {
    let mut at = 1;
    while let Some(arg) = argv.get(at) {
        match arg.as_str() {
            "--log-level" => at += 2,
            a if a.starts_with("--log-level=") => at += 1,
            _ => break,
        }
    }
    at.min(argv.len())
}
