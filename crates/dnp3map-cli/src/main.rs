//! # dnp3map
//!
//! Command-line front end for reconciling a SCADA DNP3 point map.
//!
//! `run` reads the map and the variable sheet, renames matched points, and
//! writes the timestamped artifacts. `check` does the same reconciliation
//! without writing anything.

mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use dnp3map_model::RenameSide;
use dnp3map_pipeline::{Pipeline, PipelineConfig, Reconciliation};

#[derive(Parser)]
#[command(name = "dnp3map")]
#[command(about = "Reconcile DNP3 output points with their input feedback points")]
#[command(version)]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconcile the map and write the artifacts
    Run {
        #[command(flatten)]
        inputs: InputArgs,

        /// Directory receiving the timestamped artifacts
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Write the run report as JSON to this file
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Reconcile the map and report mismatches without writing artifacts
    Check {
        #[command(flatten)]
        inputs: InputArgs,

        /// Write the run report as JSON to this file
        #[arg(long)]
        report: Option<PathBuf>,
    },
}

#[derive(Args)]
struct InputArgs {
    /// SCADA point map (CSV)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Variable sheet (tab-separated name and datatype)
    #[arg(long)]
    var_sheet: Option<PathBuf>,

    /// Which category of each pairing gets the feedback suffix
    #[arg(long, value_enum)]
    rename_side: Option<Side>,

    /// Fail when any point type is absent from the map
    #[arg(long)]
    require_all_types: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    Out,
    In,
}

impl From<Side> for RenameSide {
    fn from(side: Side) -> Self {
        match side {
            Side::Out => RenameSide::Out,
            Side::In => RenameSide::In,
        }
    }
}

impl InputArgs {
    fn apply(&self, config: &mut PipelineConfig) {
        if let Some(input) = &self.input {
            config.input = input.clone();
        }
        if let Some(var_sheet) = &self.var_sheet {
            config.var_sheet = var_sheet.clone();
        }
        if let Some(side) = self.rename_side {
            config.rename_side = side.into();
        }
        if self.require_all_types {
            config.require_all_types = true;
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = logging::level_from_flags(cli.verbose, cli.quiet);
    if let Err(e) = logging::init_logging(level) {
        eprintln!("{e:#}");
        return ExitCode::FAILURE;
    }

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => PipelineConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => PipelineConfig::default(),
    };

    match cli.command {
        Commands::Run {
            inputs,
            output_dir,
            report,
        } => {
            inputs.apply(&mut config);
            if let Some(dir) = output_dir {
                config.output_dir = dir;
            }
            config.validate().context("invalid configuration")?;

            tracing::info!(
                input = %config.input.display(),
                output_dir = %config.output_dir.display(),
                "Starting reconciliation run"
            );
            let result = Pipeline::new(config)
                .run_now()
                .context("reconciliation run failed")?;
            finish(&result, report)
        }
        Commands::Check { inputs, report } => {
            inputs.apply(&mut config);
            config.validate().context("invalid configuration")?;

            tracing::info!(input = %config.input.display(), "Checking point map");
            let result = Pipeline::new(config)
                .check()
                .context("reconciliation check failed")?;
            finish(&result, report)
        }
    }
}

fn finish(result: &Reconciliation, report_path: Option<PathBuf>) -> anyhow::Result<()> {
    let report = &result.report;
    println!(
        "{} rows, {} renamed, {} unmatched",
        report.rows,
        report.matched(),
        report.mismatch_count()
    );
    for pairing in &report.pairings {
        println!(
            "  {}: {} of {} matched",
            pairing.label(),
            pairing.matched,
            pairing.target_rows
        );
    }
    if let Some(outputs) = &report.outputs {
        println!("  map:             {}", outputs.map.display());
        println!("  structured text: {}", outputs.structured_text.display());
        println!("  variable sheet:  {}", outputs.var_sheet.display());
    }

    if let Some(path) = report_path {
        report
            .write_json(&path)
            .with_context(|| format!("failed to write report {}", path.display()))?;
    }
    Ok(())
}
