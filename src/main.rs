mod error;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;
mod stats;

use std::path::PathBuf;

use clap::Parser;

use crate::error::AppError;
use crate::input::{DEFAULT_GROUP_COLUMN, load_table};
use crate::pipeline::stage7_groups::{Stage7Params, run_stage7};
use crate::report::format_float;
use crate::report::json::{SummaryData, render_summary_json};
use crate::report::table::write_results_file;
use crate::report::text::render_sweep;

pub const DEFAULT_OUTPUT: &str = "test_output.csv";

/// Scan microarray probe intensities for recurrent deletions and duplications,
/// stratified by population group.
#[derive(Debug, Parser)]
#[command(name = "probe-cnv", version, about, long_about = None)]
#[command(after_help = "please provide file name and CV in that order")]
struct Cli {
    /// Input table (CSV, TSV, optionally .gz) with a row-index first column
    input: PathBuf,

    /// Coefficient-of-variation cutoff for unreliable probes, e.g. 0.12
    cv: f64,

    /// Output CSV path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    out: PathBuf,

    /// Write a JSON diagnostics summary to this path
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Name of the population group column
    #[arg(long, default_value = DEFAULT_GROUP_COLUMN)]
    group_column: String,

    /// Also sweep CV cutoffs over the reference channels
    #[arg(long)]
    reference_sweep: bool,
}

fn main() {
    logging::init_logging();
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let table = load_table(&cli.input, &cli.group_column)?;
    println!("file loaded {}", cli.input.display());

    let mut params = Stage7Params::new(cli.cv);
    params.reference_sweep = cli.reference_sweep;
    let output = run_stage7(&table, &params)?;

    for group in &output.groups {
        println!("{}: {} samples", group.group, group.n_samples);
        print!("{}", render_sweep(&group.probe_sweep));
        if let Some(sweep) = &group.reference_sweep {
            println!("{} reference channels:", group.group);
            print!("{}", render_sweep(sweep));
        }
    }
    println!("data run with CV: {}", format_float(cli.cv));

    write_results_file(&output.rows, &cli.out).map_err(|source| AppError::Output {
        path: cli.out.display().to_string(),
        source,
    })?;
    println!("{} file created", cli.out.display());

    if let Some(path) = &cli.summary {
        let summary = SummaryData {
            tool: "probe-cnv",
            tool_version: env!("CARGO_PKG_VERSION"),
            input: cli.input.display().to_string(),
            cv_cutoff: cli.cv,
            n_samples: table.n_samples(),
            n_reported: output.rows.len(),
            groups: &output.groups,
        };
        let json = render_summary_json(&summary)?;
        std::fs::write(path, json).map_err(|source| AppError::Summary {
            path: path.display().to_string(),
            source,
        })?;
        tracing::info!(path = %path.display(), "summary written");
    }

    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
