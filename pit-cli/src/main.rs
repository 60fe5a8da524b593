use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pit_core::{TaxInput, TaxRules, compute_tax};
use pit_cli::{logging, report};
use tracing::{debug, info};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Nigerian personal income tax estimator (2026 rules).
///
/// Reads declared income, deductions and prepaid taxes, and prints the
/// estimated liability with a bracket-by-bracket breakdown.
#[derive(Debug, Parser)]
#[command(name = "pit-calc", version, about, long_about = None)]
struct Cli {
    /// Increase log detail (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Also append log records to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute the estimate for a declaration.
    Compute {
        /// Declaration file (.toml or .csv). Without it every amount starts at zero.
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Set one amount, e.g. `--set basic_salary=3,800,000`. Repeatable;
        /// applied after the input file.
        #[arg(short = 's', long = "set", value_name = "FIELD=AMOUNT")]
        overrides: Vec<String>,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List the accepted input field keys.
    Fields,

    /// Show the progressive band table.
    Bands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

// ─── commands ────────────────────────────────────────────────────────────────

fn build_input(
    input: Option<&PathBuf>,
    overrides: &[String],
) -> Result<TaxInput> {
    let mut tax_input = match input {
        Some(path) => pit_data::load_file(path)
            .with_context(|| format!("Failed to load declaration: {}", path.display()))?,
        None => TaxInput::default(),
    };

    for assignment in overrides {
        pit_data::apply_override(&mut tax_input, assignment)
            .with_context(|| format!("Failed to apply override: {assignment}"))?;
    }

    Ok(tax_input)
}

fn run_compute(
    input: Option<&PathBuf>,
    overrides: &[String],
    format: OutputFormat,
) -> Result<()> {
    let tax_input = build_input(input, overrides)?;
    debug!(?tax_input, "declaration assembled");

    let result = compute_tax(&tax_input);
    info!(
        tax_due = %result.tax_due,
        tax_liability = %result.tax_liability,
        "estimate computed"
    );

    let rendered = match format {
        OutputFormat::Text => report::render_text(&result),
        OutputFormat::Json => report::render_json(&result)?,
    };
    print!("{rendered}");
    if format == OutputFormat::Json {
        println!();
    }

    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.log_file.as_deref())?;

    match &cli.command {
        Command::Compute {
            input,
            overrides,
            format,
        } => run_compute(input.as_ref(), overrides, *format),
        Command::Fields => {
            print!("{}", report::render_fields());
            Ok(())
        }
        Command::Bands => {
            print!("{}", report::render_bands(&TaxRules::nigeria_2026()));
            Ok(())
        }
    }
}
