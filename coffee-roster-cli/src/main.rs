//! coffee-roster
//!
//! Generates synthetic customer fixtures and reports median, mode set and
//! mean of their visit frequencies.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use coffee_roster::logging::setup::init_logging;
use coffee_roster_cli::{
    generate, logging_config, report, GenerateOptions, LogOptions, LogProfile, ReportFormat,
    DEFAULT_COUNT, DEFAULT_OUTPUT,
};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Logging preset
    #[arg(long, global = true, value_enum, default_value_t = LogProfile::Standard)]
    log_profile: LogProfile,

    /// Log level for coffee-roster components, overriding the preset
    #[arg(long, global = true)]
    log_level: Option<Level>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    /// Raw filter directive, e.g. `coffee_roster::sources=trace`
    #[arg(long, global = true)]
    log_filter: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(clap::Args, Debug)]
struct GenerateArgs {
    /// Number of records to generate
    #[arg(long, default_value_t = DEFAULT_COUNT)]
    count: usize,

    /// Fixture file to write
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// JSON generator configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Redraw ids so none repeats within the batch
    #[arg(long)]
    unique_ids: bool,
}

impl From<GenerateArgs> for GenerateOptions {
    fn from(args: GenerateArgs) -> Self {
        Self {
            count: args.count,
            output: args.output,
            seed: args.seed,
            config: args.config,
            unique_ids: args.unique_ids,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a customer fixture file
    Generate(GenerateArgs),

    /// Report frequency statistics of a fixture file
    Report {
        /// Fixture file to read
        #[arg(long, default_value = DEFAULT_OUTPUT)]
        input: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = ReportFormat::Human)]
        format: ReportFormat,
    },

    /// Generate a fixture, then report on it (default)
    Run {
        #[command(flatten)]
        generate: GenerateArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = ReportFormat::Human)]
        format: ReportFormat,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let logging = logging_config(&LogOptions {
        profile: args.log_profile,
        level: args.log_level,
        json: args.json_logs,
        filter: args.log_filter,
    });
    init_logging(logging).map_err(|e| anyhow!("failed to initialize logging: {e}"))?;

    let command = args.command.unwrap_or_else(|| Command::Run {
        generate: GenerateArgs {
            count: DEFAULT_COUNT,
            output: PathBuf::from(DEFAULT_OUTPUT),
            seed: None,
            config: None,
            unique_ids: false,
        },
        format: ReportFormat::Human,
    });

    match command {
        Command::Generate(generate_args) => {
            let options = GenerateOptions::from(generate_args);
            let records = generate(&options)?;
            println!(
                "Wrote {} records to {}",
                records.len(),
                options.output.display()
            );
        }
        Command::Report { input, format } => {
            print!("{}", report(&input, format)?);
        }
        Command::Run {
            generate: generate_args,
            format,
        } => {
            let options = GenerateOptions::from(generate_args);
            generate(&options)?;
            print!("{}", report(&options.output, format)?);
        }
    }

    Ok(())
}
