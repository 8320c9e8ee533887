//! Shared command implementations for the `coffee-roster` binary.
//!
//! Each command is a plain function so it can be exercised from tests
//! without spawning the binary.

use anyhow::{Context, Result};
use clap::ValueEnum;
use coffee_roster::formatters::{HumanFormatter, JsonFormatter, ReportFormatter};
use coffee_roster::logging::setup::LoggingConfig;
use coffee_roster::prelude::*;
use coffee_roster::sources::{read_frequencies_from_path, write_records_to_path};
use std::path::{Path, PathBuf};
use tracing::{info, Level};

/// Default fixture location, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "ilovecoffee/customers.csv";

/// Default number of records per fixture.
pub const DEFAULT_COUNT: usize = 500;

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Human,
    Json,
}

/// Logging preset selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogProfile {
    /// Plain output, `info` for coffee-roster and `warn` elsewhere
    #[default]
    Standard,
    /// Plain output at `debug` everywhere
    Development,
    /// JSON output at `warn` everywhere
    Production,
}

/// Logging flags shared by every command.
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub profile: LogProfile,
    /// Overrides the preset's level for coffee-roster components
    pub level: Option<Level>,
    /// Forces JSON output
    pub json: bool,
    /// Replaces the generated filter directive entirely
    pub filter: Option<String>,
}

/// Builds the subscriber configuration for the given flags.
pub fn logging_config(options: &LogOptions) -> LoggingConfig {
    let mut config = match options.profile {
        LogProfile::Standard => LoggingConfig::default(),
        LogProfile::Development => LoggingConfig::development(),
        LogProfile::Production => LoggingConfig::production(),
    };
    if let Some(level) = options.level {
        config = config.with_crate_level(level);
    }
    if options.json {
        config = config.with_json_format(true);
    }
    if let Some(filter) = &options.filter {
        config = config.with_env_filter(filter.as_str());
    }
    config
}

/// Options for the `generate` command.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub count: usize,
    pub output: PathBuf,
    pub seed: Option<u64>,
    pub config: Option<PathBuf>,
    pub unique_ids: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            output: PathBuf::from(DEFAULT_OUTPUT),
            seed: None,
            config: None,
            unique_ids: false,
        }
    }
}

fn load_config(options: &GenerateOptions) -> Result<GeneratorConfig> {
    let config = match &options.config {
        Some(path) => GeneratorConfig::from_json_file(path)
            .with_context(|| format!("loading generator config from {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    // The flag can only switch the hook on; a config file may already have.
    Ok(if options.unique_ids {
        config.with_unique_ids(true)
    } else {
        config
    })
}

/// Generates a fixture file and returns the records written.
pub fn generate(options: &GenerateOptions) -> Result<Vec<CustomerRecord>> {
    let config = load_config(options)?;
    let mut generator = match options.seed {
        Some(seed) => RecordGenerator::seeded(config, seed)?,
        None => RecordGenerator::from_entropy(config)?,
    };

    let records = generator
        .generate_batch(options.count)
        .context("generating customer batch")?;
    write_records_to_path(&options.output, &records)
        .with_context(|| format!("writing fixtures to {}", options.output.display()))?;

    info!(
        count = records.len(),
        output = %options.output.display(),
        seeded = options.seed.is_some(),
        "fixture generated"
    );
    Ok(records)
}

/// Loads the frequency column of a fixture file and renders its report.
pub fn report(input: &Path, format: ReportFormat) -> Result<String> {
    let sample = read_frequencies_from_path(input)
        .with_context(|| format!("reading frequencies from {}", input.display()))?;
    let report = sample
        .report()
        .with_context(|| format!("computing statistics for {}", input.display()))?;

    let rendered = match format {
        ReportFormat::Human => HumanFormatter::new().format(&report)?,
        ReportFormat::Json => JsonFormatter::new().format(&report)?,
    };
    Ok(rendered)
}
