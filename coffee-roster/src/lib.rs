//! # coffee-roster
//!
//! Synthetic customer fixtures and frequency statistics.
//!
//! The crate has two independent halves:
//!
//! - **Generation** ([`generator`]): produces batches of [`CustomerRecord`]s
//!   with distinct mobile numbers and visit frequencies in `[0, 20]`, drawn
//!   from an injected, seedable random source.
//! - **Statistics** ([`stats`]): median, mode set and mean over the decoded
//!   `frequency` column, with a deterministic ascending tie-break when
//!   several values share the highest count.
//!
//! They meet only through the persisted CSV format in [`sources`].
//!
//! ## Quick Start
//!
//! ```rust
//! use coffee_roster::prelude::*;
//! use coffee_roster::formatters::HumanFormatter;
//! use coffee_roster::sources::{read_frequencies, write_records};
//!
//! # fn main() -> coffee_roster::error::Result<()> {
//! let mut generator = RecordGenerator::seeded(GeneratorConfig::default(), 7)?;
//! let batch = generator.generate_batch(500)?;
//!
//! let mut buffer = Vec::new();
//! write_records(&mut buffer, &batch)?;
//!
//! let sample = read_frequencies(buffer.as_slice())?;
//! let report = sample.report()?;
//! println!("{}", HumanFormatter::new().format(&report)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **`config`**: generator vocabularies and bounds, loadable from JSON
//! - **`generator`**: record generation and batch assembly
//! - **`stats`**: median / modes / mean and the report type
//! - **`sources`**: quoted CSV encoding and decoding
//! - **`formatters`**: human and JSON report rendering
//! - **`logging`**: tracing subscriber setup
//!
//! [`CustomerRecord`]: generator::CustomerRecord

pub mod config;
pub mod error;
pub mod formatters;
pub mod generator;
pub mod logging;
pub mod prelude;
pub mod sources;
pub mod stats;
