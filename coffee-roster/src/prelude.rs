//! Prelude for commonly used types and traits in coffee-roster.

pub use crate::config::GeneratorConfig;
pub use crate::error::{Result, RosterError};
pub use crate::formatters::{FormatterConfig, ReportFormatter};
pub use crate::generator::{CustomerRecord, RecordGenerator};
pub use crate::stats::{FrequencySample, StatisticsReport};
