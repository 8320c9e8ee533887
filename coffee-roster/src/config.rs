//! Generator configuration.
//!
//! The name vocabulary, mobile prefix and frequency bounds are data rather
//! than constants so tests can swap in small deterministic vocabularies.
//! Configurations can be built in code or loaded from a JSON document;
//! missing fields fall back to the defaults.

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name prefixes used when no vocabulary is configured.
pub const DEFAULT_NAME_PREFIXES: [&str; 10] = [
    "tom", "peter", "hank", "jim", "taylor", "abe", "steph", "chi", "chino", "hiromi",
];

/// Country/operator prefix used when no mobile prefix is configured.
pub const DEFAULT_MOBILE_PREFIX: &str = "+8869";

/// Inclusive upper bound of generated visit frequencies.
pub const DEFAULT_FREQUENCY_MAX: u32 = 20;

/// Configuration for [`RecordGenerator`](crate::generator::RecordGenerator).
///
/// # Examples
///
/// ```rust
/// use coffee_roster::config::GeneratorConfig;
///
/// let config = GeneratorConfig::default()
///     .with_name_prefixes(["ann", "bob"])
///     .with_frequency_range(1, 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Vocabulary the `name` prefix is drawn from
    pub name_prefixes: Vec<String>,
    /// Prefix prepended to the 8-digit mobile suffix
    pub mobile_prefix: String,
    /// Smallest frequency value (inclusive)
    pub frequency_min: u32,
    /// Largest frequency value (inclusive)
    pub frequency_max: u32,
    /// Redraw colliding ids so a batch never repeats one
    pub enforce_unique_ids: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            name_prefixes: DEFAULT_NAME_PREFIXES.iter().map(|s| s.to_string()).collect(),
            mobile_prefix: DEFAULT_MOBILE_PREFIX.to_string(),
            frequency_min: 0,
            frequency_max: DEFAULT_FREQUENCY_MAX,
            enforce_unique_ids: false,
        }
    }
}

impl GeneratorConfig {
    /// Replaces the name prefix vocabulary.
    pub fn with_name_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.name_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the mobile number prefix.
    pub fn with_mobile_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.mobile_prefix = prefix.into();
        self
    }

    /// Sets the inclusive frequency range.
    pub fn with_frequency_range(mut self, min: u32, max: u32) -> Self {
        self.frequency_min = min;
        self.frequency_max = max;
        self
    }

    /// Sets whether ids must be unique within a batch.
    pub fn with_unique_ids(mut self, enabled: bool) -> Self {
        self.enforce_unique_ids = enabled;
        self
    }

    /// Checks that the configuration can drive a generator.
    ///
    /// Prefixes end up inside single-line CSV fields, so control characters
    /// such as `\n` and `\r` are rejected.
    pub fn validate(&self) -> Result<()> {
        if self.name_prefixes.is_empty() {
            return Err(RosterError::Configuration(
                "At least one name prefix must be provided".to_string(),
            ));
        }
        if self.name_prefixes.iter().any(|p| p.is_empty()) {
            return Err(RosterError::Configuration(
                "Name prefixes must not be empty strings".to_string(),
            ));
        }
        if let Some(prefix) = self
            .name_prefixes
            .iter()
            .find(|p| p.chars().any(char::is_control))
        {
            return Err(RosterError::Configuration(format!(
                "Name prefix {prefix:?} contains a control character"
            )));
        }
        if self.mobile_prefix.chars().any(char::is_control) {
            return Err(RosterError::Configuration(format!(
                "Mobile prefix {:?} contains a control character",
                self.mobile_prefix
            )));
        }
        if self.frequency_min > self.frequency_max {
            return Err(RosterError::Configuration(format!(
                "Frequency range is inverted: {} > {}",
                self.frequency_min, self.frequency_max
            )));
        }
        Ok(())
    }

    /// Parses and validates a JSON configuration document.
    pub fn from_json_str(document: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let document = std::fs::read_to_string(path)?;
        Self::from_json_str(&document)
    }
}
