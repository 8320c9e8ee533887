//! Report formatting for frequency statistics.
//!
//! A [`StatisticsReport`] is rendered as three labeled values (median, mode
//! set and mean) either for humans or as JSON.
//!
//! # Examples
//!
//! ```rust
//! use coffee_roster::formatters::{HumanFormatter, ReportFormatter};
//! use coffee_roster::stats::report;
//!
//! let report = report(&[1, 1, 2, 2, 3]).unwrap();
//! let text = HumanFormatter::new().format(&report).unwrap();
//! assert_eq!(text, "Median: 2\nMode: 1, 2\nMean: 1.80000\n");
//! ```

use crate::prelude::*;
use crate::stats::StatisticsReport;
use serde::Serialize;
use std::fmt::Write;

/// Configuration options for formatting reports.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Label printed before the median
    pub median_label: String,
    /// Label printed before the mode set
    pub mode_label: String,
    /// Label printed before the mean
    pub mean_label: String,
    /// Append the sample size as a fourth line
    pub include_sample_size: bool,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            median_label: "Median".to_string(),
            mode_label: "Mode".to_string(),
            mean_label: "Mean".to_string(),
            include_sample_size: false,
            pretty: false,
        }
    }
}

impl FormatterConfig {
    /// Creates a configuration that also reports the sample size.
    pub fn detailed() -> Self {
        Self {
            include_sample_size: true,
            pretty: true,
            ..Self::default()
        }
    }

    /// Sets the three value labels.
    pub fn with_labels(
        mut self,
        median: impl Into<String>,
        mode: impl Into<String>,
        mean: impl Into<String>,
    ) -> Self {
        self.median_label = median.into();
        self.mode_label = mode.into();
        self.mean_label = mean.into();
        self
    }

    /// Sets whether to include the sample size.
    pub fn with_sample_size(mut self, include: bool) -> Self {
        self.include_sample_size = include;
        self
    }

    /// Sets whether JSON output is pretty-printed.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

/// Renders a statistics report into a string.
pub trait ReportFormatter {
    fn format(&self, report: &StatisticsReport) -> Result<String>;
}

/// Plain-text formatter, one `Label: value` line per statistic.
#[derive(Debug, Clone, Default)]
pub struct HumanFormatter {
    config: FormatterConfig,
}

impl HumanFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FormatterConfig) -> Self {
        Self { config }
    }
}

impl ReportFormatter for HumanFormatter {
    fn format(&self, report: &StatisticsReport) -> Result<String> {
        let config = &self.config;
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(output, "{}: {}", config.median_label, report.median_display());
        let _ = writeln!(output, "{}: {}", config.mode_label, report.modes_display());
        let _ = writeln!(output, "{}: {}", config.mean_label, report.mean_display());
        if config.include_sample_size {
            let _ = writeln!(output, "Samples: {}", report.sample_size);
        }
        Ok(output)
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    median: f64,
    modes: &'a [i64],
    mean: String,
    sample_size: usize,
}

/// JSON formatter. The mean is emitted as its 5-digit string form.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    config: FormatterConfig,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FormatterConfig) -> Self {
        Self { config }
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &StatisticsReport) -> Result<String> {
        let document = JsonReport {
            median: report.median,
            modes: &report.modes,
            mean: report.mean_display(),
            sample_size: report.sample_size,
        };
        let text = if self.config.pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::report;

    #[test]
    fn test_human_single_mode() {
        let report = report(&[5, 5, 5, 1, 2]).unwrap();
        let text = HumanFormatter::new().format(&report).unwrap();
        assert_eq!(text, "Median: 5\nMode: 5\nMean: 3.60000\n");
    }

    #[test]
    fn test_human_even_median_and_custom_labels() {
        let report = report(&[1, 2, 3, 4]).unwrap();
        let config = FormatterConfig::default()
            .with_labels("median", "mode", "mean")
            .with_sample_size(true);
        let text = HumanFormatter::with_config(config).format(&report).unwrap();
        assert_eq!(
            text,
            "median: 2.5\nmode: 1, 2, 3, 4\nmean: 2.50000\nSamples: 4\n"
        );
    }

    #[test]
    fn test_json_document() {
        let report = report(&[1, 1, 2, 2, 3]).unwrap();
        let text = JsonFormatter::new().format(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["median"], 2.0);
        assert_eq!(value["modes"], serde_json::json!([1, 2]));
        assert_eq!(value["mean"], "1.80000");
        assert_eq!(value["sample_size"], 5);
        assert!(!text.contains('\n'));
    }

    #[test]
    fn test_json_pretty() {
        let report = report(&[1, 2, 3]).unwrap();
        let text = JsonFormatter::with_config(FormatterConfig::detailed())
            .format(&report)
            .unwrap();
        assert!(text.contains('\n'));
        assert!(text.contains("\"mean\": \"2.00000\""));
    }
}
