//! Descriptive statistics over integer samples.
//!
//! All functions are pure and reject empty input with
//! [`RosterError::EmptyInput`] instead of returning a sentinel.
//!
//! # Mode tie-break
//!
//! [`modes`] never fails on multi-modal data. It returns every value that
//! reaches the highest occurrence count, in ascending numeric order, so the
//! output is deterministic regardless of input order.
//!
//! # Examples
//!
//! ```rust
//! use coffee_roster::stats::{format_mean, mean, median, modes};
//!
//! assert_eq!(median(&[1, 2, 3, 4]).unwrap(), 2.5);
//! assert_eq!(modes(&[1, 1, 2, 2, 3]).unwrap(), vec![1, 2]);
//! assert_eq!(format_mean(mean(&[1, 2, 3]).unwrap()), "2.00000");
//! ```

use crate::prelude::*;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Fractional digits used when rendering a mean.
pub const MEAN_PRECISION: usize = 5;

fn ensure_non_empty(values: &[i64], operation: &'static str) -> Result<()> {
    if values.is_empty() {
        Err(RosterError::EmptyInput { operation })
    } else {
        Ok(())
    }
}

/// Computes the median.
///
/// Odd-length samples return the middle element; even-length samples return
/// the mean of the two middle elements.
pub fn median(values: &[i64]) -> Result<f64> {
    ensure_non_empty(values, "median")?;

    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;

    if sorted.len() % 2 == 1 {
        Ok(sorted[mid] as f64)
    } else {
        Ok((sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0)
    }
}

/// Computes the arithmetic mean.
///
/// The sum is accumulated in `i128` so large samples cannot overflow before
/// the division.
pub fn mean(values: &[i64]) -> Result<f64> {
    ensure_non_empty(values, "mean")?;
    let sum: i128 = values.iter().map(|&v| i128::from(v)).sum();
    Ok(sum as f64 / values.len() as f64)
}

/// Returns every value tied for the highest occurrence count, ascending.
pub fn modes(values: &[i64]) -> Result<Vec<i64>> {
    ensure_non_empty(values, "mode")?;

    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for &value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let max_count = counts.values().copied().max().unwrap_or(0);
    Ok(counts
        .into_iter()
        .filter(|&(_, count)| count == max_count)
        .map(|(value, _)| value)
        .collect())
}

/// Renders a mean with exactly [`MEAN_PRECISION`] rounded fractional digits.
pub fn format_mean(mean: f64) -> String {
    format!("{mean:.prec$}", prec = MEAN_PRECISION)
}

/// Renders a mode set as an ascending comma-separated list.
pub fn format_modes(modes: &[i64]) -> String {
    modes
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Median, mode set and mean of one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsReport {
    pub median: f64,
    /// Non-empty, ascending
    pub modes: Vec<i64>,
    pub mean: f64,
    pub sample_size: usize,
}

impl StatisticsReport {
    /// Returns true when more than one value ties for the highest count.
    pub fn is_multimodal(&self) -> bool {
        self.modes.len() > 1
    }

    /// Renders the median.
    ///
    /// An even-length median is the midpoint of two values and always shows
    /// a fractional digit (`2.0`, `2.5`). An odd-length median is a sample
    /// value and renders as an integer (`2`).
    pub fn median_display(&self) -> String {
        if self.sample_size % 2 == 0 && self.median.fract() == 0.0 {
            format!("{:.1}", self.median)
        } else {
            self.median.to_string()
        }
    }

    pub fn modes_display(&self) -> String {
        format_modes(&self.modes)
    }

    pub fn mean_display(&self) -> String {
        format_mean(self.mean)
    }
}

impl fmt::Display for StatisticsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "median={} modes=[{}] mean={}",
            self.median_display(),
            self.modes_display(),
            self.mean_display()
        )
    }
}

/// Computes median, modes and mean together.
///
/// Returns the first [`RosterError::EmptyInput`] encountered.
pub fn report(values: &[i64]) -> Result<StatisticsReport> {
    let report = StatisticsReport {
        median: median(values)?,
        modes: modes(values)?,
        mean: mean(values)?,
        sample_size: values.len(),
    };
    debug!(
        sample_size = report.sample_size,
        modes = %report.modes_display(),
        "computed frequency statistics"
    );
    Ok(report)
}

/// An ordered sample of decoded `frequency` values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencySample {
    values: Vec<i64>,
}

impl FrequencySample {
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    /// Collects the frequency column of already-built records.
    pub fn from_records(records: &[crate::generator::CustomerRecord]) -> Self {
        Self::new(records.iter().map(|r| i64::from(r.frequency)).collect())
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Computes the statistics report for this sample.
    pub fn report(&self) -> Result<StatisticsReport> {
        report(&self.values)
    }
}

impl From<Vec<i64>> for FrequencySample {
    fn from(values: Vec<i64>) -> Self {
        Self::new(values)
    }
}

impl FromIterator<i64> for FrequencySample {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
