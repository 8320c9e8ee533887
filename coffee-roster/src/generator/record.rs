//! Customer record value type and positional batch assembly.

use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// One synthetic customer.
///
/// Serde field names match the persisted CSV columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerRecord {
    #[serde(rename = "customer_id")]
    pub id: String,
    #[serde(rename = "customer_name")]
    pub name: String,
    #[serde(rename = "customer_mobile")]
    pub mobile: String,
    pub frequency: u32,
}

impl CustomerRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        mobile: impl Into<String>,
        frequency: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            mobile: mobile.into(),
            frequency,
        }
    }
}

/// Zips four field columns into records.
///
/// All columns must have the same length; anything else is a caller bug and
/// is reported as [`RosterError::LengthMismatch`] before any record is built.
///
/// # Examples
///
/// ```rust
/// use coffee_roster::generator::assemble_records;
///
/// let records = assemble_records(
///     vec!["aBc12345".to_string()],
///     vec!["tom.aBc12345".to_string()],
///     vec!["+886900000001".to_string()],
///     vec![7],
/// )
/// .unwrap();
/// assert_eq!(records[0].frequency, 7);
///
/// let err = assemble_records(vec![], vec![], vec![], vec![1]);
/// assert!(err.is_err());
/// ```
pub fn assemble_records(
    ids: Vec<String>,
    names: Vec<String>,
    mobiles: Vec<String>,
    frequencies: Vec<u32>,
) -> Result<Vec<CustomerRecord>> {
    let n = ids.len();
    if names.len() != n || mobiles.len() != n || frequencies.len() != n {
        return Err(RosterError::LengthMismatch {
            ids: n,
            names: names.len(),
            mobiles: mobiles.len(),
            frequencies: frequencies.len(),
        });
    }

    Ok(ids
        .into_iter()
        .zip(names)
        .zip(mobiles)
        .zip(frequencies)
        .map(|(((id, name), mobile), frequency)| CustomerRecord {
            id,
            name,
            mobile,
            frequency,
        })
        .collect())
}
