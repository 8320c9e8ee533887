//! Persisted fixture format.
//!
//! Records are stored as UTF-8 CSV with every field double-quoted:
//!
//! ```text
//! "customer_id","customer_name","customer_mobile","frequency"
//! "y88xTa01","tom.y88xTa01","+886938766119","4"
//! ```
//!
//! Decoding is strict. A malformed row aborts the whole load with
//! [`RosterError::Parse`](crate::error::RosterError::Parse).

mod csv;

pub use csv::{
    read_frequencies, read_frequencies_from_path, read_records, read_records_from_path,
    write_records, write_records_to_path, CsvRows,
};

/// Header row of the customer fixture file, in column order.
pub const CUSTOMER_COLUMNS: [&str; 4] = [
    "customer_id",
    "customer_name",
    "customer_mobile",
    "frequency",
];
