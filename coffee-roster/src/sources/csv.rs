//! Quoted CSV encoding and decoding of customer records.

use super::CUSTOMER_COLUMNS;
use crate::generator::CustomerRecord;
use crate::prelude::*;
use crate::stats::FrequencySample;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Lines, Write};
use std::path::Path;
use tracing::{debug, info, instrument};

const QUOTE: char = '"';
const DELIMITER: char = ',';
const LINE_TERMINATOR: &str = "\r\n";

fn quote_field(field: &str) -> String {
    let escaped = field.replace(QUOTE, "\"\"");
    format!("{QUOTE}{escaped}{QUOTE}")
}

fn write_row<W: Write>(writer: &mut W, fields: &[&str]) -> Result<()> {
    let row = fields
        .iter()
        .map(|f| quote_field(f))
        .collect::<Vec<_>>()
        .join(",");
    writer.write_all(row.as_bytes())?;
    writer.write_all(LINE_TERMINATOR.as_bytes())?;
    Ok(())
}

/// Splits one line into fields.
///
/// Fields may be quoted (with `""` as an escaped quote) or bare. Quoted
/// fields cannot span lines.
pub(crate) fn parse_row(line: &str, line_number: usize) -> Result<Vec<String>> {
    let mut fields = Vec::new();
    let mut chars = line.chars().peekable();

    loop {
        let mut field = String::new();

        if chars.peek() == Some(&QUOTE) {
            chars.next();
            loop {
                match chars.next() {
                    Some(QUOTE) if chars.peek() == Some(&QUOTE) => {
                        chars.next();
                        field.push(QUOTE);
                    }
                    Some(QUOTE) => break,
                    Some(c) => field.push(c),
                    None => {
                        return Err(RosterError::parse(line_number, "unterminated quoted field"))
                    }
                }
            }
            match chars.next() {
                None => {
                    fields.push(field);
                    return Ok(fields);
                }
                Some(DELIMITER) => fields.push(field),
                Some(c) => {
                    return Err(RosterError::parse(
                        line_number,
                        format!("unexpected character '{c}' after closing quote"),
                    ))
                }
            }
        } else {
            loop {
                match chars.next() {
                    None => {
                        fields.push(field);
                        return Ok(fields);
                    }
                    Some(DELIMITER) => break,
                    Some(QUOTE) => {
                        return Err(RosterError::parse(
                            line_number,
                            "quote inside unquoted field",
                        ))
                    }
                    Some(c) => field.push(c),
                }
            }
            fields.push(field);
        }
    }
}

/// Invalid UTF-8 is malformed content, not a transport failure.
fn decode_line(line: io::Result<String>, line_number: usize) -> Result<String> {
    line.map_err(|e| match e.kind() {
        io::ErrorKind::InvalidData => RosterError::parse(line_number, "line is not valid UTF-8"),
        _ => e.into(),
    })
}

/// Row iterator over a CSV document that starts with a header line.
///
/// Blank lines are skipped. Every data row must have as many fields as the
/// header; rows are yielded with their 1-based line number.
pub struct CsvRows<R> {
    lines: std::iter::Enumerate<Lines<R>>,
    header: Vec<String>,
}

impl<R: BufRead> CsvRows<R> {
    /// Reads the header line.
    pub fn new(reader: R) -> Result<Self> {
        let mut lines = reader.lines().enumerate();
        let header = loop {
            match lines.next() {
                Some((index, line)) => {
                    let line = decode_line(line, index + 1)?;
                    let line = line.trim_end_matches('\r');
                    if !line.trim().is_empty() {
                        break parse_row(line, index + 1)?;
                    }
                }
                None => return Err(RosterError::parse(1, "missing header row")),
            }
        };
        Ok(Self { lines, header })
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Returns the index of a header column.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }
}

impl<R: BufRead> Iterator for CsvRows<R> {
    type Item = Result<(usize, Vec<String>)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (index, line) = self.lines.next()?;
            let line_number = index + 1;
            let line = match decode_line(line, line_number) {
                Ok(line) => line,
                Err(e) => return Some(Err(e)),
            };
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }

            let row = parse_row(line, line_number).and_then(|fields| {
                if fields.len() == self.header.len() {
                    Ok((line_number, fields))
                } else {
                    Err(RosterError::parse(
                        line_number,
                        format!(
                            "expected {} columns, got {}",
                            self.header.len(),
                            fields.len()
                        ),
                    ))
                }
            });
            return Some(row);
        }
    }
}

fn parse_frequency<T: std::str::FromStr>(value: &str, line_number: usize) -> Result<T> {
    value.trim().parse().map_err(|_| {
        RosterError::parse(line_number, format!("frequency '{value}' is not an integer"))
    })
}

/// Writes the header and one quoted row per record.
pub fn write_records<W: Write>(writer: W, records: &[CustomerRecord]) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    write_row(&mut writer, &CUSTOMER_COLUMNS)?;
    for record in records {
        let frequency = record.frequency.to_string();
        write_row(
            &mut writer,
            &[
                record.id.as_str(),
                record.name.as_str(),
                record.mobile.as_str(),
                frequency.as_str(),
            ],
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Decodes full customer records.
///
/// The header must be exactly the customer column list.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<CustomerRecord>> {
    let rows = CsvRows::new(reader)?;
    if rows.header() != CUSTOMER_COLUMNS {
        return Err(RosterError::parse(
            1,
            format!(
                "unexpected header {:?}, expected {:?}",
                rows.header(),
                CUSTOMER_COLUMNS
            ),
        ));
    }

    let mut records = Vec::new();
    for row in rows {
        let (line_number, fields) = row?;
        let [id, name, mobile, frequency]: [String; 4] = fields
            .try_into()
            .map_err(|_| RosterError::parse(line_number, "expected 4 columns"))?;
        let frequency = parse_frequency(&frequency, line_number)?;
        records.push(CustomerRecord {
            id,
            name,
            mobile,
            frequency,
        });
    }
    Ok(records)
}

/// Decodes only the `frequency` column, preserving row order.
pub fn read_frequencies<R: BufRead>(reader: R) -> Result<FrequencySample> {
    let rows = CsvRows::new(reader)?;
    let column = rows
        .column_index("frequency")
        .ok_or_else(|| RosterError::parse(1, "header has no 'frequency' column"))?;

    let mut values = Vec::new();
    for row in rows {
        let (line_number, fields) = row?;
        values.push(parse_frequency::<i64>(&fields[column], line_number)?);
    }
    debug!(rows = values.len(), "decoded frequency column");
    Ok(FrequencySample::new(values))
}

/// Writes records to `path`, creating the parent directory if needed.
#[instrument(skip_all)]
pub fn write_records_to_path(path: impl AsRef<Path>, records: &[CustomerRecord]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    write_records(file, records)?;
    info!(
        path = %path.display(),
        records = records.len(),
        "wrote customer fixtures"
    );
    Ok(())
}

/// Reads full records from `path`.
pub fn read_records_from_path(path: impl AsRef<Path>) -> Result<Vec<CustomerRecord>> {
    let file = File::open(path.as_ref())?;
    read_records(BufReader::new(file))
}

/// Reads the frequency column from `path`.
#[instrument(skip_all)]
pub fn read_frequencies_from_path(path: impl AsRef<Path>) -> Result<FrequencySample> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let sample = read_frequencies(BufReader::new(file))?;
    info!(path = %path.display(), rows = sample.len(), "loaded frequency sample");
    Ok(sample)
}
