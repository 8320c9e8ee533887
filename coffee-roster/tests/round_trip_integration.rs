//! End-to-end tests: generate a batch, persist it, decode it and report on it.

use coffee_roster::formatters::{HumanFormatter, JsonFormatter, ReportFormatter};
use coffee_roster::prelude::*;
use coffee_roster::sources::{
    read_frequencies, read_frequencies_from_path, read_records_from_path, write_records,
    write_records_to_path,
};
use coffee_roster::stats;
use std::collections::HashSet;

fn default_batch(seed: u64, n: usize) -> Vec<CustomerRecord> {
    RecordGenerator::seeded(GeneratorConfig::default(), seed)
        .unwrap()
        .generate_batch(n)
        .unwrap()
}

#[test]
fn test_frequency_column_round_trips_in_order() {
    let batch = default_batch(2024, 500);

    let mut buffer = Vec::new();
    write_records(&mut buffer, &batch).unwrap();
    let sample = read_frequencies(buffer.as_slice()).unwrap();

    let expected: Vec<i64> = batch.iter().map(|r| i64::from(r.frequency)).collect();
    assert_eq!(sample.values(), expected.as_slice());
    assert_eq!(sample, FrequencySample::from_records(&batch));
}

#[test]
fn test_file_round_trip_matches_in_memory_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ilovecoffee").join("customers.csv");

    let batch = default_batch(99, 500);
    write_records_to_path(&path, &batch).unwrap();

    assert_eq!(read_records_from_path(&path).unwrap(), batch);

    let from_disk = read_frequencies_from_path(&path).unwrap().report().unwrap();
    let in_memory = FrequencySample::from_records(&batch).report().unwrap();
    assert_eq!(from_disk, in_memory);
    assert_eq!(from_disk.sample_size, 500);
}

#[test]
fn test_persisted_file_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("customers.csv");
    write_records_to_path(&path, &default_batch(5, 3)).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "\"customer_id\",\"customer_name\",\"customer_mobile\",\"frequency\""
    );
    for line in &lines[1..] {
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields.len(), 4);
        assert!(fields.iter().all(|f| f.starts_with('"') && f.ends_with('"')));
    }
}

#[test]
fn test_batch_invariants_hold_for_a_full_fixture() {
    let batch = default_batch(7, 500);
    assert_eq!(batch.len(), 500);

    let mobiles: HashSet<_> = batch.iter().map(|r| r.mobile.as_str()).collect();
    assert_eq!(mobiles.len(), 500);

    for record in &batch {
        assert_eq!(record.id.len(), 8);
        assert!(!record.id.as_bytes()[0].is_ascii_digit());
        assert!(record.frequency <= 20);
        let (prefix, id) = record.name.split_once('.').unwrap();
        assert_eq!(id, record.id);
        assert!(GeneratorConfig::default()
            .name_prefixes
            .iter()
            .any(|p| p == prefix));
    }
}

#[test]
fn test_multimodal_report_renders_ascending_list() {
    // Two values tie at the highest count; the input order is scrambled.
    let sample = FrequencySample::new(vec![7, 3, 20, 7, 3, 0]);
    let report = sample.report().unwrap();
    assert_eq!(report.modes, vec![3, 7]);

    let text = HumanFormatter::new().format(&report).unwrap();
    assert_eq!(text, "Median: 5.0\nMode: 3, 7\nMean: 6.66667\n");

    let json: serde_json::Value =
        serde_json::from_str(&JsonFormatter::new().format(&report).unwrap()).unwrap();
    assert_eq!(json["modes"], serde_json::json!([3, 7]));
    assert_eq!(json["mean"], "6.66667");
}

#[test]
fn test_small_vocabulary_generates_exact_names_and_frequencies() {
    let config = GeneratorConfig::default()
        .with_name_prefixes(["solo"])
        .with_mobile_prefix("+10")
        .with_frequency_range(4, 4);
    let batch = RecordGenerator::seeded(config, 1)
        .unwrap()
        .generate_batch(20)
        .unwrap();

    for record in &batch {
        assert_eq!(record.name, format!("solo.{}", record.id));
        assert_eq!(record.frequency, 4);
        assert_eq!(record.mobile.len(), 11);
    }

    let report = FrequencySample::from_records(&batch).report().unwrap();
    assert_eq!(report.modes, vec![4]);
    assert_eq!(report.mean_display(), "4.00000");
}

#[test]
fn test_empty_fixture_reports_empty_input() {
    let mut buffer = Vec::new();
    write_records(&mut buffer, &[]).unwrap();
    let sample = read_frequencies(buffer.as_slice()).unwrap();
    let err = sample.report().unwrap_err();
    assert!(matches!(err, RosterError::EmptyInput { .. }));
    assert!(stats::mean(sample.values()).is_err());
}

#[test]
fn test_corrupt_row_aborts_the_load() {
    let mut buffer = Vec::new();
    write_records(&mut buffer, &default_batch(3, 10)).unwrap();
    let mut text = String::from_utf8(buffer).unwrap();
    text.push_str("\"x\",\"tom.x\",\"+886900000000\",\"many\"\r\n");

    let err = read_frequencies(text.as_bytes()).unwrap_err();
    assert!(matches!(err, RosterError::Parse { line: 12, .. }));
}
