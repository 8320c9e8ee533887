//! Property-based tests for coffee-roster.
//!
//! These check invariants across the whole pipeline rather than single
//! functions:
//! - generated batches keep their per-field constraints for any seed and size
//! - the persisted frequency column decodes to the generated values in order
//! - statistics computed after a round trip equal those computed in memory
//! - any configuration that validates produces a file the reader accepts

use coffee_roster::prelude::*;
use coffee_roster::sources::{read_frequencies, read_records, write_records};
use coffee_roster::stats;
use proptest::prelude::*;
use std::collections::HashSet;

fn batch(seed: u64, n: usize, unique_ids: bool) -> Vec<CustomerRecord> {
    let config = GeneratorConfig::default().with_unique_ids(unique_ids);
    RecordGenerator::seeded(config, seed)
        .unwrap()
        .generate_batch(n)
        .unwrap()
}

fn encode(records: &[CustomerRecord]) -> Vec<u8> {
    let mut buffer = Vec::new();
    write_records(&mut buffer, records).unwrap();
    buffer
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn batch_respects_field_constraints(seed in any::<u64>(), n in 0_usize..300) {
        let records = batch(seed, n, false);
        prop_assert_eq!(records.len(), n);

        let mobiles: HashSet<_> = records.iter().map(|r| &r.mobile).collect();
        prop_assert_eq!(mobiles.len(), n);

        for record in &records {
            prop_assert_eq!(record.id.len(), 8);
            prop_assert!(record.id.as_bytes()[0].is_ascii_alphabetic());
            prop_assert!(record.frequency <= 20);
        }
    }

    #[test]
    fn unique_ids_hook_yields_distinct_ids(seed in any::<u64>(), n in 0_usize..300) {
        let records = batch(seed, n, true);
        let ids: HashSet<_> = records.iter().map(|r| &r.id).collect();
        prop_assert_eq!(ids.len(), n);
    }

    #[test]
    fn frequency_column_round_trips(seed in any::<u64>(), n in 0_usize..300) {
        let records = batch(seed, n, false);
        let bytes = encode(&records);

        let sample = read_frequencies(bytes.as_slice()).unwrap();
        let expected: Vec<i64> = records.iter().map(|r| i64::from(r.frequency)).collect();
        prop_assert_eq!(sample.values(), expected.as_slice());

        let decoded = read_records(bytes.as_slice()).unwrap();
        prop_assert_eq!(decoded, records);
    }

    #[test]
    fn report_survives_round_trip(seed in any::<u64>(), n in 1_usize..300) {
        let records = batch(seed, n, false);
        let sample = read_frequencies(encode(&records).as_slice()).unwrap();
        let report = sample.report().unwrap();

        prop_assert_eq!(&report, &FrequencySample::from_records(&records).report().unwrap());
        prop_assert_eq!(report.median, stats::median(sample.values()).unwrap());
        prop_assert!(report.modes.iter().all(|m| (0..=20).contains(m)));
    }

    #[test]
    fn validated_prefixes_always_round_trip(
        seed in any::<u64>(),
        prefix in "[a-z,\"\n\r ]{1,8}",
        mobile_prefix in "[+0-9\n]{0,5}",
    ) {
        let config = GeneratorConfig::default()
            .with_name_prefixes([prefix.clone()])
            .with_mobile_prefix(mobile_prefix.clone());
        let has_control =
            prefix.contains(|c: char| c == '\n' || c == '\r') || mobile_prefix.contains('\n');

        match RecordGenerator::seeded(config, seed) {
            Ok(mut generator) => {
                prop_assert!(!has_control);
                let records = generator.generate_batch(5).unwrap();
                let decoded = read_records(encode(&records).as_slice()).unwrap();
                prop_assert_eq!(decoded, records);
            }
            Err(err) => {
                prop_assert!(has_control);
                prop_assert!(matches!(err, RosterError::Configuration(_)));
            }
        }
    }
}
