//! Synthetic customer record generation.
//!
//! [`RecordGenerator`] owns its random source, so every instance draws from
//! its own stream and a fixed seed reproduces a batch exactly. Each field
//! has its own operation; [`RecordGenerator::generate_batch`] composes them
//! and zips the columns positionally.
//!
//! # Field rules
//!
//! | Field       | Shape                                   | Batch-level rule              |
//! |-------------|-----------------------------------------|-------------------------------|
//! | `id`        | 8 alphanumerics, first is a letter      | may repeat unless configured  |
//! | `name`      | `<prefix>.<id>`                         | none                          |
//! | `mobile`    | `<prefix>` + 8-digit zero-padded suffix | suffixes pairwise distinct    |
//! | `frequency` | integer in `[min, max]`, default 0..=20 | independent draws             |
//!
//! # Examples
//!
//! ```rust
//! use coffee_roster::config::GeneratorConfig;
//! use coffee_roster::generator::RecordGenerator;
//!
//! let mut generator = RecordGenerator::seeded(GeneratorConfig::default(), 42).unwrap();
//! let batch = generator.generate_batch(5).unwrap();
//! assert_eq!(batch.len(), 5);
//! assert!(batch.iter().all(|r| r.frequency <= 20));
//! ```

mod record;
mod sampling;

pub use record::{assemble_records, CustomerRecord};
pub use sampling::{sample_distinct, ALPHANUMERIC, LETTERS};

use crate::config::GeneratorConfig;
use crate::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sampling::pick_byte;
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Length of a customer id.
pub const ID_LENGTH: usize = 8;

/// Number of distinct mobile suffixes (`00000000` through `99999999`).
pub const MOBILE_SUFFIX_SPACE: usize = 100_000_000;

/// Produces batches of [`CustomerRecord`] from an injected random source.
#[derive(Debug, Clone)]
pub struct RecordGenerator<R = StdRng> {
    config: GeneratorConfig,
    rng: R,
}

impl RecordGenerator<StdRng> {
    /// Creates a reproducible generator seeded with `seed`.
    pub fn seeded(config: GeneratorConfig, seed: u64) -> Result<Self> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    /// Creates a generator seeded from operating system entropy.
    pub fn from_entropy(config: GeneratorConfig) -> Result<Self> {
        Self::new(config, StdRng::from_os_rng())
    }
}

impl<R: Rng> RecordGenerator<R> {
    /// Creates a generator over the given random source.
    ///
    /// Fails with [`RosterError::Configuration`] if `config` is invalid.
    pub fn new(config: GeneratorConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    /// Returns the configuration this generator was built with.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates `n` ids.
    ///
    /// Position 0 is a letter; the remaining seven characters are distinct
    /// picks from the full alphanumeric alphabet. Ids are independent of
    /// each other and may repeat within the batch unless
    /// `enforce_unique_ids` is set.
    pub fn generate_ids(&mut self, n: usize) -> Vec<String> {
        let mut ids = Vec::with_capacity(n);

        if self.config.enforce_unique_ids {
            let mut seen = HashSet::with_capacity(n);
            while ids.len() < n {
                let id = self.draw_id();
                if seen.insert(id.clone()) {
                    ids.push(id);
                } else {
                    debug!(id = %id, "redrawing duplicate customer id");
                }
            }
        } else {
            ids.extend((0..n).map(|_| self.draw_id()));
        }

        ids
    }

    fn draw_id(&mut self) -> String {
        let mut id = String::with_capacity(ID_LENGTH);
        id.push(pick_byte(&mut self.rng, LETTERS) as char);
        for index in
            rand::seq::index::sample(&mut self.rng, ALPHANUMERIC.len(), ID_LENGTH - 1).into_iter()
        {
            id.push(ALPHANUMERIC[index] as char);
        }
        id
    }

    /// Builds one `<prefix>.<id>` name per id, preserving order.
    pub fn generate_names(&mut self, ids: &[String]) -> Vec<String> {
        let prefixes = &self.config.name_prefixes;
        ids.iter()
            .map(|id| {
                let prefix = &prefixes[self.rng.random_range(0..prefixes.len())];
                format!("{prefix}.{id}")
            })
            .collect()
    }

    /// Generates `n` mobile numbers with pairwise distinct suffixes.
    ///
    /// Fails with [`RosterError::InsufficientSpace`] if `n` exceeds
    /// [`MOBILE_SUFFIX_SPACE`].
    pub fn generate_mobiles(&mut self, n: usize) -> Result<Vec<String>> {
        let suffixes = sample_distinct(&mut self.rng, MOBILE_SUFFIX_SPACE, n)?;
        let prefix = &self.config.mobile_prefix;
        Ok(suffixes
            .into_iter()
            .map(|suffix| format!("{prefix}{suffix:08}"))
            .collect())
    }

    /// Draws `n` frequencies uniformly from the configured inclusive range.
    pub fn generate_frequencies(&mut self, n: usize) -> Vec<u32> {
        let range = self.config.frequency_min..=self.config.frequency_max;
        (0..n).map(|_| self.rng.random_range(range.clone())).collect()
    }

    /// Generates `n` complete records.
    ///
    /// Fails with [`RosterError::InsufficientSpace`] before drawing anything
    /// if `n` exceeds [`MOBILE_SUFFIX_SPACE`].
    #[instrument(skip(self))]
    pub fn generate_batch(&mut self, n: usize) -> Result<Vec<CustomerRecord>> {
        if n > MOBILE_SUFFIX_SPACE {
            return Err(RosterError::InsufficientSpace {
                requested: n,
                available: MOBILE_SUFFIX_SPACE,
            });
        }

        let ids = self.generate_ids(n);
        let names = self.generate_names(&ids);
        let mobiles = self.generate_mobiles(n)?;
        let frequencies = self.generate_frequencies(n);

        let records = assemble_records(ids, names, mobiles, frequencies)?;
        debug!(
            records = records.len(),
            unique_ids = self.config.enforce_unique_ids,
            "generated customer batch"
        );
        Ok(records)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn mobiles_are_pairwise_distinct(seed in 0_u64..10_000, n in 0_usize..500) {
            let mut generator = RecordGenerator::seeded(GeneratorConfig::default(), seed).unwrap();
            let mobiles = generator.generate_mobiles(n).unwrap();
            prop_assert_eq!(mobiles.len(), n);
            let unique: HashSet<_> = mobiles.iter().collect();
            prop_assert_eq!(unique.len(), n);
        }

        #[test]
        fn frequencies_stay_in_bounds(
            seed in 0_u64..10_000,
            n in 0_usize..500,
            min in 0_u32..10,
            span in 0_u32..10,
        ) {
            let config = GeneratorConfig::default().with_frequency_range(min, min + span);
            let mut generator = RecordGenerator::seeded(config, seed).unwrap();
            let frequencies = generator.generate_frequencies(n);
            prop_assert_eq!(frequencies.len(), n);
            prop_assert!(frequencies.iter().all(|&f| f >= min && f <= min + span));
        }

        #[test]
        fn ids_never_start_with_digit(seed in 0_u64..10_000, n in 0_usize..200) {
            let mut generator = RecordGenerator::seeded(GeneratorConfig::default(), seed).unwrap();
            for id in generator.generate_ids(n) {
                prop_assert_eq!(id.len(), ID_LENGTH);
                prop_assert!(!id.as_bytes()[0].is_ascii_digit());
            }
        }
    }
}
