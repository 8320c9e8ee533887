//! Sampling helpers shared by the field generators.

use crate::prelude::*;
use rand::Rng;

/// Uppercase and lowercase ASCII letters.
pub const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Letters followed by the ten ASCII digits.
pub const ALPHANUMERIC: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Draws `amount` distinct indices from `[0, space)` in random order.
///
/// Fails with [`RosterError::InsufficientSpace`] when `amount > space`
/// instead of panicking the way the underlying sampler would.
pub fn sample_distinct<R: Rng + ?Sized>(
    rng: &mut R,
    space: usize,
    amount: usize,
) -> Result<Vec<usize>> {
    if amount > space {
        return Err(RosterError::InsufficientSpace {
            requested: amount,
            available: space,
        });
    }
    Ok(rand::seq::index::sample(rng, space, amount).into_vec())
}

/// Picks one byte uniformly from `alphabet`.
///
/// `alphabet` must be non-empty.
pub fn pick_byte<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8]) -> u8 {
    alphabet[rng.random_range(0..alphabet.len())]
}
