//! Record identifier generation.
//!
//! An id is the current time in milliseconds followed by a random suffix, both in
//! base 36. No counter is kept and nothing is persisted: the only inputs are the
//! system clock and a thread-local random source. Two ids generated in the same
//! millisecond differ only by their suffix, so a collision needs two equal
//! 11-character random draws (36^11 ≈ 1.3e17 possibilities).

use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const RANDOM_LEN: usize = 11;

/// Generates a new opaque record id.
pub fn generate_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();

    let mut id = to_base36(millis);
    let mut rng = rand::rng();
    for _ in 0..RANDOM_LEN {
        id.push(char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]));
    }
    id
}

fn to_base36(mut value: u128) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        // value % 36 < 36, so the index is always in range
        digits.push(ALPHABET[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}
