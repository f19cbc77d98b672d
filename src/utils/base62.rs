//! Base-62 encoding over the alphabet `0-9A-Za-z`.

const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const BASE: u64 = ALPHABET.len() as u64;

/// Encodes `value` most-significant digit first, without padding.
///
/// `0` encodes to `"0"`; any other value has no leading zero digit.
pub fn encode(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    // u64::MAX needs 11 digits
    let mut digits = Vec::with_capacity(11);
    while value > 0 {
        digits.push(ALPHABET[(value % BASE) as usize]);
        value /= BASE;
    }

    digits.iter().rev().map(|&b| char::from(b)).collect()
}
