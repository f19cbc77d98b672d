//! Short code generation.
//!
//! A short code is the base-62 form of the low 48 bits of a random v4 UUID.
//! The code space is 2^48; collisions are unlikely at realistic volumes but
//! not impossible, so stores enforce uniqueness and callers retry on conflict.

use uuid::Uuid;

use crate::utils::base62;

/// Number of identifier bits kept in a short code.
pub const SHORT_CODE_BITS: u32 = 48;

const SHORT_CODE_MASK: u128 = (1 << SHORT_CODE_BITS) - 1;

/// Longest possible code for [`SHORT_CODE_BITS`] bits of entropy.
pub const MAX_SHORT_CODE_LENGTH: usize = 9;

/// Derives the short code for a record identifier.
pub fn short_code_for(id: &Uuid) -> String {
    let masked = (id.as_u128() & SHORT_CODE_MASK) as u64;
    base62::encode(masked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_short_code_is_deterministic() {
        let id = Uuid::new_v4();
        assert_eq!(short_code_for(&id), short_code_for(&id));
    }

    #[test]
    fn test_short_code_uses_low_bits_only() {
        let low = Uuid::from_u128(0x0000_0000_0000_0000_0000_0000_0000_003e);
        let high = Uuid::from_u128(0xffff_ffff_ffff_ffff_ffff_0000_0000_003e);
        assert_eq!(short_code_for(&low), "10");
        assert_eq!(short_code_for(&high), "10");
    }

    #[test]
    fn test_short_code_is_url_safe_and_bounded() {
        for _ in 0..1000 {
            let code = short_code_for(&Uuid::new_v4());
            assert!(!code.is_empty());
            assert!(code.len() <= MAX_SHORT_CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_short_codes_are_unique() {
        let codes: HashSet<_> = (0..1000).map(|_| short_code_for(&Uuid::new_v4())).collect();
        assert_eq!(codes.len(), 1000);
    }
}
