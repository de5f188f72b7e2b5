//! Deterministic id-to-alias encoding.
//!
//! Every record id maps to exactly one alias by writing the id in base 62
//! over a fixed alphabet. Digits are emitted **least-significant first**,
//! so `62` becomes `"ab"` rather than the positional `"ba"`. Existing short
//! links depend on this ordering; do not "fix" it.

/// Ordered symbol set used as base-62 digits.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

const BASE: u64 = ALPHABET.len() as u64;

/// `u64::MAX` needs 11 base-62 digits.
const MAX_ALIAS_LEN: usize = 11;

/// Errors produced by [`try_encode`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("cannot encode negative id {0}")]
    NegativeId(i64),
}

/// Encodes a non-negative id as an alias.
///
/// Total over `u64`: `0` encodes to the first alphabet symbol, never to an
/// empty string.
///
/// # Examples
///
/// ```
/// use shortly::utils::alias_encoder::encode;
///
/// assert_eq!(encode(0), "a");
/// assert_eq!(encode(1), "b");
/// assert_eq!(encode(62), "ab");
/// ```
pub fn encode(mut id: u64) -> String {
    if id == 0 {
        return char::from(ALPHABET[0]).to_string();
    }

    let mut alias = String::with_capacity(MAX_ALIAS_LEN);
    while id > 0 {
        let digit = (id % BASE) as usize;
        alias.push(char::from(ALPHABET[digit]));
        id /= BASE;
    }
    alias
}

/// Encodes a store id, rejecting values outside the encodable domain.
///
/// Store ids are signed so the unassigned sentinel fits in the same type;
/// only ids that went through allocation are valid input here.
///
/// # Errors
///
/// Returns [`EncodeError::NegativeId`] for ids below zero.
pub fn try_encode(id: i64) -> Result<String, EncodeError> {
    u64::try_from(id)
        .map(encode)
        .map_err(|_| EncodeError::NegativeId(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_encode_zero_is_first_symbol() {
        assert_eq!(encode(0), "a");
    }

    #[test]
    fn test_encode_single_digit() {
        assert_eq!(encode(1), "b");
        assert_eq!(encode(25), "z");
        assert_eq!(encode(26), "A");
        assert_eq!(encode(52), "0");
        assert_eq!(encode(61), "9");
    }

    #[test]
    fn test_encode_is_least_significant_first() {
        assert_eq!(encode(62), "ab");
        assert_eq!(encode(63), "bb");
        assert_eq!(encode(3843), "99");
        assert_eq!(encode(3844), "aab");
    }

    #[test]
    fn test_encode_reaches_reserved_route_name() {
        assert_eq!(encode(6_696_302_071), "health");
    }

    #[test]
    fn test_encode_u64_max_fits_buffer() {
        let alias = encode(u64::MAX);
        assert_eq!(alias.len(), MAX_ALIAS_LEN);
    }

    #[test]
    fn test_encode_uses_only_alphabet_symbols() {
        let alias = encode(987_654_321);
        assert!(alias.bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn test_encode_sequential_ids_are_unique() {
        let aliases: HashSet<String> = (0..20_000u64).map(encode).collect();
        assert_eq!(aliases.len(), 20_000);
    }

    #[test]
    fn test_encode_is_deterministic() {
        assert_eq!(encode(123_456), encode(123_456));
    }

    #[test]
    fn test_try_encode_accepts_non_negative() {
        assert_eq!(try_encode(0).unwrap(), "a");
        assert_eq!(try_encode(62).unwrap(), "ab");
    }

    #[test]
    fn test_try_encode_rejects_negative() {
        let err = try_encode(-1).unwrap_err();
        assert_eq!(err, EncodeError::NegativeId(-1));
        assert!(err.to_string().contains("-1"));
    }
}
