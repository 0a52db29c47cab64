//! Positive integer identifiers for linked entities.
//!
//! Every entity that takes part in a link carries a host-assigned positive
//! integer id. Zero never names an entity, so the id type is `NonZeroU64`.

use std::num::NonZeroU64;

/// A positive entity identifier.
pub type EntityId = NonZeroU64;

/// Creates an entity id from a raw integer, returning `None` for zero.
#[inline]
pub fn entity_id(raw: u64) -> Option<EntityId> {
    NonZeroU64::new(raw)
}

/// Returns true if `s` is non-empty and made only of ASCII decimal digits.
#[inline]
pub fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a decimal digit run into an entity id.
///
/// Unlike `str::parse`, this rejects signs and whitespace: only a run of
/// ASCII digits is accepted. Returns `None` for zero and for values that
/// overflow `u64`.
pub fn parse_entity_id(digits: &str) -> Option<EntityId> {
    if !is_digits(digits) {
        return None;
    }
    digits.parse::<u64>().ok().and_then(NonZeroU64::new)
}

/// Returns the byte length of the leading ASCII digit run of `s`.
#[inline]
pub(crate) fn leading_digits_len(s: &str) -> usize {
    s.bytes().take_while(|b| b.is_ascii_digit()).count()
}
