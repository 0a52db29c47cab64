//! Link term encoding.

use crate::model::{RelationSet, Token, TypedRef};

/// Encodes a collection of participants into a link term.
///
/// Participants may arrive in any order; they are sorted by type name
/// (byte-wise) and then by id, so the same participants always produce the
/// same term. Repeated participants count once.
///
/// Returns `None` when fewer than two distinct participants remain: a link
/// needs at least two ends.
///
/// ```rust
/// use linkterm::{encode_token, entity_id, TypedRef};
///
/// let post = |n| TypedRef::new("post", entity_id(n).unwrap());
/// let token = encode_token([post(15), post(12)]).unwrap();
/// assert_eq!(token.as_str(), "post12post15");
///
/// assert!(encode_token([post(12)]).is_none());
/// ```
pub fn encode_token<'a, I>(refs: I) -> Option<Token>
where
    I: IntoIterator<Item = TypedRef<'a>>,
{
    RelationSet::new(refs).map(|set| set.token())
}
