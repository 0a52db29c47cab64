//! Link term decoding.
//!
//! A term such as `event7event_date3` carries no delimiters, so segment
//! boundaries are recovered from a vocabulary of type names:
//!
//! 1. Type names are tried longest first (ties in vocabulary order).
//! 2. The working set starts as the whole term.
//! 3. Each fragment in the working set is split on every occurrence of the
//!    current type name. The leading digit run after an occurrence is the id
//!    of an entity of that type; any text after the digits, and any text
//!    ahead of the first occurrence, is carried to the next round.
//! 4. Whatever is still unclaimed after the last type name is dropped.
//!
//! Decoding never fails. Segments whose type name is missing from the
//! vocabulary are left out of the result.

use crate::model::{is_digits, parse_entity_id, TypeVocabulary, TypedRef};
use crate::model::id::leading_digits_len;
use crate::store::TypeRegistry;

/// A digit run that follows a type name but is not a positive 64-bit id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RejectedId<'t, 'v> {
    pub type_name: &'v str,
    pub digits: &'t str,
}

/// Everything a decode recovered, plus what it had to drop.
///
/// `'t` borrows from the term, `'v` from the vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeReport<'t, 'v> {
    /// Recovered participants in canonical order. May contain repeats if the
    /// term itself repeats a segment.
    pub refs: Vec<TypedRef<'v>>,
    /// Parts of the term no type name in the vocabulary claimed.
    pub unresolved: Vec<&'t str>,
    /// Digit runs that could not be read as ids (zero or overflowing).
    pub rejected: Vec<RejectedId<'t, 'v>>,
}

impl DecodeReport<'_, '_> {
    /// Returns true if every byte of the term was accounted for.
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty() && self.rejected.is_empty()
    }
}

/// Decodes a link term into the participants whose type names appear in
/// `vocabulary`.
///
/// An empty vocabulary recognizes nothing and yields an empty result; use
/// [`decode_token_with_registry`] to fall back to every known type.
///
/// ```rust
/// use linkterm::{decode_token, TypeVocabulary};
///
/// let vocabulary = TypeVocabulary::from_names(["post"]).unwrap();
/// let refs = decode_token("post12post15", &vocabulary);
/// let ids: Vec<u64> = refs.iter().map(|r| r.id.get()).collect();
/// assert_eq!(ids, [12, 15]);
/// ```
pub fn decode_token<'v>(token: &str, vocabulary: &'v TypeVocabulary) -> Vec<TypedRef<'v>> {
    decode_report(token, vocabulary).refs
}

/// Decodes a link term, using every type name known to `registry` when
/// `vocabulary` is empty.
pub fn decode_token_with_registry<R>(
    token: &str,
    vocabulary: &TypeVocabulary,
    registry: &R,
) -> Vec<TypedRef<'static>>
where
    R: TypeRegistry + ?Sized,
{
    if vocabulary.is_empty() {
        let known = registry.known_type_names();
        return owned(decode_token(token, &known));
    }
    owned(decode_token(token, vocabulary))
}

/// Decodes a link term and reports what was dropped along the way.
pub fn decode_report<'t, 'v>(
    token: &'t str,
    vocabulary: &'v TypeVocabulary,
) -> DecodeReport<'t, 'v> {
    let mut report = DecodeReport::default();
    let mut fragments: Vec<&'t str> = if token.is_empty() {
        Vec::new()
    } else {
        vec![token]
    };

    for type_name in vocabulary.by_length_desc() {
        if fragments.is_empty() {
            break;
        }
        let mut carried = Vec::with_capacity(fragments.len());
        for fragment in fragments {
            split_fragment(fragment, type_name, &mut report, &mut carried);
        }
        fragments = carried;
    }

    report.unresolved.extend(fragments);
    report.refs.sort();
    report
}

/// Splits one fragment on `type_name`, recording ids bound to it and
/// carrying leftover text.
fn split_fragment<'t, 'v>(
    fragment: &'t str,
    type_name: &'v str,
    report: &mut DecodeReport<'t, 'v>,
    carried: &mut Vec<&'t str>,
) {
    let mut pieces = fragment.split(type_name);

    // Text ahead of the first occurrence belongs to another type name. Bare
    // digits there have lost their type name and cannot be attributed.
    if let Some(head) = pieces.next() {
        if is_digits(head) {
            report.unresolved.push(head);
        } else if !head.is_empty() {
            carried.push(head);
        }
    }

    for piece in pieces {
        let (digits, rest) = piece.split_at(leading_digits_len(piece));
        if !digits.is_empty() {
            match parse_entity_id(digits) {
                Some(id) => report.refs.push(TypedRef::new(type_name, id)),
                None => report.rejected.push(RejectedId { type_name, digits }),
            }
        }
        if !rest.is_empty() {
            carried.push(rest);
        }
    }
}

fn owned(refs: Vec<TypedRef<'_>>) -> Vec<TypedRef<'static>> {
    refs.into_iter().map(TypedRef::into_owned).collect()
}
