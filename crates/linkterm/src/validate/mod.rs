//! Strict validation for link terms and vocabularies.
//!
//! The codec is tolerant: it drops what it cannot attribute and never
//! fails. The checks here surface those silent cases for callers that want
//! to know about them, e.g. before trusting a stored term or when a new
//! type name is registered.

use crate::codec::{decode_report, decode_token};
use crate::error::{ValidationError, VocabularyError};
use crate::limits::{MAX_TOKEN_LEN, MAX_TYPE_NAME_LEN};
use crate::model::{is_digits, RelationSet, TypeVocabulary};

/// A property of a vocabulary that can make decoding ambiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabularyIssue {
    /// The name contains digits, so the boundary between it and an id (or
    /// between an id and the next name) can shift.
    ContainsDigit { name: String },
    /// The name is wider than the host's type key column.
    TooLong { name: String, len: usize, max: usize },
    /// `shorter` occurs inside `longer`. Decoding resolves this only while
    /// both names are in the vocabulary; with `longer` filtered out, the
    /// digits of a `longer` segment can be read as a `shorter` id.
    Overlapping { shorter: String, longer: String },
}

/// Checks that a type name can be used in a vocabulary at all.
///
/// Empty names would split a term between every byte and all-digit names
/// are indistinguishable from ids.
pub fn validate_type_name(name: &str) -> Result<(), VocabularyError> {
    if name.is_empty() {
        return Err(VocabularyError::EmptyTypeName);
    }
    if is_digits(name) {
        return Err(VocabularyError::NumericTypeName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Lists the properties of `vocabulary` that can make decoding ambiguous.
///
/// None of these prevent decoding; they mark the names for which a term may
/// decode differently from how it was built.
pub fn validate_vocabulary(vocabulary: &TypeVocabulary) -> Vec<VocabularyIssue> {
    let mut issues = Vec::new();
    let names: Vec<&str> = vocabulary.iter().collect();

    for name in &names {
        if name.bytes().any(|b| b.is_ascii_digit()) {
            issues.push(VocabularyIssue::ContainsDigit {
                name: name.to_string(),
            });
        }
        if name.len() > MAX_TYPE_NAME_LEN {
            issues.push(VocabularyIssue::TooLong {
                name: name.to_string(),
                len: name.len(),
                max: MAX_TYPE_NAME_LEN,
            });
        }
    }

    for (i, a) in names.iter().enumerate() {
        for b in &names[i + 1..] {
            let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };
            if longer.contains(*shorter) {
                issues.push(VocabularyIssue::Overlapping {
                    shorter: shorter.to_string(),
                    longer: longer.to_string(),
                });
            }
        }
    }

    issues
}

/// Strictly decodes a stored term.
///
/// Succeeds only if the term fits the host limit, every part of it is
/// claimed by a type name in `vocabulary`, every id is a positive 64-bit
/// integer, it names at least two distinct participants, and it is exactly
/// the term those participants encode to.
pub fn validate_token<'v>(
    token: &str,
    vocabulary: &'v TypeVocabulary,
) -> Result<RelationSet<'v>, ValidationError> {
    if token.len() > MAX_TOKEN_LEN {
        return Err(ValidationError::TokenTooLong {
            len: token.len(),
            max: MAX_TOKEN_LEN,
        });
    }

    let report = decode_report(token, vocabulary);
    if let Some(rejected) = report.rejected.first() {
        return Err(ValidationError::InvalidIdentifier {
            type_name: rejected.type_name.to_string(),
            digits: rejected.digits.to_string(),
        });
    }
    if let Some(fragment) = report.unresolved.first() {
        return Err(ValidationError::UnresolvedFragment {
            fragment: fragment.to_string(),
        });
    }

    // refs come back sorted, so repeats are adjacent
    if let Some(pair) = report.refs.windows(2).find(|w| w[0] == w[1]) {
        return Err(ValidationError::DuplicateParticipant {
            type_name: pair[0].type_name.to_string(),
            id: pair[0].id,
        });
    }

    let count = report.refs.len();
    let set = RelationSet::new(report.refs)
        .ok_or(ValidationError::InsufficientParticipants { count })?;

    let expected = set.token();
    if expected.as_str() != token {
        return Err(ValidationError::NonCanonical {
            expected: expected.into_string(),
        });
    }
    Ok(set)
}

/// Checks that the term for `set` decodes back to exactly `set` under
/// `vocabulary`.
///
/// This catches the vocabulary-dependent collisions that the codec does not
/// defend against, such as digit-bearing type names.
pub fn check_round_trip(
    set: &RelationSet<'_>,
    vocabulary: &TypeVocabulary,
) -> Result<(), ValidationError> {
    let token = set.token();
    let decoded = decode_token(token.as_str(), vocabulary);
    if decoded.as_slice() != set.members() {
        return Err(ValidationError::AmbiguousToken {
            token: token.into_string(),
        });
    }
    Ok(())
}
