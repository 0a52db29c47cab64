//! Error types for link terms.
//!
//! The codec itself never fails: encoding reports "no link" as `None` and
//! decoding degrades to a partial result. The errors here belong to the
//! strict validation layer, the vocabulary builder, and the store
//! integration.

use thiserror::Error;

use crate::model::EntityId;

/// Stable codes for strict token validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// L001: Token exceeds the host term length
    TokenTooLong,
    /// L002: Part of the token matched no type name
    UnresolvedFragment,
    /// L003: Digit run is not a positive 64-bit id
    InvalidIdentifier,
    /// L004: Fewer than two distinct participants
    InsufficientParticipants,
    /// L005: Same participant listed twice
    DuplicateParticipant,
    /// L006: Token is not in canonical order
    NonCanonical,
    /// L007: Token does not decode back to the participants it was built from
    AmbiguousToken,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "L001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::TokenTooLong => "L001",
            ErrorCode::UnresolvedFragment => "L002",
            ErrorCode::InvalidIdentifier => "L003",
            ErrorCode::InsufficientParticipants => "L004",
            ErrorCode::DuplicateParticipant => "L005",
            ErrorCode::NonCanonical => "L006",
            ErrorCode::AmbiguousToken => "L007",
        }
    }
}

/// A type name that cannot take part in a vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabularyError {
    #[error("type name is empty")]
    EmptyTypeName,

    #[error("type name {name:?} is made only of digits")]
    NumericTypeName { name: String },
}

/// Strict validation failure for a stored token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("[L001] token length {len} exceeds maximum {max}")]
    TokenTooLong { len: usize, max: usize },

    #[error("[L002] fragment {fragment:?} matches no type name in the vocabulary")]
    UnresolvedFragment { fragment: String },

    #[error("[L003] {digits:?} after type {type_name:?} is not a positive 64-bit id")]
    InvalidIdentifier { type_name: String, digits: String },

    #[error("[L004] token names {count} distinct participants, at least 2 required")]
    InsufficientParticipants { count: usize },

    #[error("[L005] participant {type_name}{id} appears more than once")]
    DuplicateParticipant { type_name: String, id: EntityId },

    #[error("[L006] token is not canonical, expected {expected:?}")]
    NonCanonical { expected: String },

    #[error("[L007] token {token:?} does not decode back to its participants")]
    AmbiguousToken { token: String },
}

impl ValidationError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::TokenTooLong { .. } => ErrorCode::TokenTooLong,
            ValidationError::UnresolvedFragment { .. } => ErrorCode::UnresolvedFragment,
            ValidationError::InvalidIdentifier { .. } => ErrorCode::InvalidIdentifier,
            ValidationError::InsufficientParticipants { .. } => {
                ErrorCode::InsufficientParticipants
            }
            ValidationError::DuplicateParticipant { .. } => ErrorCode::DuplicateParticipant,
            ValidationError::NonCanonical { .. } => ErrorCode::NonCanonical,
            ValidationError::AmbiguousToken { .. } => ErrorCode::AmbiguousToken,
        }
    }
}

/// Failure reported by a storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("entity {id} does not exist")]
    UnknownEntity { id: EntityId },

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Failure while adding or reading links.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("entity {id} could not be resolved")]
    UnresolvedEntity { id: EntityId },

    #[error("link term length {len} exceeds maximum {max}")]
    TokenTooLong { len: usize, max: usize },

    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_codes() {
        let err = ValidationError::TokenTooLong { len: 300, max: 200 };
        assert_eq!(err.code(), ErrorCode::TokenTooLong);
        assert_eq!(err.code().code(), "L001");
        assert!(err.to_string().starts_with("[L001]"));

        let err = ValidationError::NonCanonical {
            expected: "page1post2".to_string(),
        };
        assert_eq!(err.code().code(), "L006");
    }

    #[test]
    fn test_link_error_from_store() {
        let err: LinkError = StoreError::Unavailable("offline".to_string()).into();
        assert_eq!(err.to_string(), "store unavailable: offline");
    }
}
