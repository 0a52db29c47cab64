//! Data model types for link terms.
//!
//! This module contains the core types:
//! - Identifiers (positive integers)
//! - Typed references and entity references
//! - Relation sets and tokens
//! - Type vocabularies

pub mod id;
pub mod relation;
pub mod typed_ref;
pub mod vocabulary;

pub use id::{entity_id, is_digits, parse_entity_id, EntityId};
pub use relation::{RelationSet, Token};
pub use typed_ref::{EntityRef, TypedRef};
pub use vocabulary::TypeVocabulary;
