//! linkterm: many-to-many entity links stored as a single term.
//!
//! A link between two or more entities (posts of any type) is written as one
//! opaque string, the link term, and attached to every participant. Nothing
//! else is stored: no join table, no link records. Reading the links of an
//! entity means decoding the terms attached to it.
//!
//! # Term format
//!
//! A term concatenates `{type}{id}` for each participant, sorted by type
//! name (byte-wise) and then by id, with no separators:
//!
//! ```text
//! page12post15
//! event7event_date3
//! ```
//!
//! Segment boundaries are recovered from a vocabulary of type names, tried
//! longest first, so `event_date` is never split apart by `event`.
//!
//! # Quick Start
//!
//! ```rust
//! use linkterm::{decode_token, encode_token, entity_id, TypeVocabulary, TypedRef};
//!
//! let id = |n| entity_id(n).unwrap();
//!
//! let token = encode_token([
//!     TypedRef::new("post", id(5)),
//!     TypedRef::new("page", id(9)),
//! ])
//! .unwrap();
//! assert_eq!(token.as_str(), "page9post5");
//!
//! let vocabulary = TypeVocabulary::from_names(["post", "page"]).unwrap();
//! let refs = decode_token(token.as_str(), &vocabulary);
//! assert_eq!(refs, [TypedRef::new("page", id(9)), TypedRef::new("post", id(5))]);
//! ```
//!
//! With a host store, [`Linker`] does the resolving, attaching and lookup:
//!
//! ```rust
//! use linkterm::{entity_id, Linker, MemoryStore};
//!
//! let id = |n| entity_id(n).unwrap();
//!
//! let mut store = MemoryStore::new();
//! store.insert_entity(id(5), "post").unwrap();
//! store.insert_entity(id(9), "page").unwrap();
//!
//! let mut linker = Linker::new(store);
//! linker.add_link(&[id(5).into(), id(9).into()]).unwrap();
//! assert_eq!(linker.related(id(5).into(), &["page"]).unwrap(), [id(9)]);
//! ```
//!
//! # Modules
//!
//! - [`model`]: Core data types (TypedRef, RelationSet, Token, TypeVocabulary)
//! - [`codec`]: Term encoding and decoding
//! - [`validate`]: Strict checks for terms and vocabularies
//! - [`store`]: Host collaborator traits and an in-memory store
//! - [`link`]: Adding and reading links through a store
//! - [`builtin`]: Type names every host registers
//! - [`error`]: Error types
//! - [`limits`]: Host size limits
//!
//! # Failure model
//!
//! The codec never fails. Encoding fewer than two participants yields
//! `None`; decoding drops whatever the vocabulary cannot attribute. An empty
//! vocabulary recognizes nothing in [`decode_token`]; to fall back to every
//! type the host knows, call [`decode_token_with_registry`]. Use
//! [`validate_token`] and [`validate_vocabulary`] to surface those cases.

pub mod builtin;
pub mod codec;
pub mod error;
pub mod limits;
pub mod link;
pub mod model;
pub mod store;
pub mod validate;

// Re-export commonly used types at crate root
pub use codec::{
    decode_report, decode_token, decode_token_with_registry, encode_token, DecodeReport,
};
pub use error::{ErrorCode, LinkError, StoreError, ValidationError, VocabularyError};
pub use limits::{LINK_TAXONOMY, MAX_TOKEN_LEN, MAX_TYPE_NAME_LEN};
pub use link::{LinkOptions, Linker};
pub use model::{
    entity_id, parse_entity_id, EntityId, EntityRef, RelationSet, Token, TypeVocabulary, TypedRef,
};
pub use store::{EntityResolver, MemoryStore, TokenStore, TypeRegistry};
pub use validate::{
    check_round_trip, validate_token, validate_type_name, validate_vocabulary, VocabularyIssue,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
