//! Collaborators that hold entities and their link terms.
//!
//! The codec never touches storage. The link layer reaches the host through
//! these three traits, which a host integration implements over its own
//! persistence. [`MemoryStore`] implements all three in memory.

pub mod memory;

pub use memory::MemoryStore;

use crate::error::StoreError;
use crate::model::{EntityId, Token, TypeVocabulary, TypedRef};

/// Looks up the type of an entity by id.
pub trait EntityResolver {
    /// Returns the entity's typed reference, or `None` if no such entity
    /// exists.
    fn resolve(&self, id: EntityId) -> Option<TypedRef<'static>>;
}

/// Attaches link terms to entities and lists them back.
pub trait TokenStore {
    /// Attaches `token` to the entity. Attaching a term the entity already
    /// carries is a no-op; existing terms are never removed.
    fn attach_token(&mut self, id: EntityId, token: &Token) -> Result<(), StoreError>;

    /// Lists every term attached to the entity, in attachment order.
    fn list_tokens(&self, id: EntityId) -> Result<Vec<Token>, StoreError>;
}

/// Source of the full set of registered type names.
pub trait TypeRegistry {
    fn known_type_names(&self) -> TypeVocabulary;
}

impl TypeRegistry for TypeVocabulary {
    fn known_type_names(&self) -> TypeVocabulary {
        self.clone()
    }
}
