//! In-memory entity and term store.

use rustc_hash::FxHashMap;

use crate::error::{StoreError, VocabularyError};
use crate::model::{EntityId, Token, TypeVocabulary, TypedRef};
use crate::store::{EntityResolver, TokenStore, TypeRegistry};

/// Keeps entities, their attached terms, and the registered type names in
/// memory.
///
/// Uses FxHashMap for faster hashing of integer ids.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    types: TypeVocabulary,
    entities: FxHashMap<EntityId, String>,
    tokens: FxHashMap<EntityId, Vec<Token>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with the given type names already registered.
    pub fn with_types(types: TypeVocabulary) -> Self {
        Self {
            types,
            ..Self::default()
        }
    }

    /// Registers a type name. Returns `Ok(false)` if it was already known.
    pub fn register_type(&mut self, name: &str) -> Result<bool, VocabularyError> {
        self.types.insert(name)
    }

    /// Adds or replaces an entity, registering its type if needed.
    pub fn insert_entity(&mut self, id: EntityId, type_name: &str) -> Result<(), VocabularyError> {
        self.types.insert(type_name)?;
        self.entities.insert(id, type_name.to_string());
        Ok(())
    }

    /// Removes an entity and every term attached to it.
    pub fn remove_entity(&mut self, id: EntityId) -> bool {
        self.tokens.remove(&id);
        self.entities.remove(&id).is_some()
    }

    /// Number of entities.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }
}

impl EntityResolver for MemoryStore {
    fn resolve(&self, id: EntityId) -> Option<TypedRef<'static>> {
        self.entities
            .get(&id)
            .map(|type_name| TypedRef::new(type_name.clone(), id))
    }
}

impl TokenStore for MemoryStore {
    fn attach_token(&mut self, id: EntityId, token: &Token) -> Result<(), StoreError> {
        if !self.entities.contains_key(&id) {
            return Err(StoreError::UnknownEntity { id });
        }
        let attached = self.tokens.entry(id).or_default();
        if !attached.contains(token) {
            attached.push(token.clone());
        }
        Ok(())
    }

    fn list_tokens(&self, id: EntityId) -> Result<Vec<Token>, StoreError> {
        if !self.entities.contains_key(&id) {
            return Err(StoreError::UnknownEntity { id });
        }
        Ok(self.tokens.get(&id).cloned().unwrap_or_default())
    }
}

impl TypeRegistry for MemoryStore {
    fn known_type_names(&self) -> TypeVocabulary {
        self.types.clone()
    }
}
