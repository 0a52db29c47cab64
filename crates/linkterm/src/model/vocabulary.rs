//! Type vocabularies.
//!
//! A vocabulary is the set of type names a decode is allowed to recognize.
//! Callers build one explicitly (usually from a [`TypeRegistry`]) and pass it
//! into every decode; there is no process-wide registry.
//!
//! [`TypeRegistry`]: crate::store::TypeRegistry

use std::cmp::Reverse;

use crate::error::VocabularyError;
use crate::validate::validate_type_name;

/// An insertion-ordered set of distinct, non-empty type names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeVocabulary {
    names: Vec<String>,
}

impl TypeVocabulary {
    /// Creates an empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a vocabulary from a list of names, skipping duplicates.
    ///
    /// Fails on the first name rejected by [`validate_type_name`].
    pub fn from_names<I, S>(names: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vocabulary = Self::new();
        for name in names {
            vocabulary.insert(name)?;
        }
        Ok(vocabulary)
    }

    /// Adds a type name. Returns `Ok(false)` if it was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> Result<bool, VocabularyError> {
        let name = name.into();
        validate_type_name(&name)?;
        if self.contains(&name) {
            return Ok(false);
        }
        self.names.push(name);
        Ok(true)
    }

    /// Returns true if the vocabulary holds `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Number of type names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the vocabulary holds no names.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Returns the names in decode order: longest first, ties in insertion
    /// order.
    ///
    /// Trying longer names first keeps a name such as `event_date` from
    /// being split apart by a shorter name it contains (`event`).
    pub fn by_length_desc(&self) -> Vec<&str> {
        let mut ordered: Vec<&str> = self.iter().collect();
        // sort_by_key is stable, which keeps ties in insertion order
        ordered.sort_by_key(|name| Reverse(name.len()));
        ordered
    }

    /// Returns a vocabulary holding the names of both, `self` first.
    pub fn union(&self, other: &TypeVocabulary) -> TypeVocabulary {
        let mut merged = self.clone();
        for name in other.iter() {
            if !merged.contains(name) {
                merged.names.push(name.to_string());
            }
        }
        merged
    }

    /// Keeps only the names accepted by `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.names.retain(|name| keep(name));
    }
}
