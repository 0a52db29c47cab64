//! Adding and reading links through a host store.
//!
//! [`Linker`] composes the codec with the store collaborators: it resolves
//! entities, encodes the link term, attaches it to every participant, and
//! decodes attached terms back into related entities.

use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use crate::codec::{decode_token, decode_token_with_registry};
use crate::error::LinkError;
use crate::limits::MAX_TOKEN_LEN;
use crate::model::{EntityId, EntityRef, RelationSet, Token, TypeVocabulary, TypedRef};
use crate::store::{EntityResolver, TokenStore, TypeRegistry};
use crate::validate::check_round_trip;

/// Options for [`Linker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkOptions {
    /// Refuse to attach terms longer than this. `None` disables the check.
    pub max_token_len: Option<usize>,
    /// Always decode with the origin entity's own type added to the
    /// requested types.
    pub include_origin_type: bool,
    /// Before attaching, check that the term decodes back to its
    /// participants under the registry's full vocabulary.
    pub verify_round_trip: bool,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            max_token_len: Some(MAX_TOKEN_LEN),
            include_origin_type: true,
            verify_round_trip: false,
        }
    }
}

impl LinkOptions {
    /// Options that also verify every new term round-trips.
    pub fn strict() -> Self {
        Self {
            verify_round_trip: true,
            ..Self::default()
        }
    }
}

/// Links entities by attaching a shared term to each of them.
#[derive(Debug, Clone)]
pub struct Linker<S> {
    store: S,
    options: LinkOptions,
}

impl<S> Linker<S>
where
    S: EntityResolver + TokenStore + TypeRegistry,
{
    /// Creates a linker with default options.
    pub fn new(store: S) -> Self {
        Self::with_options(store, LinkOptions::default())
    }

    pub fn with_options(store: S, options: LinkOptions) -> Self {
        Self { store, options }
    }

    pub fn options(&self) -> &LinkOptions {
        &self.options
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Links two or more entities.
    ///
    /// Entities that cannot be resolved are skipped. If fewer than two
    /// distinct participants remain, nothing is written and `Ok(None)` is
    /// returned. Otherwise the term is attached to every participant and
    /// returned.
    ///
    /// Attaching is not atomic: if the store fails part way, some
    /// participants carry the term and others do not. Calling `add_link`
    /// again with the same entities completes the link, since attaching is
    /// idempotent.
    pub fn add_link(&mut self, entities: &[EntityRef<'_>]) -> Result<Option<Token>, LinkError> {
        let participants = entities.iter().filter_map(|entity| {
            let resolved = self.store.resolve(entity.id());
            if resolved.is_none() {
                debug!(id = entity.id().get(), "skipping unresolvable entity");
            }
            resolved
        });

        let Some(set) = RelationSet::new(participants) else {
            debug!(requested = entities.len(), "fewer than two participants, nothing linked");
            return Ok(None);
        };

        let token = set.token();
        if let Some(max) = self.options.max_token_len {
            if token.len() > max {
                warn!(len = token.len(), max, "link term too long");
                return Err(LinkError::TokenTooLong {
                    len: token.len(),
                    max,
                });
            }
        }
        if self.options.verify_round_trip {
            check_round_trip(&set, &self.store.known_type_names())?;
        }

        for member in set.iter() {
            if let Err(e) = self.store.attach_token(member.id, &token) {
                warn!(
                    token = %token,
                    id = member.id.get(),
                    error = %e,
                    "failed to attach link term"
                );
                return Err(e.into());
            }
        }

        debug!(token = %token, participants = set.len(), "link attached");
        Ok(Some(token))
    }

    /// Returns the ids of entities linked to `entity`.
    ///
    /// Terms are decoded with `types` plus the entity's own type (see
    /// [`LinkOptions::include_origin_type`]); an empty `types` list means the
    /// entity's own type only. Malformed names in `types` (empty or
    /// all-digit) are ignored. Ids are merged across all attached terms in
    /// attachment order, repeats removed, and `entity` itself left out.
    pub fn related(
        &self,
        entity: EntityRef<'_>,
        types: &[&str],
    ) -> Result<Vec<EntityId>, LinkError> {
        let origin = self.resolve_origin(&entity)?;
        let vocabulary = self.lookup_vocabulary(&origin, types)?;

        let mut seen = FxHashSet::default();
        let mut related = Vec::new();
        for token in self.store.list_tokens(origin.id)? {
            for r in decode_token(token.as_str(), &vocabulary) {
                if r.id != origin.id && seen.insert(r.id) {
                    related.push(r.id);
                }
            }
        }
        Ok(related)
    }

    /// Like [`related`](Self::related), but keeps the type of each linked
    /// entity.
    pub fn related_refs(
        &self,
        entity: EntityRef<'_>,
        types: &[&str],
    ) -> Result<Vec<TypedRef<'static>>, LinkError> {
        let origin = self.resolve_origin(&entity)?;
        let vocabulary = self.lookup_vocabulary(&origin, types)?;

        let mut seen = FxHashSet::default();
        let mut related = Vec::new();
        for token in self.store.list_tokens(origin.id)? {
            for r in decode_token(token.as_str(), &vocabulary) {
                if r.id != origin.id && seen.insert(r.clone()) {
                    related.push(r.into_owned());
                }
            }
        }
        Ok(related)
    }

    /// Returns every link `entity` takes part in, decoded with all known
    /// type names.
    ///
    /// Attached terms that no longer decode to a link (e.g. a participant's
    /// type was unregistered) are skipped.
    pub fn links(&self, entity: EntityRef<'_>) -> Result<Vec<RelationSet<'static>>, LinkError> {
        let origin = self.resolve_origin(&entity)?;
        let mut links = Vec::new();
        for token in self.store.list_tokens(origin.id)? {
            let refs =
                decode_token_with_registry(token.as_str(), &TypeVocabulary::new(), &self.store);
            match RelationSet::new(refs) {
                Some(set) => links.push(set),
                None => warn!(
                    token = %token,
                    id = origin.id.get(),
                    "attached term does not decode to a link"
                ),
            }
        }
        Ok(links)
    }

    fn resolve_origin(&self, entity: &EntityRef<'_>) -> Result<TypedRef<'static>, LinkError> {
        self.store
            .resolve(entity.id())
            .ok_or(LinkError::UnresolvedEntity { id: entity.id() })
    }

    fn lookup_vocabulary(
        &self,
        origin: &TypedRef<'_>,
        types: &[&str],
    ) -> Result<TypeVocabulary, LinkError> {
        let mut vocabulary = TypeVocabulary::new();
        for name in types {
            if let Err(e) = vocabulary.insert(*name) {
                debug!(type_name = *name, error = %e, "ignoring malformed type name");
            }
        }
        if self.options.include_origin_type || vocabulary.is_empty() {
            vocabulary.insert(origin.type_name())?;
        }
        Ok(vocabulary)
    }
}
