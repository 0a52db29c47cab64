//! Typed entity references.

use std::borrow::Cow;
use std::fmt;

use crate::model::EntityId;

/// One participant in a link: a type name paired with an entity id.
///
/// The derived ordering compares `type_name` byte-wise first and `id`
/// numerically second. That ordering is the canonical order of a link term,
/// so field order in this struct must not change.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypedRef<'a> {
    /// The entity's type name (e.g. `post`, `page`, `event_date`).
    pub type_name: Cow<'a, str>,
    /// The entity's id.
    pub id: EntityId,
}

impl<'a> TypedRef<'a> {
    /// Creates a new typed reference.
    pub fn new(type_name: impl Into<Cow<'a, str>>, id: EntityId) -> Self {
        Self {
            type_name: type_name.into(),
            id,
        }
    }

    /// Returns the type name.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns a reference that borrows from `self`.
    pub fn as_borrowed(&self) -> TypedRef<'_> {
        TypedRef {
            type_name: Cow::Borrowed(&self.type_name),
            id: self.id,
        }
    }

    /// Detaches the reference from any borrowed type name.
    pub fn into_owned(self) -> TypedRef<'static> {
        TypedRef {
            type_name: Cow::Owned(self.type_name.into_owned()),
            id: self.id,
        }
    }

    /// Appends this reference's term segment (`{type_name}{id}`) to `out`.
    pub(crate) fn write_segment(&self, out: &mut String) {
        out.push_str(&self.type_name);
        out.push_str(&self.id.to_string());
    }
}

impl fmt::Display for TypedRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.type_name, self.id)
    }
}

/// An entity as handed to the link layer: either a bare id still to be
/// looked up, or a reference the caller already resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityRef<'a> {
    Identifier(EntityId),
    Resolved(TypedRef<'a>),
}

impl EntityRef<'_> {
    /// Returns the entity id carried by either variant.
    pub fn id(&self) -> EntityId {
        match self {
            EntityRef::Identifier(id) => *id,
            EntityRef::Resolved(r) => r.id,
        }
    }
}

impl From<EntityId> for EntityRef<'_> {
    fn from(id: EntityId) -> Self {
        EntityRef::Identifier(id)
    }
}

impl<'a> From<TypedRef<'a>> for EntityRef<'a> {
    fn from(r: TypedRef<'a>) -> Self {
        EntityRef::Resolved(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entity_id;

    fn id(raw: u64) -> EntityId {
        entity_id(raw).unwrap()
    }

    #[test]
    fn test_ordering_by_type_then_id() {
        let mut refs = vec![
            TypedRef::new("post", id(15)),
            TypedRef::new("page", id(12)),
            TypedRef::new("post", id(2)),
        ];
        refs.sort();
        let rendered: Vec<String> = refs.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["page12", "post2", "post15"]);
    }

    #[test]
    fn test_ordering_is_bytewise() {
        // '_' (0x5F) sorts after 'Z' (0x5A) and before 'a' (0x61)
        let upper = TypedRef::new("Zed", id(1));
        let underscore = TypedRef::new("_x", id(1));
        let lower = TypedRef::new("alpha", id(1));
        assert!(upper < underscore);
        assert!(underscore < lower);
    }

    #[test]
    fn test_ids_compare_numerically() {
        assert!(TypedRef::new("post", id(9)) < TypedRef::new("post", id(10)));
    }

    #[test]
    fn test_entity_ref_id() {
        let bare = EntityRef::from(id(3));
        let resolved = EntityRef::from(TypedRef::new("page", id(4)));
        assert_eq!(bare.id().get(), 3);
        assert_eq!(resolved.id().get(), 4);
    }

    #[test]
    fn test_into_owned_keeps_value() {
        let name = String::from("event");
        let borrowed = TypedRef::new(name.as_str(), id(7));
        let owned = borrowed.clone().into_owned();
        assert_eq!(borrowed, owned);
    }
}
