//! Relation sets and link tokens.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::model::TypedRef;

/// The participants of one link, held in canonical order.
///
/// A relation set always has at least two distinct participants, sorted by
/// type name (byte-wise) and then by id. Two sets built from the same
/// participants in any order are equal and produce the same [`Token`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelationSet<'a> {
    members: Vec<TypedRef<'a>>,
}

impl<'a> RelationSet<'a> {
    /// Minimum number of distinct participants in a link.
    pub const MIN_PARTICIPANTS: usize = 2;

    /// Builds a relation set from participants in any order.
    ///
    /// References with an empty type name are dropped, as are repeated
    /// references. Returns `None` when fewer than two distinct participants
    /// remain.
    pub fn new<I>(refs: I) -> Option<Self>
    where
        I: IntoIterator<Item = TypedRef<'a>>,
    {
        let mut members: Vec<TypedRef<'a>> = refs
            .into_iter()
            .filter(|r| !r.type_name.is_empty())
            .collect();
        members.sort();
        members.dedup();

        if members.len() < Self::MIN_PARTICIPANTS {
            return None;
        }
        Some(Self { members })
    }

    /// Returns the participants in canonical order.
    pub fn members(&self) -> &[TypedRef<'a>] {
        &self.members
    }

    /// Number of participants.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false: a relation set has at least two participants.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates participants in canonical order.
    pub fn iter(&self) -> std::slice::Iter<'_, TypedRef<'a>> {
        self.members.iter()
    }

    /// Returns true if `r` takes part in this link.
    pub fn contains(&self, r: &TypedRef<'_>) -> bool {
        self.members
            .binary_search_by(|m| m.as_borrowed().cmp(&r.as_borrowed()))
            .is_ok()
    }

    /// Renders the link term for this set.
    pub fn token(&self) -> Token {
        let mut out = String::with_capacity(self.members.len() * 12);
        for member in &self.members {
            member.write_segment(&mut out);
        }
        Token(out)
    }

    /// Detaches the set from any borrowed type names.
    pub fn into_owned(self) -> RelationSet<'static> {
        RelationSet {
            members: self.members.into_iter().map(TypedRef::into_owned).collect(),
        }
    }

    pub fn into_members(self) -> Vec<TypedRef<'a>> {
        self.members
    }
}

impl<'s, 'a> IntoIterator for &'s RelationSet<'a> {
    type Item = &'s TypedRef<'a>;
    type IntoIter = std::slice::Iter<'s, TypedRef<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

/// A link term: the canonical string form of a relation set.
///
/// The format is `{type}{id}{type}{id}...` with no separators, e.g.
/// `page12post15`. It is stored by the host as an ordinary term name, so
/// the format is frozen for compatibility with terms already written.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token(String);

impl Token {
    /// Wraps a stored term name. No validation is performed.
    pub fn new(raw: impl Into<String>) -> Self {
        Token(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Token {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Token(s.to_string()))
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{entity_id, EntityId};

    fn id(raw: u64) -> EntityId {
        entity_id(raw).unwrap()
    }

    #[test]
    fn test_relation_set_sorts_and_dedups() {
        let set = RelationSet::new([
            TypedRef::new("post", id(15)),
            TypedRef::new("page", id(12)),
            TypedRef::new("post", id(15)),
        ])
        .unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.token().as_str(), "page12post15");
    }

    #[test]
    fn test_relation_set_requires_two_distinct() {
        assert!(RelationSet::new(Vec::<TypedRef>::new()).is_none());
        assert!(RelationSet::new([TypedRef::new("post", id(1))]).is_none());
        assert!(
            RelationSet::new([TypedRef::new("post", id(1)), TypedRef::new("post", id(1))])
                .is_none()
        );
    }

    #[test]
    fn test_relation_set_drops_empty_type_names() {
        let set = RelationSet::new([
            TypedRef::new("", id(3)),
            TypedRef::new("post", id(1)),
            TypedRef::new("page", id(2)),
        ])
        .unwrap();
        assert_eq!(set.token().as_str(), "page2post1");
    }

    #[test]
    fn test_contains() {
        let set =
            RelationSet::new([TypedRef::new("post", id(5)), TypedRef::new("page", id(9))]).unwrap();
        assert!(set.contains(&TypedRef::new("page", id(9))));
        assert!(!set.contains(&TypedRef::new("page", id(5))));
    }

    #[test]
    fn test_token_display() {
        let token: Token = "post12post15".parse().unwrap();
        assert_eq!(token.to_string(), "post12post15");
        assert_eq!(token.len(), 12);
        assert_eq!(String::from(token), "post12post15");
    }
}
