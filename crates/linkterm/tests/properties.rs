//! End-to-end properties of link terms.

use std::collections::BTreeSet;

use linkterm::{
    decode_report, decode_token, encode_token, entity_id, validate_token, EntityId, Linker,
    MemoryStore, RelationSet, TypeVocabulary, TypedRef,
};
use proptest::prelude::*;

/// Type names including one that contains another.
const TYPES: &[&str] = &[
    "post",
    "page",
    "event",
    "event_date",
    "book",
    "attachment",
    "nav_menu_item",
];

/// Type names where no name occurs inside another.
const DISJOINT_TYPES: &[&str] = &["post", "page", "book", "attachment", "nav_menu_item"];

fn id(raw: u64) -> EntityId {
    entity_id(raw).unwrap()
}

fn r(type_name: &'static str, raw: u64) -> TypedRef<'static> {
    TypedRef::new(type_name, id(raw))
}

fn vocab(names: &[&str]) -> TypeVocabulary {
    TypeVocabulary::from_names(names.iter().copied()).unwrap()
}

fn refs_strategy(pool: &'static [&'static str]) -> impl Strategy<Value = Vec<TypedRef<'static>>> {
    prop::collection::vec((0..pool.len(), 1u64..=u64::MAX), 0..8).prop_map(move |pairs| {
        pairs
            .into_iter()
            .map(|(i, raw)| r(pool[i], raw))
            .collect()
    })
}

fn as_set(refs: &[TypedRef<'_>]) -> BTreeSet<(String, u64)> {
    refs.iter()
        .map(|r| (r.type_name.to_string(), r.id.get()))
        .collect()
}

// =============================================================================
// FIXED EXAMPLES
// =============================================================================

#[test]
fn example_same_type() {
    let token = encode_token([r("post", 12), r("post", 15)]).unwrap();
    assert_eq!(token.as_str(), "post12post15");
    assert_eq!(
        decode_token(token.as_str(), &vocab(&["post"])),
        [r("post", 12), r("post", 15)]
    );
}

#[test]
fn minimum_cardinality() {
    assert!(encode_token(Vec::<TypedRef>::new()).is_none());
    assert!(encode_token([r("post", 1)]).is_none());
}

#[test]
fn substring_safety() {
    let token = encode_token([r("event_date", 3), r("event", 7)]).unwrap();
    let vocabulary = vocab(&["event", "event_date"]);
    let decoded = decode_token(token.as_str(), &vocabulary);
    assert_eq!(as_set(&decoded), as_set(&[r("event_date", 3), r("event", 7)]));
}

#[test]
fn substring_safety_with_repeated_longer_name() {
    let refs = [r("event_date", 3), r("event", 7), r("event_date", 30), r("event", 70)];
    let token = encode_token(refs.clone()).unwrap();
    assert_eq!(token.as_str(), "event7event70event_date3event_date30");
    let vocabulary = vocab(&["event", "event_date"]);
    let decoded = decode_token(token.as_str(), &vocabulary);
    assert_eq!(as_set(&decoded), as_set(&refs));
}

#[test]
fn vocabulary_filtering() {
    let token = encode_token([r("post", 5), r("page", 9), r("book", 2)]).unwrap();
    let vocabulary = vocab(&["post", "book"]);
    let decoded = decode_token(token.as_str(), &vocabulary);
    assert_eq!(decoded, [r("book", 2), r("post", 5)]);
}

#[test]
fn self_exclusion_in_lookup() {
    let mut store = MemoryStore::new();
    store.insert_entity(id(5), "post").unwrap();
    store.insert_entity(id(9), "page").unwrap();

    let mut linker = Linker::new(store);
    let token = linker.add_link(&[id(5).into(), id(9).into()]).unwrap().unwrap();
    assert_eq!(token.as_str(), "page9post5");

    let related = linker.related(id(5).into(), &["page"]).unwrap();
    assert_eq!(related, [id(9)]);
}

#[test]
fn stored_terms_validate() {
    let vocabulary = vocab(TYPES);
    for term in ["page12post15", "post12post15", "event7event_date3", "book1nav_menu_item2"] {
        let set = validate_token(term, &vocabulary).unwrap();
        assert_eq!(set.token().as_str(), term);
    }
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn round_trip_with_full_vocabulary(refs in refs_strategy(TYPES)) {
        let expected = as_set(&refs);
        let token = encode_token(refs);
        prop_assume!(token.is_some());
        let token = token.unwrap();

        let vocabulary = vocab(TYPES);
        let report = decode_report(token.as_str(), &vocabulary);
        prop_assert!(report.is_complete());
        prop_assert_eq!(as_set(&report.refs), expected);
    }

    #[test]
    fn encoding_is_order_independent(
        (refs, shuffled) in refs_strategy(TYPES)
            .prop_flat_map(|refs| (Just(refs.clone()), Just(refs).prop_shuffle()))
    ) {
        prop_assert_eq!(encode_token(refs), encode_token(shuffled));
    }

    #[test]
    fn fewer_than_two_distinct_is_absent(refs in refs_strategy(TYPES)) {
        let distinct = as_set(&refs).len();
        prop_assert_eq!(encode_token(refs).is_some(), distinct >= 2);
    }

    #[test]
    fn filtered_vocabulary_recovers_only_its_types(
        refs in refs_strategy(DISJOINT_TYPES),
        mask in prop::collection::vec(any::<bool>(), DISJOINT_TYPES.len()),
    ) {
        let Some(set) = RelationSet::new(refs) else {
            return Ok(());
        };
        let kept: Vec<&str> = DISJOINT_TYPES
            .iter()
            .zip(&mask)
            .filter(|(_, keep)| **keep)
            .map(|(name, _)| *name)
            .collect();
        let filter = vocab(&kept);

        let expected: BTreeSet<(String, u64)> = as_set(set.members())
            .into_iter()
            .filter(|(name, _)| filter.contains(name))
            .collect();
        let decoded = decode_token(set.token().as_str(), &filter);
        prop_assert_eq!(as_set(&decoded), expected);
    }

    #[test]
    fn encoded_terms_validate(refs in refs_strategy(TYPES)) {
        let Some(set) = RelationSet::new(refs) else {
            return Ok(());
        };
        let token = set.token();
        prop_assume!(token.len() <= linkterm::MAX_TOKEN_LEN);
        let vocabulary = vocab(TYPES);
        let validated = validate_token(token.as_str(), &vocabulary);
        prop_assert_eq!(validated.map(|s| s.token()), Ok(token));
    }

    #[test]
    fn decode_never_panics(token in any::<String>()) {
        let vocabulary = vocab(TYPES);
        let _ = decode_report(&token, &vocabulary);
    }

    #[test]
    fn decode_of_near_terms_never_panics(token in "[a-z_0-9]{0,48}") {
        let vocabulary = vocab(TYPES);
        let report = decode_report(&token, &vocabulary);
        for r in &report.refs {
            prop_assert!(TYPES.contains(&r.type_name()));
        }
    }
}
