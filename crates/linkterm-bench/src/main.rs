//! Benchmark for link term encoding, decoding and lookup.
//!
//! Reads links from a JSON file, or generates a synthetic set when no path
//! is given:
//!
//! ```text
//! bench-links [links.json]
//! ```
//!
//! The JSON file is a list of links, each a list of `{ "type", "id" }`
//! participants.

use std::fs;
use std::time::Instant;

use linkterm::{
    decode_token, encode_token, entity_id, validate_vocabulary, EntityRef, Linker, MemoryStore,
    Token, TypeVocabulary, TypedRef,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use tracing::{info, warn};

// =============================================================================
// JSON DATA STRUCTURES
// =============================================================================

#[derive(Debug, Deserialize)]
struct Participant {
    #[serde(rename = "type")]
    type_name: String,
    id: u64,
}

type LinkFixture = Vec<Participant>;

// =============================================================================
// SYNTHETIC DATA
// =============================================================================

const SYNTHETIC_TYPES: &[&str] = &["post", "page", "event", "event_date", "book", "attachment"];
const SYNTHETIC_LINKS: usize = 50_000;
const SYNTHETIC_ENTITIES: u64 = 20_000;
const SYNTHETIC_SEED: u64 = 42;

/// Entity ids are global across types, as in the host. Each id gets a
/// fixed type.
fn synthetic_type(id: u64) -> &'static str {
    SYNTHETIC_TYPES[(id % SYNTHETIC_TYPES.len() as u64) as usize]
}

fn synthetic_links() -> Vec<LinkFixture> {
    let mut rng = StdRng::seed_from_u64(SYNTHETIC_SEED);
    (0..SYNTHETIC_LINKS)
        .map(|_| {
            let size: usize = rng.gen_range(2..=5);
            (0..size)
                .map(|_| {
                    let id = rng.gen_range(1..=SYNTHETIC_ENTITIES);
                    Participant {
                        type_name: synthetic_type(id).to_string(),
                        id,
                    }
                })
                .collect()
        })
        .collect()
}

fn to_refs(link: &LinkFixture) -> Vec<TypedRef<'_>> {
    link.iter()
        .filter_map(|p| entity_id(p.id).map(|id| TypedRef::new(p.type_name.as_str(), id)))
        .collect()
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let links: Vec<LinkFixture> = match std::env::args().nth(1) {
        Some(path) => {
            println!("Reading: {}", path);
            let json = fs::read_to_string(&path).expect("Failed to read links file");
            serde_json::from_str(&json).expect("Failed to parse links JSON")
        }
        None => {
            println!("No input file, generating {} synthetic links", SYNTHETIC_LINKS);
            synthetic_links()
        }
    };

    // Vocabulary of every type that appears in the data
    let mut vocabulary = TypeVocabulary::new();
    for link in &links {
        for p in link {
            vocabulary
                .insert(p.type_name.as_str())
                .expect("Invalid type name in input");
        }
    }
    println!("Types: {}", vocabulary.len());
    for issue in validate_vocabulary(&vocabulary) {
        warn!(?issue, "vocabulary may decode ambiguously");
    }

    // Encode
    let encode_start = Instant::now();
    let tokens: Vec<Token> = links
        .iter()
        .filter_map(|link| encode_token(to_refs(link)))
        .collect();
    let encode_time = encode_start.elapsed();
    let total_bytes: usize = tokens.iter().map(Token::len).sum();

    println!("\n=== Encode ===");
    println!("Links: {} ({} encoded)", links.len(), tokens.len());
    println!(
        "Term bytes: {} (avg {:.1})",
        total_bytes,
        total_bytes as f64 / tokens.len().max(1) as f64
    );
    println!("Time: {:?}", encode_time);
    println!(
        "  Throughput: {:.0} terms/s",
        tokens.len() as f64 / encode_time.as_secs_f64()
    );

    // Decode with the full vocabulary
    const DECODE_ITERS: u32 = 5;

    let decode_start = Instant::now();
    let mut decoded = 0usize;
    for _ in 0..DECODE_ITERS {
        decoded = tokens
            .iter()
            .map(|t| decode_token(t.as_str(), &vocabulary).len())
            .sum();
    }
    let decode_time = decode_start.elapsed() / DECODE_ITERS;

    println!("\n=== Decode (full vocabulary) ===");
    println!("Participants recovered: {}", decoded);
    println!("Time: {:?} (avg of {} iterations)", decode_time, DECODE_ITERS);
    println!(
        "  Throughput: {:.0} terms/s",
        tokens.len() as f64 / decode_time.as_secs_f64()
    );

    // Round-trip check
    let mismatches = links
        .iter()
        .filter_map(|link| {
            let token = encode_token(to_refs(link))?;
            let mut expected = to_refs(link);
            expected.sort();
            expected.dedup();
            (decode_token(token.as_str(), &vocabulary) != expected).then_some(token)
        })
        .count();
    assert_eq!(mismatches, 0, "round-trip mismatches");

    // Store-backed lookup
    let mut store = MemoryStore::with_types(vocabulary.clone());
    for link in &links {
        for p in link {
            if let Some(id) = entity_id(p.id) {
                store
                    .insert_entity(id, &p.type_name)
                    .expect("Invalid type name in input");
            }
        }
    }
    let mut linker = Linker::with_options(
        store,
        linkterm::LinkOptions {
            max_token_len: None,
            ..Default::default()
        },
    );

    let attach_start = Instant::now();
    for link in &links {
        let refs: Vec<EntityRef> = link
            .iter()
            .filter_map(|p| entity_id(p.id))
            .map(EntityRef::from)
            .collect();
        linker.add_link(&refs).expect("Failed to attach link");
    }
    let attach_time = attach_start.elapsed();

    let origins: Vec<u64> = links.iter().filter_map(|l| l.first().map(|p| p.id)).collect();
    let lookup_types: Vec<&str> = vocabulary.iter().collect();
    let lookup_start = Instant::now();
    let mut related_total = 0usize;
    for raw in &origins {
        let Some(id) = entity_id(*raw) else { continue };
        related_total += linker
            .related(id.into(), &lookup_types)
            .expect("Failed to read links")
            .len();
    }
    let lookup_time = lookup_start.elapsed();

    println!("\n=== Store ===");
    println!("Entities: {}", linker.store().entity_count());
    println!("Attach: {:?}", attach_time);
    println!(
        "Lookup: {:?} for {} origins ({} related ids)",
        lookup_time,
        origins.len(),
        related_total
    );

    info!(
        links = links.len(),
        terms = tokens.len(),
        term_bytes = total_bytes,
        "benchmark complete"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_links_are_reproducible() {
        let first = synthetic_links();
        let second = synthetic_links();
        assert_eq!(first.len(), SYNTHETIC_LINKS);
        let ids = |links: &[LinkFixture]| -> Vec<Vec<u64>> {
            links.iter().map(|l| l.iter().map(|p| p.id).collect()).collect()
        };
        assert_eq!(ids(&first), ids(&second));
        for link in &first {
            assert!((2..=5).contains(&link.len()));
            for p in link {
                assert!((1..=SYNTHETIC_ENTITIES).contains(&p.id));
                assert_eq!(p.type_name, synthetic_type(p.id));
            }
        }
    }
}
