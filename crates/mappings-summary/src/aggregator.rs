//! Pair and contributor counts over a mapping collection.

use std::collections::HashMap;
use std::hash::Hash;

use mappings_core::models::MappingRecord;
use serde::Serialize;

// ── PairCount ─────────────────────────────────────────────────────────────────

/// Number of mappings between two vocabularies, regardless of direction.
///
/// Fields are declared in alphabetical order so the serialized document
/// keeps a stable key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairCount {
    pub count: usize,
    /// Lexicographically smaller prefix.
    pub source: String,
    /// Lexicographically larger (or equal) prefix.
    pub target: String,
}

// ── Contributor ───────────────────────────────────────────────────────────────

/// Number of mappings attributed to one curator.
///
/// Serializes as `{count, orcid}` for ORCID-identified curators and as a
/// bare `{count}` for everything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Contributor {
    Attributed { count: usize, orcid: String },
    Anonymous { count: usize },
}

impl Contributor {
    pub fn count(&self) -> usize {
        match self {
            Contributor::Attributed { count, .. } | Contributor::Anonymous { count } => *count,
        }
    }

    pub fn orcid(&self) -> Option<&str> {
        match self {
            Contributor::Attributed { orcid, .. } => Some(orcid),
            Contributor::Anonymous { .. } => None,
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Count mappings per unordered pair of prefixes.
///
/// Sorted by count, highest first; equal counts keep the order in which
/// each pair was first seen.
pub fn aggregate_pairs<'a, I>(records: I) -> Vec<PairCount>
where
    I: IntoIterator<Item = &'a MappingRecord>,
{
    most_common(records.into_iter().map(MappingRecord::pair_key))
        .into_iter()
        .map(|(key, count)| {
            let (source, target) = key.into_parts();
            PairCount {
                count,
                source,
                target,
            }
        })
        .collect()
}

/// Count mappings per contributor.
///
/// Every provenance that is not an `orcid:` reference lands in a single
/// anonymous bucket. Ordering follows [`aggregate_pairs`].
pub fn aggregate_contributors<'a, I>(records: I) -> Vec<Contributor>
where
    I: IntoIterator<Item = &'a MappingRecord>,
{
    most_common(records.into_iter().map(MappingRecord::orcid))
        .into_iter()
        .map(|(orcid, count)| match orcid {
            Some(orcid) => Contributor::Attributed {
                count,
                orcid: orcid.to_string(),
            },
            None => Contributor::Anonymous { count },
        })
        .collect()
}

// ── Private ───────────────────────────────────────────────────────────────────

/// Tally `keys`, returning `(key, count)` sorted by descending count with
/// ties left in first-seen order.
fn most_common<K, I>(keys: I) -> Vec<(K, usize)>
where
    K: Hash + Eq + Clone,
    I: IntoIterator<Item = K>,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut tallies: Vec<(K, usize)> = Vec::new();

    for key in keys {
        match slots.get(&key) {
            Some(&slot) => tallies[slot].1 += 1,
            None => {
                slots.insert(key.clone(), tallies.len());
                tallies.push((key, 1));
            }
        }
    }

    // `sort_by` is stable, so ties stay in discovery order.
    tallies.sort_by(|a, b| b.1.cmp(&a.1));
    tallies
}

// ── Tests ─────────────────────────────────────────────────────────────────────
