use serde::{Deserialize, Serialize};

/// Literal prefix marking a provenance string as an ORCID contributor.
pub const ORCID_PREFIX: &str = "orcid:";

/// One curated assertion that a term in one vocabulary corresponds to a
/// term in another.
///
/// Field names on the wire follow the column headers of the TSV resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRecord {
    /// Vocabulary namespace of the subject term, e.g. `"chebi"`.
    #[serde(rename = "source prefix")]
    pub source_prefix: String,
    /// Local identifier of the subject term.
    #[serde(rename = "source identifier")]
    pub source_identifier: String,
    /// Display name of the subject term.
    #[serde(rename = "source name")]
    pub source_name: String,
    /// Relation between the two terms, e.g. `"skos:exactMatch"`.
    pub relation: String,
    /// Vocabulary namespace of the object term.
    #[serde(rename = "target prefix")]
    pub target_prefix: String,
    /// Local identifier of the object term.
    #[serde(rename = "target identifier")]
    pub target_identifier: String,
    /// Display name of the object term.
    #[serde(rename = "target name")]
    pub target_name: String,
    /// How the mapping was produced, e.g. `"manually_reviewed"`.
    #[serde(rename = "type")]
    pub mapping_type: String,
    /// Who or what asserted the mapping, e.g. `"orcid:0000-0003-4423-4370"`.
    pub source: String,
}

impl MappingRecord {
    /// Unordered key for the pair of prefixes this record connects.
    pub fn pair_key(&self) -> PairKey {
        PairKey::new(&self.source_prefix, &self.target_prefix)
    }

    /// ORCID of the contributor, when the provenance names one.
    pub fn orcid(&self) -> Option<&str> {
        orcid_of(&self.source)
    }
}

/// Strip the `orcid:` prefix from a provenance string.
///
/// Returns `None` for any other provenance format. A bare `orcid:` yields
/// an empty identifier, not `None`.
pub fn orcid_of(provenance: &str) -> Option<&str> {
    provenance.strip_prefix(ORCID_PREFIX)
}

/// A pair of prefixes with the lexicographically smaller one first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    first: String,
    second: String,
}

impl PairKey {
    pub fn new(p: &str, q: &str) -> Self {
        let (first, second) = if p <= q { (p, q) } else { (q, p) };
        Self {
            first: first.to_string(),
            second: second.to_string(),
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    pub fn into_parts(self) -> (String, String) {
        (self.first, self.second)
    }
}
