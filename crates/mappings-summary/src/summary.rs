//! The summary document published on the Biomappings website.

use std::collections::HashSet;
use std::path::Path;

use mappings_core::error::{MappingsError, Result};
use mappings_core::models::MappingRecord;
use serde::Serialize;
use tracing::{debug, info};

use crate::aggregator::{aggregate_contributors, aggregate_pairs, Contributor, PairCount};

// ── SummaryDocument ───────────────────────────────────────────────────────────

/// Pair counts, contributor counts and totals for the three collections.
///
/// Fields are declared in alphabetical order; the serialized file therefore
/// has a stable, diff-friendly key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryDocument {
    /// Curators of the positive and negative collections.
    pub contributors: Vec<Contributor>,
    pub negative: Vec<PairCount>,
    pub negative_mapping_count: usize,
    pub negative_prefix_count: usize,
    pub positive: Vec<PairCount>,
    pub positive_mapping_count: usize,
    pub positive_prefix_count: usize,
    pub predictions: Vec<PairCount>,
    pub predictions_mapping_count: usize,
    pub predictions_prefix_count: usize,
}

/// Build the summary for the curated (`positive`, `negative`) and predicted
/// collections.
///
/// Predictions have no curator, so they are left out of `contributors`.
pub fn build_summary(
    positive: &[MappingRecord],
    negative: &[MappingRecord],
    predicted: &[MappingRecord],
) -> SummaryDocument {
    let positive_pairs = aggregate_pairs(positive);
    let negative_pairs = aggregate_pairs(negative);
    let prediction_pairs = aggregate_pairs(predicted);
    let contributors = aggregate_contributors(positive.iter().chain(negative));

    debug!(
        "Aggregated {} positive, {} negative and {} predicted prefix pairs",
        positive_pairs.len(),
        negative_pairs.len(),
        prediction_pairs.len()
    );

    SummaryDocument {
        contributors,
        negative_mapping_count: mapping_count(&negative_pairs),
        negative_prefix_count: prefix_count(&negative_pairs),
        negative: negative_pairs,
        positive_mapping_count: mapping_count(&positive_pairs),
        positive_prefix_count: prefix_count(&positive_pairs),
        positive: positive_pairs,
        predictions_mapping_count: mapping_count(&prediction_pairs),
        predictions_prefix_count: prefix_count(&prediction_pairs),
        predictions: prediction_pairs,
    }
}

/// Serialize `summary` as YAML to `path`.
///
/// Parent directories are created as needed and the file is replaced
/// atomically.
pub fn write_summary(summary: &SummaryDocument, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(summary)?;

    let write_err = |source: std::io::Error| MappingsError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    // Write to a temp file then rename for atomicity.
    let tmp = path.with_extension("yml.tmp");
    std::fs::write(&tmp, yaml).map_err(write_err)?;
    std::fs::rename(&tmp, path).map_err(write_err)?;

    info!(
        "Wrote summary of {} positive mappings to {}",
        summary.positive_mapping_count,
        path.display()
    );
    Ok(())
}

// ── Private ───────────────────────────────────────────────────────────────────

fn mapping_count(pairs: &[PairCount]) -> usize {
    pairs.iter().map(|p| p.count).sum()
}

/// Distinct prefixes on either side of any pair.
fn prefix_count(pairs: &[PairCount]) -> usize {
    pairs
        .iter()
        .flat_map(|p| [p.source.as_str(), p.target.as_str()])
        .collect::<HashSet<_>>()
        .len()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
