use std::path::Path;

use anyhow::Context;
use mappings_core::settings::ResourcePaths;
use mappings_graph::graph::build_graph;
use mappings_graph::upload::{CxFileUploader, NetworkUploader};
use mappings_summary::reader::{load_false_mappings, load_mappings, load_predictions};
use mappings_summary::summary::{build_summary, write_summary, SummaryDocument};

// ── summary ────────────────────────────────────────────────────────────────────

/// Load all three collections and write the website summary to `output`.
pub fn export_summary(paths: &ResourcePaths, output: &Path) -> anyhow::Result<SummaryDocument> {
    let positive = load_mappings(paths)?;
    let negative = load_false_mappings(paths)?;
    let predicted = load_predictions(paths)?;

    let summary = build_summary(&positive, &negative, &predicted);
    write_summary(&summary, output)?;

    tracing::info!(
        "Summary: {} positive, {} negative, {} predicted mappings; {} contributors",
        summary.positive_mapping_count,
        summary.negative_mapping_count,
        summary.predictions_mapping_count,
        summary.contributors.len()
    );
    Ok(summary)
}

// ── ndex ───────────────────────────────────────────────────────────────────────

/// Build the network from the positive mappings and pass it to `uploader`.
pub fn export_network(
    paths: &ResourcePaths,
    version: &str,
    uploader: &dyn NetworkUploader,
) -> anyhow::Result<()> {
    let positive = load_mappings(paths)?;
    let graph = build_graph(&positive, version);
    uploader
        .upload(&graph)
        .context("Failed to hand off the Biomappings network")?;
    Ok(())
}

/// [`export_network`] into a CX file at `output`.
pub fn export_network_file(paths: &ResourcePaths, version: &str, output: &Path) -> anyhow::Result<()> {
    export_network(paths, version, &CxFileUploader::new(output))
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const HEADER: &str = "source prefix\tsource identifier\tsource name\trelation\ttarget prefix\ttarget identifier\ttarget name\ttype\tsource";

    /// Lay out a resources directory with a small curated collection.
    fn write_resources(tmp: &TempDir) -> ResourcePaths {
        let positive = [
            HEADER,
            "mesh\tD000001\tCalcimycin\tskos:exactMatch\tchebi\tCHEBI:29087\tcalcimycin\tmanually_reviewed\torcid:0000-0003-4423-4370",
            "chebi\t29087\tcalcimycin\tskos:exactMatch\tncit\tC327\tCalcimycin\tmanually_reviewed\torcid:0000-0001-9439-5346",
            "go\t0005634\tnucleus\tskos:exactMatch\tmesh\tD009713\tCell Nucleus\tmanually_reviewed\tmanual-curation",
        ];
        let negative = [
            HEADER,
            "mesh\tD000002\tTemefos\tskos:exactMatch\tchebi\tCHEBI:1000\tother\tmanually_reviewed\torcid:0000-0003-4423-4370",
        ];
        let predictions = [
            HEADER,
            "hp\t0000118\tPhenotypic abnormality\tskos:exactMatch\tmp\t0000001\tmammalian phenotype\tlexical\tgeneratr",
        ];
        for (name, lines) in [
            ("mappings.tsv", &positive[..]),
            ("incorrect.tsv", &negative[..]),
            ("predictions.tsv", &predictions[..]),
        ] {
            std::fs::write(tmp.path().join(name), lines.join("\n") + "\n").expect("write tsv");
        }
        ResourcePaths::in_dir(tmp.path()).expect("paths")
    }

    #[test]
    fn test_export_summary_end_to_end() {
        let tmp = TempDir::new().expect("tempdir");
        let paths = write_resources(&tmp);
        let output = tmp.path().join("docs").join("_data").join("summary.yml");

        let summary = export_summary(&paths, &output).expect("export");

        assert!(output.exists());
        assert_eq!(summary.positive_mapping_count, 3);
        assert_eq!(summary.positive_prefix_count, 4);
        assert_eq!(summary.negative_mapping_count, 1);
        assert_eq!(summary.predictions_prefix_count, 2);
        assert_eq!(summary.contributors[0].count(), 2);
        assert_eq!(summary.contributors[0].orcid(), Some("0000-0003-4423-4370"));
    }

    #[test]
    fn test_export_network_file_end_to_end() {
        let tmp = TempDir::new().expect("tempdir");
        let paths = write_resources(&tmp);
        let output = tmp.path().join("biomappings.cx.json");

        export_network_file(&paths, "abc123", &output).expect("export");

        let cx: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).expect("read")).expect("json");
        let nodes = cx
            .as_array()
            .and_then(|aspects| aspects.iter().find_map(|a| a.get("nodes")))
            .and_then(|n| n.as_array())
            .expect("nodes aspect");
        // chebi:29087 is shared by the first two mappings.
        assert_eq!(nodes.len(), 5);
    }

    #[test]
    fn test_export_summary_missing_resources() {
        let tmp = TempDir::new().expect("tempdir");
        let paths = ResourcePaths::in_dir(tmp.path()).expect("paths");
        let err = export_summary(&paths, &tmp.path().join("summary.yml")).unwrap_err();
        assert!(err.to_string().contains("mappings.tsv"));
    }
}
