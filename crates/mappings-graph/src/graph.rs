//! Node/edge model of the positive mappings, shaped for NDEx.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use mappings_core::models::{MappingRecord, ORCID_PREFIX};
use tracing::{debug, info};

use crate::curie::normalize_curie;

/// Network name shown on NDEx.
pub const NETWORK_NAME: &str = "Biomappings";

pub const DESCRIPTION: &str =
    "Manually curated mappings (skos:exactMatch) between biological entities.";

pub const REFERENCE: &str = "https://github.com/biomappings/biomappings";

pub const RIGHTS: &str = "Waiver-No rights reserved (CC0)";

/// Resolver base for the prefix → URI context.
pub const CONTEXT_URI_BASE: &str = "https://identifiers.org/";

/// Position of a node in [`GraphModel::nodes`].
pub type NodeId = usize;

// ── Model types ───────────────────────────────────────────────────────────────

/// One term, identified by its normalized CURIE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    /// Normalized CURIE, e.g. `"chebi:29087"`.
    pub name: String,
    /// Display name of the term.
    pub represents: String,
}

/// One mapping record, pointing from its source term to its target term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub id: usize,
    pub source: NodeId,
    pub target: NodeId,
    /// The mapping relation, e.g. `"skos:exactMatch"`.
    pub interaction: String,
    pub edge_type: String,
    /// Who asserted the mapping.
    pub provenance: String,
}

/// Attributes describing the network as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkAttributes {
    pub name: String,
    pub description: String,
    pub reference: String,
    pub rights: String,
    /// Content version of the collection, usually a git commit hash.
    pub version: String,
    /// Prefix → URI base for every prefix used by a node.
    pub context: BTreeMap<String, String>,
    /// Sorted distinct ORCID provenance strings (`orcid:...`).
    pub author: Vec<String>,
}

/// The finished network. Read-only once built.
#[derive(Debug, Clone)]
pub struct GraphModel {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    node_index: HashMap<String, NodeId>,
    attributes: NetworkAttributes,
}

impl GraphModel {
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn attributes(&self) -> &NetworkAttributes {
        &self.attributes
    }

    /// Look a node up by its normalized CURIE.
    pub fn node(&self, curie: &str) -> Option<&Node> {
        self.node_index.get(curie).map(|&id| &self.nodes[id])
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

/// Build the network for `records`, stamped with `version`.
///
/// Every distinct normalized CURIE becomes one node; the first record that
/// mentions it supplies the display name. Every record becomes its own edge,
/// so parallel edges with different provenance are kept.
pub fn build_graph(records: &[MappingRecord], version: &str) -> GraphModel {
    let mut builder = GraphBuilder::default();

    for record in records {
        let source = builder.add_node(
            normalize_curie(&record.source_prefix, &record.source_identifier),
            &record.source_name,
        );
        let target = builder.add_node(
            normalize_curie(&record.target_prefix, &record.target_identifier),
            &record.target_name,
        );
        builder.add_edge(source, target, record);
    }

    let attributes = NetworkAttributes {
        name: NETWORK_NAME.to_string(),
        description: DESCRIPTION.to_string(),
        reference: REFERENCE.to_string(),
        rights: RIGHTS.to_string(),
        version: version.to_string(),
        context: build_context(records),
        author: collect_authors(records),
    };

    info!(
        "Built network with {} nodes and {} edges from {} mappings",
        builder.nodes.len(),
        builder.edges.len(),
        records.len()
    );

    GraphModel {
        nodes: builder.nodes,
        edges: builder.edges,
        node_index: builder.node_index,
        attributes,
    }
}

/// Map every prefix appearing on either side of a record to its resolver URI.
pub fn build_context(records: &[MappingRecord]) -> BTreeMap<String, String> {
    records
        .iter()
        .flat_map(|r| [r.source_prefix.as_str(), r.target_prefix.as_str()])
        .map(|prefix| (prefix.to_string(), format!("{CONTEXT_URI_BASE}{prefix}:")))
        .collect()
}

/// Sorted distinct provenance strings that name an ORCID.
pub fn collect_authors(records: &[MappingRecord]) -> Vec<String> {
    records
        .iter()
        .filter(|r| r.source.starts_with(ORCID_PREFIX))
        .map(|r| r.source.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[derive(Default)]
struct GraphBuilder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    node_index: HashMap<String, NodeId>,
}

impl GraphBuilder {
    /// Return the node named `name`, creating it on first sight.
    fn add_node(&mut self, name: String, represents: &str) -> NodeId {
        if let Some(&id) = self.node_index.get(&name) {
            return id;
        }
        let id = self.nodes.len();
        debug!("New node {} ({})", name, represents);
        self.node_index.insert(name.clone(), id);
        self.nodes.push(Node {
            id,
            name,
            represents: represents.to_string(),
        });
        id
    }

    fn add_edge(&mut self, source: NodeId, target: NodeId, record: &MappingRecord) {
        self.edges.push(Edge {
            id: self.edges.len(),
            source,
            target,
            interaction: record.relation.clone(),
            edge_type: record.mapping_type.clone(),
            provenance: record.source.clone(),
        });
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(
        source: (&str, &str, &str),
        target: (&str, &str, &str),
        provenance: &str,
    ) -> MappingRecord {
        MappingRecord {
            source_prefix: source.0.to_string(),
            source_identifier: source.1.to_string(),
            source_name: source.2.to_string(),
            relation: "skos:exactMatch".to_string(),
            target_prefix: target.0.to_string(),
            target_identifier: target.1.to_string(),
            target_name: target.2.to_string(),
            mapping_type: "manually_reviewed".to_string(),
            source: provenance.to_string(),
        }
    }

    // ── nodes and edges ───────────────────────────────────────────────────────

    #[test]
    fn test_shared_source_yields_one_node_two_edges() {
        let records = vec![
            make_record(("mesh", "D000001", "Calcimycin"), ("chebi", "CHEBI:29087", "calcimycin"), "orcid:1"),
            make_record(("mesh", "D000001", "Calcimycin"), ("ncit", "C1234", "Calcimycin"), "orcid:2"),
        ];

        let graph = build_graph(&records, "abc");

        assert_eq!(graph.nodes().len(), 3);
        assert_eq!(graph.edges().len(), 2);
        let source = graph.node("mesh:D000001").expect("source node");
        assert!(graph.edges().iter().all(|e| e.source == source.id));
    }

    #[test]
    fn test_nodes_are_keyed_by_normalized_curie() {
        let records = vec![
            make_record(("chebi", "CHEBI:29087", "calcimycin"), ("mesh", "D000001", "Calcimycin"), "x"),
            make_record(("chebi", "29087", "Calcimycin A23187"), ("mesh", "D000002", "Other"), "x"),
        ];

        let graph = build_graph(&records, "abc");

        assert_eq!(graph.nodes().len(), 3);
        let node = graph.node("chebi:29087").expect("merged node");
        // First record wins the display name.
        assert_eq!(node.represents, "calcimycin");
        assert_eq!(graph.edges()[0].source, graph.edges()[1].source);
    }

    #[test]
    fn test_duplicate_records_keep_parallel_edges() {
        let record = make_record(("a", "1", "one"), ("b", "2", "two"), "orcid:1");
        let graph = build_graph(&[record.clone(), record], "abc");

        assert_eq!(graph.nodes().len(), 2);
        assert_eq!(graph.edges().len(), 2);
        assert_eq!(graph.edges()[0].id, 0);
        assert_eq!(graph.edges()[1].id, 1);
    }

    #[test]
    fn test_edge_attributes_come_from_record() {
        let mut record = make_record(("go", "0005634", "nucleus"), ("mesh", "D009713", "Cell Nucleus"), "orcid:0000-1");
        record.relation = "skos:broadMatch".to_string();
        record.mapping_type = "semapv:LexicalMatching".to_string();

        let graph = build_graph(&[record], "abc");
        let edge = &graph.edges()[0];

        assert_eq!(edge.interaction, "skos:broadMatch");
        assert_eq!(edge.edge_type, "semapv:LexicalMatching");
        assert_eq!(edge.provenance, "orcid:0000-1");
        assert_eq!(graph.nodes()[edge.source].name, "go:0005634");
        assert_eq!(graph.nodes()[edge.target].name, "mesh:D009713");
        assert_eq!(graph.nodes()[edge.target].represents, "Cell Nucleus");
    }

    #[test]
    fn test_empty_records() {
        let graph = build_graph(&[], "abc");
        assert!(graph.nodes().is_empty());
        assert!(graph.edges().is_empty());
        assert!(graph.attributes().context.is_empty());
        assert!(graph.attributes().author.is_empty());
    }

    // ── network attributes ────────────────────────────────────────────────────

    #[test]
    fn test_bare_orcid_provenance_is_an_author() {
        let records = vec![
            make_record(("a", "1", "x"), ("b", "2", "y"), "orcid:"),
            make_record(("a", "3", "x"), ("b", "4", "y"), "manual-curation"),
        ];
        let graph = build_graph(&records, "abc");
        assert_eq!(graph.attributes().author, vec!["orcid:"]);
    }

    #[test]
    fn test_network_attributes() {
        let records = vec![
            make_record(("mesh", "1", "a"), ("chebi", "2", "b"), "orcid:0000-2"),
            make_record(("go", "3", "c"), ("mesh", "4", "d"), "lexical"),
            make_record(("mesh", "5", "e"), ("chebi", "6", "f"), "orcid:0000-1"),
            make_record(("mesh", "7", "g"), ("chebi", "8", "h"), "orcid:0000-2"),
        ];

        let graph = build_graph(&records, "0f3e9a1");
        let attrs = graph.attributes();

        assert_eq!(attrs.name, "Biomappings");
        assert_eq!(attrs.description, DESCRIPTION);
        assert_eq!(attrs.reference, REFERENCE);
        assert_eq!(attrs.rights, "Waiver-No rights reserved (CC0)");
        assert_eq!(attrs.version, "0f3e9a1");
        assert_eq!(attrs.author, vec!["orcid:0000-1", "orcid:0000-2"]);

        let prefixes: Vec<&str> = attrs.context.keys().map(String::as_str).collect();
        assert_eq!(prefixes, vec!["chebi", "go", "mesh"]);
        assert_eq!(attrs.context["go"], "https://identifiers.org/go:");
    }
}
