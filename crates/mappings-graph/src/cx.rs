//! Rendering of a [`GraphModel`] as a CX network document.
//!
//! CX is the aspect-oriented JSON interchange format accepted by NDEx: a
//! top-level array in which each element holds one named aspect.

use serde_json::{json, Value};

use crate::graph::GraphModel;

/// Sentinel value NDEx expects in the `numberVerification` aspect.
const LONG_NUMBER: i64 = 281_474_976_710_655;

/// Render `model` as a CX document.
pub fn to_cx(model: &GraphModel) -> Value {
    let attrs = model.attributes();

    let nodes: Vec<Value> = model
        .nodes()
        .iter()
        .map(|n| json!({ "@id": n.id, "n": n.name, "r": n.represents }))
        .collect();

    let edges: Vec<Value> = model
        .edges()
        .iter()
        .map(|e| json!({ "@id": e.id, "s": e.source, "t": e.target, "i": e.interaction }))
        .collect();

    let edge_attributes: Vec<Value> = model
        .edges()
        .iter()
        .flat_map(|e| {
            [
                json!({ "po": e.id, "n": "type", "v": e.edge_type }),
                json!({ "po": e.id, "n": "provenance", "v": e.provenance }),
            ]
        })
        .collect();

    let network_attributes = vec![
        json!({ "n": "name", "v": attrs.name }),
        json!({ "n": "description", "v": attrs.description }),
        json!({ "n": "reference", "v": attrs.reference }),
        json!({ "n": "rights", "v": attrs.rights }),
        json!({ "n": "version", "v": attrs.version }),
        json!({ "n": "author", "v": attrs.author, "d": "list_of_string" }),
    ];

    let metadata = vec![
        meta_entry("nodes", nodes.len(), nodes.len()),
        meta_entry("edges", edges.len(), edges.len()),
        meta_entry("edgeAttributes", edge_attributes.len(), 0),
        meta_entry("networkAttributes", network_attributes.len(), 0),
        meta_entry("@context", 1, 0),
    ];

    json!([
        { "numberVerification": [{ "longNumber": LONG_NUMBER }] },
        { "metaData": metadata },
        { "nodes": nodes },
        { "edges": edges },
        { "edgeAttributes": edge_attributes },
        { "networkAttributes": network_attributes },
        { "@context": [attrs.context] },
        { "status": [{ "error": "", "success": true }] },
    ])
}

fn meta_entry(name: &str, element_count: usize, id_counter: usize) -> Value {
    let mut entry = json!({
        "name": name,
        "elementCount": element_count,
        "version": "1.0",
        "consistencyGroup": 1,
    });
    if id_counter > 0 {
        entry["idCounter"] = json!(id_counter);
    }
    entry
}
