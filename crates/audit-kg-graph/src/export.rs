//! Canonical document export.
//!
//! The document is the graph's external representation:
//!
//! ```json
//! {
//!   "nodes": [ { "id": "...", "label": "...", "category": "..." } ],
//!   "edges": [ { "source": "...", "target": "...", "relation": "..." } ]
//! }
//! ```
//!
//! Node order is graph insertion order (not label order), edge order is
//! input order. Reading a document back goes through the builder, so an
//! imported graph is checked exactly like a constructed one.

use crate::builder::GraphBuilder;
use crate::error::{ExportError, GraphIntegrityError};
use crate::graph::KnowledgeGraph;
use crate::options::BuildOptions;
use audit_kg_core::{Edge, Node};
use serde::{Deserialize, Serialize};

/// The exported form of a knowledge graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphDocument {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl GraphDocument {
    /// Serializes with two-space indentation.
    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a document. No integrity check happens here.
    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Rebuilds a validated graph from this document.
    pub fn into_graph(self, options: BuildOptions) -> Result<KnowledgeGraph, GraphIntegrityError> {
        GraphBuilder::with_options(options)
            .add_nodes(self.nodes)
            .add_edges(self.edges)
            .build()
    }

    /// Parses a document and rebuilds a validated graph from it.
    pub fn parse_graph(json: &str, options: BuildOptions) -> Result<KnowledgeGraph, ExportError> {
        let graph = Self::from_json(json)?.into_graph(options)?;
        Ok(graph)
    }
}

impl From<&KnowledgeGraph> for GraphDocument {
    fn from(graph: &KnowledgeGraph) -> Self {
        export_document(graph)
    }
}

/// Exports the graph as a document.
pub fn export_document(graph: &KnowledgeGraph) -> GraphDocument {
    GraphDocument {
        nodes: graph.nodes().cloned().collect(),
        edges: graph.edges().cloned().collect(),
    }
}
