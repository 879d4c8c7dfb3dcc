//! Core graph data structure.
//!
//! A KnowledgeGraph wraps a petgraph multigraph plus an id index. It has
//! no mutating API: the builder is the only way to get one, and it has
//! already checked that every edge endpoint is a defined node.

use audit_kg_core::{Edge, Node};
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// An immutable, integrity-checked knowledge graph.
///
/// Nodes keep the order their ids were first seen in the input; edges keep
/// the input order exactly.
#[derive(Debug, Clone)]
pub struct KnowledgeGraph {
    /// Edge weights are the caller's `Edge` values, endpoints included.
    graph: DiGraph<Node, Edge>,

    /// Maps node ids to graph indexes.
    id_index: HashMap<String, NodeIndex>,
}

impl KnowledgeGraph {
    /// Assembles a graph from parts the builder has already validated.
    pub(crate) fn from_parts(
        graph: DiGraph<Node, Edge>,
        id_index: HashMap<String, NodeIndex>,
    ) -> Self {
        Self { graph, id_index }
    }

    /// Iterates over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.node_weights()
    }

    /// Iterates over all edges in input order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.graph.edge_weights()
    }

    /// Gets a node by id.
    pub fn get(&self, id: &str) -> Option<&Node> {
        let index = self.id_index.get(id)?;
        self.graph.node_weight(*index)
    }

    /// Returns true if a node with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.id_index.contains_key(id)
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}

impl PartialEq for KnowledgeGraph {
    fn eq(&self, other: &Self) -> bool {
        self.nodes().eq(other.nodes()) && self.edges().eq(other.edges())
    }
}

impl Eq for KnowledgeGraph {}

/// Graph statistics for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub category_count: usize,
}

impl KnowledgeGraph {
    /// Returns graph statistics.
    pub fn stats(&self) -> GraphStats {
        let categories: HashSet<&str> = self.nodes().map(|node| node.category.as_str()).collect();
        GraphStats {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            category_count: categories.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::build;
    use audit_kg_core::{Edge, Node};

    fn sample() -> crate::KnowledgeGraph {
        build(
            vec![
                Node::new("control:ap-three-way", "3-way match before payment", "control"),
                Node::new("risk:ap-fraud", "Vendor payment fraud", "risk"),
                Node::new("risk:ap-dup", "Duplicate invoice processing", "risk"),
                Node::new("reg:sox", "SOX 404", "regulation"),
            ],
            vec![
                Edge::new("risk:ap-fraud", "control:ap-three-way", "mitigated_by"),
                Edge::new("control:ap-three-way", "reg:sox", "supports_regulation"),
                Edge::new("risk:ap-dup", "control:ap-three-way", "mitigated_by"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_lookup_by_id() {
        let graph = sample();
        assert_eq!(graph.get("reg:sox").unwrap().label, "SOX 404");
        assert!(graph.contains("risk:ap-dup"));
        assert!(graph.get("reg:gdpr").is_none());
        assert!(!graph.contains("reg:gdpr"));
    }

    #[test]
    fn test_stats() {
        let stats = sample().stats();
        assert_eq!(stats.node_count, 4);
        assert_eq!(stats.edge_count, 3);
        assert_eq!(stats.category_count, 3);
    }

    #[test]
    fn test_graph_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<crate::KnowledgeGraph>();
    }
}
