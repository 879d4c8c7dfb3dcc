//! Graph builder for constructing a knowledge graph from raw node and
//! edge lists.
//!
//! Construction is all-or-nothing. The builder works in two passes:
//! 1. Index nodes by id (applying the duplicate-id policy)
//! 2. Resolve every edge endpoint against that index
//!
//! If any endpoint is unknown, the whole build fails and reports every
//! missing id at once.

use crate::error::GraphIntegrityError;
use crate::graph::KnowledgeGraph;
use crate::options::{BuildOptions, DuplicateIdPolicy};
use audit_kg_core::{Edge, Node};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, warn};

/// Builds a graph with default options.
///
/// Shorthand for `GraphBuilder::new().add_nodes(nodes).add_edges(edges).build()`.
pub fn build<N, E>(nodes: N, edges: E) -> Result<KnowledgeGraph, GraphIntegrityError>
where
    N: IntoIterator<Item = Node>,
    E: IntoIterator<Item = Edge>,
{
    GraphBuilder::new().add_nodes(nodes).add_edges(edges).build()
}

/// Collects nodes and edges, then validates them into a KnowledgeGraph.
#[derive(Debug, Default, Clone)]
pub struct GraphBuilder {
    options: BuildOptions,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Creates a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with the given options.
    pub fn with_options(options: BuildOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Appends nodes. Order is kept.
    pub fn add_nodes(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.nodes.extend(nodes);
        self
    }

    /// Appends edges. Order is kept.
    pub fn add_edges(mut self, edges: impl IntoIterator<Item = Edge>) -> Self {
        self.edges.extend(edges);
        self
    }

    /// Validates the input and returns the graph.
    pub fn build(self) -> Result<KnowledgeGraph, GraphIntegrityError> {
        let Self {
            options,
            nodes,
            edges,
        } = self;

        debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            duplicate_ids = %options.duplicate_ids,
            "building knowledge graph"
        );

        let mut graph: DiGraph<Node, Edge> = DiGraph::with_capacity(nodes.len(), edges.len());
        let mut id_index: HashMap<String, NodeIndex> = HashMap::with_capacity(nodes.len());
        let mut duplicates = BTreeSet::new();

        // Pass 1: index nodes
        for node in nodes {
            match id_index.get(&node.id).copied() {
                Some(index) => {
                    debug!(id = %node.id, "node id repeated, later definition replaces earlier");
                    duplicates.insert(node.id.clone());
                    graph[index] = node;
                }
                None => {
                    let id = node.id.clone();
                    let index = graph.add_node(node);
                    id_index.insert(id, index);
                }
            }
        }

        if options.duplicate_ids == DuplicateIdPolicy::Reject && !duplicates.is_empty() {
            let ids: Vec<String> = duplicates.into_iter().collect();
            warn!(?ids, "rejecting graph with duplicate node ids");
            return Err(GraphIntegrityError::DuplicateNodeIds { ids });
        }

        // Pass 2: resolve edge endpoints
        let mut resolved = Vec::with_capacity(edges.len());
        let mut missing = BTreeSet::new();

        for edge in edges {
            let from = id_index.get(&edge.source).copied();
            let to = id_index.get(&edge.target).copied();

            match (from, to) {
                (Some(from), Some(to)) => resolved.push((from, to, edge)),
                _ => {
                    if from.is_none() {
                        missing.insert(edge.source);
                    }
                    if to.is_none() {
                        missing.insert(edge.target);
                    }
                }
            }
        }

        if !missing.is_empty() {
            let missing: Vec<String> = missing.into_iter().collect();
            warn!(?missing, "edges reference undefined nodes");
            return Err(GraphIntegrityError::MissingNodes { missing });
        }

        for (from, to, edge) in resolved {
            graph.add_edge(from, to, edge);
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "knowledge graph built"
        );

        Ok(KnowledgeGraph::from_parts(graph, id_index))
    }
}
