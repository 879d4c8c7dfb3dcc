//! Grouping of nodes by category.

use crate::graph::KnowledgeGraph;
use audit_kg_core::Node;
use serde::Serialize;
use std::collections::BTreeMap;

/// Nodes grouped by their `category` tag.
///
/// Categories iterate in ascending order. Within a bucket nodes are sorted
/// by label; equal labels keep graph order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryIndex {
    buckets: BTreeMap<String, Vec<Node>>,
}

impl CategoryIndex {
    /// Nodes in a category, or `None` if no node carries it.
    pub fn get(&self, category: &str) -> Option<&[Node]> {
        self.buckets.get(category).map(Vec::as_slice)
    }

    /// Category names in ascending order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Node])> {
        self.buckets
            .iter()
            .map(|(category, bucket)| (category.as_str(), bucket.as_slice()))
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of nodes across all buckets.
    pub fn total_nodes(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}

/// Groups every node of the graph by category.
pub fn summarize_by_category(graph: &KnowledgeGraph) -> CategoryIndex {
    let mut buckets: BTreeMap<String, Vec<Node>> = BTreeMap::new();

    for node in graph.nodes() {
        buckets
            .entry(node.category.clone())
            .or_default()
            .push(node.clone());
    }

    // sort_by is stable
    for bucket in buckets.values_mut() {
        bucket.sort_by(|a, b| a.label.cmp(&b.label));
    }

    CategoryIndex { buckets }
}
