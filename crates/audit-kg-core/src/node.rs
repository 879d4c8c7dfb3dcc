//! Entity type for the knowledge graph.

use serde::{Deserialize, Serialize};

/// An entity in the knowledge graph.
///
/// `id` is caller-assigned and must be unique within a graph. By convention
/// it looks like `<category-prefix>:<slug>` (e.g. `risk:ap-fraud`), but any
/// string is accepted. `category` is an open tag: new categories need no
/// code change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Node {
    /// Unique identifier.
    pub id: String,

    /// Human-readable name.
    pub label: String,

    /// Grouping tag (e.g. "risk", "control").
    pub category: String,
}

impl Node {
    /// Creates a new node.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            category: category.into(),
        }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label, self.id)
    }
}
