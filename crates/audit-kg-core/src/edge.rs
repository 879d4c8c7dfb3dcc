//! Relationship type for the knowledge graph.

use serde::{Deserialize, Serialize};

/// A directed, labeled relationship between two nodes.
///
/// `source` and `target` are node ids. `relation` is free text such as
/// `has_risk` or `mitigated_by`. Self-loops and repeated edges are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Edge {
    /// Id of the node the edge starts at.
    pub source: String,

    /// Id of the node the edge points to.
    pub target: String,

    /// What the relationship means.
    pub relation: String,
}

impl Edge {
    /// Creates a new edge.
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        relation: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            relation: relation.into(),
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} --{}--> {}", self.source, self.relation, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_serializes_fields_in_order() {
        let edge = Edge::new("a", "b", "rel");
        let json = serde_json::to_string(&edge).unwrap();
        assert_eq!(json, r#"{"source":"a","target":"b","relation":"rel"}"#);
    }

    #[test]
    fn test_edge_display() {
        let edge = Edge::new("vendor:iam", "system:iam", "operates");
        assert_eq!(edge.to_string(), "vendor:iam --operates--> system:iam");
    }
}
