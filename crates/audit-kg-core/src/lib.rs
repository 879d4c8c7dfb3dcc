//! Audit KG Core - value types for the audit knowledge graph
//!
//! Entities are [`Node`]s, relationships between them are directed,
//! labeled [`Edge`]s. Both are plain immutable records: they carry data,
//! not behaviour. Validation lives in `audit-kg-graph`.
//!
//! # Example
//!
//! ```
//! use audit_kg_core::{Edge, Node};
//!
//! let ap = Node::new("auditable:ap", "Accounts Payable", "auditable_entity");
//! let fraud = Node::new("risk:ap-fraud", "Vendor payment fraud", "risk");
//! let edge = Edge::new(&ap.id, &fraud.id, "has_risk");
//!
//! assert_eq!(edge.source, "auditable:ap");
//! ```

mod edge;
mod node;

pub use edge::Edge;
pub use node::Node;
