//! Audit KG Graph - validated knowledge graph construction
//!
//! This crate turns caller-supplied node and edge lists into an immutable
//! [`KnowledgeGraph`], refusing any input where an edge points at a node
//! that was never defined. Two pure projections are derived from a built
//! graph:
//!
//! - [`summarize_by_category`] groups nodes by their category tag, each
//!   group sorted by label
//! - [`export_document`] produces the canonical `{nodes, edges}` document
//!
//! # Example
//!
//! ```
//! use audit_kg_graph::{build, export_document, summarize_by_category, Edge, Node};
//!
//! let graph = build(
//!     vec![
//!         Node::new("auditable:ap", "Accounts Payable", "auditable_entity"),
//!         Node::new("risk:ap-fraud", "Vendor payment fraud", "risk"),
//!     ],
//!     vec![Edge::new("auditable:ap", "risk:ap-fraud", "has_risk")],
//! )
//! .expect("all edge endpoints are defined");
//!
//! let groups = summarize_by_category(&graph);
//! assert_eq!(groups.get("risk").map(|bucket| bucket.len()), Some(1));
//!
//! let document = export_document(&graph);
//! assert_eq!(document.edges[0].relation, "has_risk");
//! ```

mod builder;
mod category;
mod error;
mod export;
mod graph;
mod options;

pub use audit_kg_core::{Edge, Node};
pub use builder::{build, GraphBuilder};
pub use category::{summarize_by_category, CategoryIndex};
pub use error::{ExportError, GraphIntegrityError};
pub use export::{export_document, GraphDocument};
pub use graph::{GraphStats, KnowledgeGraph};
pub use options::{BuildOptions, DuplicateIdPolicy};
