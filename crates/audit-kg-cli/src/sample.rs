//! Bundled sample dataset: two auditable entities (Accounts Payable and
//! User Access Management) with their risks, controls, regulations,
//! vendors, systems, GL accounts, test procedures and analytics.

use audit_kg_core::{Edge, Node};
use audit_kg_graph::{build, GraphIntegrityError, KnowledgeGraph};

/// (id, label, category)
const NODES: &[(&str, &str, &str)] = &[
    // Auditable entities
    ("auditable:ap", "Accounts Payable", "auditable_entity"),
    ("auditable:uac", "User Access Management", "auditable_entity"),
    // Risks
    ("risk:ap-fraud", "Vendor payment fraud", "risk"),
    ("risk:ap-dup", "Duplicate invoice processing", "risk"),
    ("risk:uac-priv", "Excessive privileged access", "risk"),
    ("risk:uac-term", "Terminated user retains access", "risk"),
    // Controls
    ("control:ap-three-way", "3-way match before payment", "control"),
    ("control:ap-sod", "Segregation of duties for invoice approval", "control"),
    ("control:uac-cert", "Quarterly access certification", "control"),
    ("control:uac-join-leaver", "Joiner-mover-leaver process", "control"),
    // Regulations
    ("reg:sox", "SOX 404", "regulation"),
    ("reg:gdpr", "GDPR Article 32", "regulation"),
    // Vendors
    ("vendor:ap-platform", "PayMeNow Outsourcing", "vendor"),
    ("vendor:iam", "SecureID Identity", "vendor"),
    // Systems
    ("system:erp", "Oracle ERP", "system"),
    ("system:ap-portal", "Supplier Portal", "system"),
    ("system:iam", "SailPoint", "system"),
    ("system:hris", "Workday", "system"),
    // GL accounts
    ("gl:2000", "2000 - Accounts Payable", "gl_account"),
    ("gl:6105", "6105 - Software Subscriptions", "gl_account"),
    // Test procedures
    ("test:ap-samples", "Sample invoices for 3-way match evidence", "test_procedure"),
    ("test:ap-analytics", "Identify duplicate invoice numbers", "test_procedure"),
    ("test:uac-recert", "Review access certification evidence", "test_procedure"),
    ("test:uac-terminations", "Check leaver access revocation within SLA", "test_procedure"),
    // Audit analytics
    ("analytic:ap-dup", "Duplicate invoice detection by vendor/amount/date", "audit_analytic"),
    ("analytic:ap-outlier", "Benford analysis on invoice amounts", "audit_analytic"),
    ("analytic:uac-stale", "Stale accounts without recent login", "audit_analytic"),
    ("analytic:uac-priv", "Privileged role change monitoring", "audit_analytic"),
];

/// (source, target, relation)
const EDGES: &[(&str, &str, &str)] = &[
    // Auditable entity to risk
    ("auditable:ap", "risk:ap-fraud", "has_risk"),
    ("auditable:ap", "risk:ap-dup", "has_risk"),
    ("auditable:uac", "risk:uac-priv", "has_risk"),
    ("auditable:uac", "risk:uac-term", "has_risk"),
    // Risk to control
    ("risk:ap-fraud", "control:ap-three-way", "mitigated_by"),
    ("risk:ap-fraud", "control:ap-sod", "mitigated_by"),
    ("risk:ap-dup", "control:ap-three-way", "mitigated_by"),
    ("risk:uac-priv", "control:uac-cert", "mitigated_by"),
    ("risk:uac-term", "control:uac-join-leaver", "mitigated_by"),
    // Regulation coverage
    ("control:ap-three-way", "reg:sox", "supports_regulation"),
    ("control:ap-sod", "reg:sox", "supports_regulation"),
    ("control:uac-cert", "reg:sox", "supports_regulation"),
    ("control:uac-join-leaver", "reg:gdpr", "supports_regulation"),
    // Vendors and systems
    ("auditable:ap", "vendor:ap-platform", "outsourced_to"),
    ("auditable:uac", "vendor:iam", "outsourced_to"),
    ("vendor:ap-platform", "system:ap-portal", "operates"),
    ("vendor:iam", "system:iam", "operates"),
    ("system:iam", "system:hris", "ingests_identity_from"),
    ("auditable:ap", "system:erp", "records_in"),
    ("auditable:ap", "system:ap-portal", "records_in"),
    // GL coverage
    ("auditable:ap", "gl:2000", "posts_to"),
    ("auditable:uac", "gl:6105", "impacts_expense"),
    // Test procedures linked to controls
    ("control:ap-three-way", "test:ap-samples", "validated_by"),
    ("control:ap-three-way", "test:ap-analytics", "validated_by"),
    ("control:uac-cert", "test:uac-recert", "validated_by"),
    ("control:uac-join-leaver", "test:uac-terminations", "validated_by"),
    // Audit analytics linked to procedures
    ("test:ap-analytics", "analytic:ap-dup", "uses"),
    ("risk:ap-dup", "analytic:ap-dup", "informed_by"),
    ("risk:ap-fraud", "analytic:ap-outlier", "informed_by"),
    ("test:uac-terminations", "analytic:uac-stale", "uses"),
    ("risk:uac-priv", "analytic:uac-priv", "informed_by"),
];

pub fn sample_nodes() -> Vec<Node> {
    NODES
        .iter()
        .map(|&(id, label, category)| Node::new(id, label, category))
        .collect()
}

pub fn sample_edges() -> Vec<Edge> {
    EDGES
        .iter()
        .map(|&(source, target, relation)| Edge::new(source, target, relation))
        .collect()
}

/// Builds the sample graph.
pub fn sample_graph() -> Result<KnowledgeGraph, GraphIntegrityError> {
    build(sample_nodes(), sample_edges())
}
