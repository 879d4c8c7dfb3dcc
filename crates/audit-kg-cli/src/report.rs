//! Human-readable report rendering.

use audit_kg_graph::{export_document, summarize_by_category, ExportError, KnowledgeGraph};

/// Renders the category overview, relationship list and JSON preview.
pub fn render_report(graph: &KnowledgeGraph) -> Result<String, ExportError> {
    let mut out = String::from("=== Knowledge Graph Overview ===\n");

    for (category, bucket) in summarize_by_category(graph).iter() {
        out.push_str(&format!("\n{}:\n", category.to_uppercase()));
        for node in bucket {
            out.push_str(&format!("  - {} ({})\n", node.label, node.id));
        }
    }

    out.push_str("\nRELATIONSHIPS:\n");
    for edge in graph.edges() {
        out.push_str(&format!("  {}\n", edge));
    }

    out.push_str("\nJSON export preview:\n");
    out.push_str(&export_document(graph).to_json_pretty()?);
    out.push('\n');

    Ok(out)
}
