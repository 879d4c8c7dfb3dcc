//! CLI command implementations.

use crate::report::render_report;
use crate::sample::sample_graph;
use audit_kg_graph::{export_document, BuildOptions, GraphDocument, KnowledgeGraph};
use colored::Colorize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Loads a graph from a document file, or the bundled sample when no
/// file is given.
pub fn load_graph(input: Option<&Path>, options: BuildOptions) -> Result<KnowledgeGraph> {
    match input {
        Some(path) => {
            debug!(path = %path.display(), "reading graph document");
            let json = fs::read_to_string(path)?;
            Ok(GraphDocument::parse_graph(&json, options)?)
        }
        None => {
            debug!("using bundled sample graph");
            Ok(sample_graph()?)
        }
    }
}

/// Print the human-readable report.
pub fn report(input: Option<&Path>) -> Result<()> {
    let graph = load_graph(input, BuildOptions::default())?;
    print!("{}", render_report(&graph)?);
    Ok(())
}

/// Export the graph document to a file or stdout.
pub fn export(input: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let graph = load_graph(input, BuildOptions::default())?;
    let json = export_document(&graph).to_json_pretty()?;

    match output {
        Some(path) => {
            fs::write(path, format!("{}\n", json))?;
            info!(
                nodes = graph.node_count(),
                edges = graph.edge_count(),
                "graph exported"
            );
            println!("{} Exported to {}", "✓".green(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Validate a graph document.
pub fn validate(input: &Path, strict: bool) -> Result<()> {
    let options = if strict {
        BuildOptions::strict()
    } else {
        BuildOptions::default()
    };

    let graph = load_graph(Some(input), options)?;
    let stats = graph.stats();

    println!(
        "{} {} is valid ({} nodes, {} edges, {} categories)",
        "✓".green(),
        input.display(),
        stats.node_count.to_string().cyan(),
        stats.edge_count.to_string().cyan(),
        stats.category_count.to_string().cyan()
    );

    Ok(())
}

/// Show graph statistics.
pub fn stats(input: Option<&Path>, json: bool) -> Result<()> {
    let graph = load_graph(input, BuildOptions::default())?;
    let stats = graph.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", "Knowledge Graph Status".cyan().bold());
    println!("  Nodes:      {}", stats.node_count.to_string().green());
    println!("  Edges:      {}", stats.edge_count.to_string().green());
    println!("  Categories: {}", stats.category_count.to_string().green());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use audit_kg_graph::{Edge, ExportError, Node};
    use tempfile::tempdir;

    #[test]
    fn test_load_defaults_to_sample() {
        let graph = load_graph(None, BuildOptions::default()).unwrap();
        assert_eq!(graph.node_count(), 28);
    }

    #[test]
    fn test_sample_stats_json_shape() {
        let graph = load_graph(None, BuildOptions::default()).unwrap();
        let json = serde_json::to_value(graph.stats()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "node_count": 28,
                "edge_count": 31,
                "category_count": 9
            })
        );

        assert!(stats(None, true).is_ok());
        assert!(stats(None, false).is_ok());
    }

    #[test]
    fn test_export_to_stdout() {
        assert!(export(None, None).is_ok());
    }

    #[test]
    fn test_stats_from_missing_file_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert!(stats(Some(path.as_path()), true).is_err());
    }

    #[test]
    fn test_export_then_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.json");

        export(None, Some(path.as_path())).unwrap();
        let loaded = load_graph(Some(path.as_path()), BuildOptions::default()).unwrap();

        assert_eq!(loaded, sample_graph().unwrap());
    }

    #[test]
    fn test_load_reports_missing_nodes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        let document = GraphDocument {
            nodes: vec![Node::new("a", "A", "x")],
            edges: vec![Edge::new("a", "y", "r"), Edge::new("x", "a", "r")],
        };
        fs::write(&path, document.to_json_pretty().unwrap()).unwrap();

        let err = load_graph(Some(path.as_path()), BuildOptions::default()).unwrap_err();
        match err.downcast_ref::<ExportError>() {
            Some(ExportError::Integrity(integrity)) => {
                assert_eq!(integrity.ids(), ["x".to_string(), "y".to_string()]);
            }
            other => panic!("expected integrity error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_strict_rejects_duplicates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dup.json");
        let document = GraphDocument {
            nodes: vec![Node::new("a", "A", "x"), Node::new("a", "B", "x")],
            edges: Vec::new(),
        };
        fs::write(&path, document.to_json_pretty().unwrap()).unwrap();

        assert!(validate(&path, false).is_ok());
        assert!(validate(&path, true).is_err());
    }
}
