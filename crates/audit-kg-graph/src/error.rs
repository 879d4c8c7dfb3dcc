use thiserror::Error;

/// Raised by the builder when the input cannot form a consistent graph.
///
/// Every id list is sorted ascending and deduplicated, so a caller can fix
/// all problems in one pass.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphIntegrityError {
    #[error("edges reference undefined nodes: {missing:?}")]
    MissingNodes { missing: Vec<String> },

    #[error("duplicate node ids: {ids:?}")]
    DuplicateNodeIds { ids: Vec<String> },
}

impl GraphIntegrityError {
    /// The ids that caused the failure.
    pub fn ids(&self) -> &[String] {
        match self {
            Self::MissingNodes { missing } => missing,
            Self::DuplicateNodeIds { ids } => ids,
        }
    }
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Integrity error: {0}")]
    Integrity(#[from] GraphIntegrityError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_nodes_message() {
        let err = GraphIntegrityError::MissingNodes {
            missing: vec!["x".to_string(), "y".to_string()],
        };
        assert_eq!(err.to_string(), r#"edges reference undefined nodes: ["x", "y"]"#);
        assert_eq!(err.ids(), ["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn test_export_error_wraps_integrity() {
        let err: ExportError = GraphIntegrityError::DuplicateNodeIds {
            ids: vec!["a".to_string()],
        }
        .into();
        assert!(err.to_string().contains("duplicate node ids"));
    }
}
