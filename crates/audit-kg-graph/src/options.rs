//! Build-time configuration.

use serde::{Deserialize, Serialize};

/// What the builder does when two input nodes share an id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateIdPolicy {
    /// The later node replaces the earlier one but keeps its position.
    #[default]
    LastWriteWins,

    /// Fail with `GraphIntegrityError::DuplicateNodeIds`.
    Reject,
}

impl std::fmt::Display for DuplicateIdPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::LastWriteWins => "last_write_wins",
            Self::Reject => "reject",
        };
        write!(f, "{}", s)
    }
}

/// Options controlling how strictly input is validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    pub duplicate_ids: DuplicateIdPolicy,
}

impl BuildOptions {
    /// Options that reject duplicate node ids.
    pub fn strict() -> Self {
        Self {
            duplicate_ids: DuplicateIdPolicy::Reject,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_last_write_wins() {
        assert_eq!(
            BuildOptions::default().duplicate_ids,
            DuplicateIdPolicy::LastWriteWins
        );
    }

    #[test]
    fn test_deserialize_partial_options() {
        let options: BuildOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, BuildOptions::default());

        let options: BuildOptions =
            serde_json::from_str(r#"{"duplicate_ids":"reject"}"#).unwrap();
        assert_eq!(options, BuildOptions::strict());
    }
}
