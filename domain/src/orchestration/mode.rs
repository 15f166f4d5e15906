//! Execution mode for the fan-out stages

use serde::{Deserialize, Serialize};

/// How the three description-only stages are scheduled.
///
/// Both modes produce the same report; `Concurrent` only overlaps the
/// missions, technology and AI-enhancement calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// One stage at a time, in pipeline order (default)
    #[default]
    Sequential,
    /// Missions, technology and AI-enhancement stages run together
    Concurrent,
}

impl ExecutionMode {
    pub fn as_str(&self) -> &str {
        match self {
            ExecutionMode::Sequential => "sequential",
            ExecutionMode::Concurrent => "concurrent",
        }
    }
}

impl std::fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sequential() {
        assert_eq!(ExecutionMode::default(), ExecutionMode::Sequential);
    }

    #[test]
    fn test_deserialize_lowercase() {
        let mode: ExecutionMode = serde_json::from_str("\"concurrent\"").unwrap();
        assert_eq!(mode, ExecutionMode::Concurrent);
    }
}
