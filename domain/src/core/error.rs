//! Domain error types

use crate::context::prompt_context::ContextKey;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid job title: {0}")]
    InvalidJobTitle(String),

    /// A template was asked to render before its upstream input existed.
    #[error("Missing upstream context '{key}' required by {agent}")]
    MissingContext { agent: &'static str, key: ContextKey },

    #[error("Context key '{0}' is already populated")]
    DuplicateContext(ContextKey),

    #[error("Report is incomplete, missing sections: {}", .missing.join(", "))]
    IncompleteReport { missing: Vec<&'static str> },
}

impl DomainError {
    /// Check if this error is a violated stage dependency
    pub fn is_missing_context(&self) -> bool {
        matches!(self, DomainError::MissingContext { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_context_display() {
        let error = DomainError::MissingContext {
            agent: "Mission & Task Agent",
            key: ContextKey::JobDescription,
        };
        assert_eq!(
            error.to_string(),
            "Missing upstream context 'job_desc' required by Mission & Task Agent"
        );
        assert!(error.is_missing_context());
    }

    #[test]
    fn test_incomplete_report_lists_sections() {
        let error = DomainError::IncompleteReport {
            missing: vec!["ai_enhancements", "transition_plan"],
        };
        assert_eq!(
            error.to_string(),
            "Report is incomplete, missing sections: ai_enhancements, transition_plan"
        );
        assert!(!error.is_missing_context());
    }
}
