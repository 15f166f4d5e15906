//! Agent errors

use crate::inference::InferenceError;
use jobshift_domain::DomainError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    /// Rendered before its upstream context existed; an orchestration bug
    #[error("stage dependency violated: {0}")]
    StageDependency(#[source] DomainError),

    #[error(transparent)]
    Inference(#[from] InferenceError),
}

impl From<DomainError> for AgentError {
    fn from(error: DomainError) -> Self {
        AgentError::StageDependency(error)
    }
}
