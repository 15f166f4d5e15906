//! Inference client errors

use crate::ports::inference_transport::TransportError;
use thiserror::Error;

/// Errors returned by [`InferenceClient::invoke`](super::InferenceClient::invoke)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InferenceError {
    /// Credentials or endpoint missing; raised before any network call
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Transport kept failing until the retry budget ran out
    #[error("failed after {attempts} attempts: {source}")]
    Transient {
        attempts: u32,
        #[source]
        source: TransportError,
    },

    /// Body could not be parsed or located, even after repair
    #[error("unexpected response shape after {attempts} attempts: {detail}")]
    ResponseShape { attempts: u32, detail: String },
}

impl InferenceError {
    /// Whether the retry budget was spent before failing
    pub fn is_exhausted(&self) -> bool {
        matches!(
            self,
            InferenceError::Transient { .. } | InferenceError::ResponseShape { .. }
        )
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, InferenceError::Configuration(_))
    }
}
