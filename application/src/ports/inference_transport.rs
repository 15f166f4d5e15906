//! Inference transport port
//!
//! Defines the interface for sending one request to a text-generation
//! backend. Retries, backoff and response decoding live above this port in
//! [`InferenceClient`](crate::inference::InferenceClient); a transport makes
//! exactly one call per `send`.

use async_trait::async_trait;
use jobshift_domain::{InferenceParams, ResponseFormat};
use thiserror::Error;

/// Errors raised by a single transport call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connection(String),

    #[error("request timed out")]
    Timeout,

    /// The backend answered with an error (HTTP status or SDK service error)
    #[error("service error{}: {message}", .status.map(|s| format!(" (status {s})")).unwrap_or_default())]
    Service {
        status: Option<u16>,
        message: String,
    },
}

impl TransportError {
    pub fn service(status: Option<u16>, message: impl Into<String>) -> Self {
        TransportError::Service {
            status,
            message: message.into(),
        }
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, TransportError::Connection(_) | TransportError::Timeout)
    }
}

/// A single non-streaming generation request
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceRequest {
    pub model_id: String,
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl InferenceRequest {
    pub fn new(params: &InferenceParams, prompt: impl Into<String>) -> Self {
        Self {
            model_id: params.model_id.clone(),
            prompt: prompt.into(),
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        }
    }
}

/// Transport to a text-generation backend
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait InferenceTransport: Send + Sync {
    /// Short backend name used in logs
    fn name(&self) -> &str;

    /// Envelope format of the raw bodies returned by [`send`](Self::send)
    fn response_format(&self) -> ResponseFormat;

    /// Check credentials and endpoint before any network call.
    ///
    /// Returns a human-readable reason when the transport cannot be used.
    fn ensure_configured(&self) -> Result<(), String>;

    /// Send one request and return the raw response body
    async fn send(&self, request: &InferenceRequest) -> Result<String, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_display() {
        assert_eq!(
            TransportError::service(Some(503), "overloaded").to_string(),
            "service error (status 503): overloaded"
        );
        assert_eq!(
            TransportError::service(None, "throttled").to_string(),
            "service error: throttled"
        );
    }

    #[test]
    fn test_connection_classification() {
        assert!(TransportError::Connection("refused".into()).is_connection());
        assert!(TransportError::Timeout.is_connection());
        assert!(!TransportError::service(Some(500), "boom").is_connection());
    }

    #[test]
    fn test_request_takes_params() {
        let params = InferenceParams::new("llama3").with_temperature(0.3);
        let request = InferenceRequest::new(&params, "hi");
        assert_eq!(request.model_id, "llama3");
        assert_eq!(request.prompt, "hi");
        assert_eq!(request.temperature, 0.3);
        assert_eq!(request.max_tokens, params.max_tokens);
    }
}
