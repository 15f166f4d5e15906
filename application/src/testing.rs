//! Shared test doubles for the application layer

use crate::ports::inference_transport::{InferenceRequest, InferenceTransport, TransportError};
use async_trait::async_trait;
use jobshift_domain::ResponseFormat;
use std::sync::Mutex;

type Responder = dyn Fn(&str) -> Result<String, TransportError> + Send + Sync;

/// Transport that answers through a closure and records every prompt
///
/// The closure returns the generated text; the transport wraps it in an
/// Ollama-style `{"response": ...}` envelope.
pub(crate) struct RecordingTransport {
    responder: Box<Responder>,
    prompts: Mutex<Vec<String>>,
    configured: bool,
}

impl RecordingTransport {
    pub(crate) fn new(
        responder: impl Fn(&str) -> Result<String, TransportError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            responder: Box::new(responder),
            prompts: Mutex::new(Vec::new()),
            configured: true,
        }
    }

    /// Answers `"{prefix}: {first prompt line}"`
    pub(crate) fn echo_prefix(prefix: &str) -> Self {
        let prefix = prefix.to_string();
        Self::new(move |prompt| {
            Ok(format!(
                "{}: {}",
                prefix,
                prompt.lines().next().unwrap_or_default()
            ))
        })
    }

    pub(crate) fn unconfigured(mut self) -> Self {
        self.configured = false;
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// First recorded prompt containing `needle`
    pub(crate) fn prompt_containing(&self, needle: &str) -> Option<String> {
        self.prompts()
            .into_iter()
            .find(|prompt| prompt.contains(needle))
    }
}

#[async_trait]
impl InferenceTransport for RecordingTransport {
    fn name(&self) -> &str {
        "recording"
    }

    fn response_format(&self) -> ResponseFormat {
        ResponseFormat::OllamaGenerate
    }

    fn ensure_configured(&self) -> Result<(), String> {
        if self.configured {
            Ok(())
        } else {
            Err("credentials not found".to_string())
        }
    }

    async fn send(&self, request: &InferenceRequest) -> Result<String, TransportError> {
        self.prompts.lock().unwrap().push(request.prompt.clone());
        let text = (self.responder)(&request.prompt)?;
        Ok(serde_json::json!({ "response": text }).to_string())
    }
}
