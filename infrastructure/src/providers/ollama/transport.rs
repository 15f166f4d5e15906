//! Ollama HTTP transport

use super::types::GenerateRequest;
use crate::config::FileOllamaConfig;
use crate::providers::ProviderError;
use async_trait::async_trait;
use jobshift_application::ports::inference_transport::{
    InferenceRequest, InferenceTransport, TransportError,
};
use jobshift_domain::ResponseFormat;
use std::time::Duration;
use tracing::debug;

/// Error bodies longer than this are cut before they reach logs
const MAX_ERROR_BODY: usize = 500;

pub struct OllamaTransport {
    client: reqwest::Client,
    url: String,
}

impl OllamaTransport {
    pub fn new(config: &FileOllamaConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ProviderError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl InferenceTransport for OllamaTransport {
    fn name(&self) -> &str {
        "ollama"
    }

    fn response_format(&self) -> ResponseFormat {
        ResponseFormat::OllamaGenerate
    }

    fn ensure_configured(&self) -> Result<(), String> {
        if self.url.trim().is_empty() {
            return Err("Ollama URL is not set (OLLAMA_URL)".to_string());
        }
        reqwest::Url::parse(&self.url)
            .map(|_| ())
            .map_err(|e| format!("invalid Ollama URL '{}': {}", self.url, e))
    }

    async fn send(&self, request: &InferenceRequest) -> Result<String, TransportError> {
        debug!(
            url = %self.url,
            model = %request.model_id,
            "Calling Ollama generate API"
        );

        let response = self
            .client
            .post(&self.url)
            .json(&GenerateRequest::from(request))
            .send()
            .await
            .map_err(convert_error)?;

        let status = response.status();
        let body = response.text().await.map_err(convert_error)?;

        if !status.is_success() {
            return Err(TransportError::service(
                Some(status.as_u16()),
                truncate(&body),
            ));
        }

        Ok(body)
    }
}

fn convert_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection(err.to_string())
    } else {
        TransportError::service(err.status().map(|s| s.as_u16()), err.to_string())
    }
}

fn truncate(body: &str) -> String {
    match body.char_indices().nth(MAX_ERROR_BODY) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
