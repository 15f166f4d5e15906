//! Inference transports
//!
//! Adapters implementing the [`InferenceTransport`] port:
//!
//! - [`ollama::OllamaTransport`]: HTTP `POST /api/generate` (always compiled)
//! - `bedrock::BedrockTransport`: AWS Bedrock `InvokeModel` (feature `bedrock`)

pub mod bedrock;
pub mod ollama;

use crate::config::FileConfig;
use jobshift_application::ports::inference_transport::InferenceTransport;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors raised while selecting or building a transport
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("unknown provider '{0}' (expected 'ollama' or 'bedrock')")]
    UnknownProvider(String),

    #[error("provider '{0}' is not compiled in (rebuild with `--features {0}`)")]
    NotCompiled(&'static str),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Supported inference backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    #[default]
    Ollama,
    Bedrock,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Ollama => "ollama",
            ProviderKind::Bedrock => "bedrock",
        }
    }
}

impl FromStr for ProviderKind {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ollama" => Ok(ProviderKind::Ollama),
            "bedrock" | "claude" => Ok(ProviderKind::Bedrock),
            _ => Err(ProviderError::UnknownProvider(s.to_string())),
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Build the transport selected by `config.provider`
pub async fn build_transport(
    config: &FileConfig,
) -> Result<Arc<dyn InferenceTransport>, ProviderError> {
    let kind: ProviderKind = config.provider.parse()?;
    info!(provider = %kind, "Initializing inference transport");

    match kind {
        ProviderKind::Ollama => Ok(Arc::new(ollama::OllamaTransport::new(&config.ollama)?)),
        ProviderKind::Bedrock => build_bedrock(config).await,
    }
}

#[cfg(feature = "bedrock")]
async fn build_bedrock(
    config: &FileConfig,
) -> Result<Arc<dyn InferenceTransport>, ProviderError> {
    Ok(Arc::new(
        bedrock::BedrockTransport::new(&config.bedrock).await,
    ))
}

#[cfg(not(feature = "bedrock"))]
async fn build_bedrock(
    _config: &FileConfig,
) -> Result<Arc<dyn InferenceTransport>, ProviderError> {
    Err(ProviderError::NotCompiled("bedrock"))
}
