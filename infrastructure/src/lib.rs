//! Infrastructure layer for jobshift
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer (inference transports, response repair) and the
//! configuration file loading.

pub mod config;
pub mod providers;
pub mod repair;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileBedrockConfig, FileConfig, FileOllamaConfig,
    FileOutputConfig, FileReplConfig,
};
pub use providers::{ProviderError, ProviderKind, build_transport, ollama::OllamaTransport};
pub use repair::LenientJsonRepair;

#[cfg(feature = "bedrock")]
pub use providers::bedrock::BedrockTransport;
