//! Configuration loading for jobshift
//!
//! This module handles file I/O and merging of configuration from multiple
//! sources. The priority order (highest to lowest):
//!
//! 1. `JOBSHIFT_*` environment variables
//! 2. Legacy environment variables (`OLLAMA_URL`, `AWS_REGION`, ...)
//! 3. `--config <path>` specified file
//! 4. Project root: `./jobshift.toml` or `./.jobshift.toml`
//! 5. Global: `~/.config/jobshift/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_BEDROCK_MODEL, DEFAULT_BEDROCK_REGION, DEFAULT_OLLAMA_MODEL,
    DEFAULT_OLLAMA_URL, FileBedrockConfig, FileConfig, FileInferenceConfig, FileOllamaConfig,
    FileOutputConfig, FileReplConfig, FileRetryConfig,
};
pub use loader::ConfigLoader;
