//! Inference and retry configuration from TOML (`[inference]`, `[retry]`)

use jobshift_domain::ExecutionMode;
use serde::{Deserialize, Serialize};

/// Sampling parameters and stage scheduling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInferenceConfig {
    /// Sampling temperature, 0.0 to 1.0
    pub temperature: f32,
    /// Upper bound on generated tokens
    pub max_tokens: u32,
    /// `sequential` or `concurrent`
    pub mode: ExecutionMode,
}

impl Default for FileInferenceConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 4000,
            mode: ExecutionMode::Sequential,
        }
    }
}

/// Retry budget for each inference call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRetryConfig {
    /// Total attempts including the first call
    pub max_attempts: u32,
    /// Delay after the first failure; doubles on each further failure
    pub backoff_base_ms: u64,
    /// Upper bound on a single delay; 0 disables the cap
    pub max_delay_ms: u64,
}

impl Default for FileRetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_base_ms: 1_000,
            max_delay_ms: 30_000,
        }
    }
}
