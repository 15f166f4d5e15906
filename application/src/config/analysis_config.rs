//! Immutable configuration for the analysis use case

use jobshift_domain::{ExecutionMode, InferenceParams, RetryPolicy};

/// Configuration for a job analysis run.
///
/// Built once at startup and passed by value into the use case; nothing
/// mutates it afterwards. Endpoint and credential details belong to the
/// transport adapter and are not part of it.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub inference: InferenceParams,
    pub retry: RetryPolicy,
    pub mode: ExecutionMode,
}

impl AnalysisConfig {
    pub fn new(inference: InferenceParams) -> Self {
        Self {
            inference,
            retry: RetryPolicy::default(),
            mode: ExecutionMode::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }
}
