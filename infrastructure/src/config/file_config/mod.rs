//! Raw TOML configuration data types
//!
//! These structs mirror the config file. [`FileConfig::to_analysis_config`]
//! validates them and produces the immutable
//! [`AnalysisConfig`] the use case runs with.

mod inference;
mod output;
mod providers;
mod repl;

pub use inference::{FileInferenceConfig, FileRetryConfig};
pub use output::FileOutputConfig;
pub use providers::{
    DEFAULT_BEDROCK_MODEL, DEFAULT_BEDROCK_REGION, DEFAULT_OLLAMA_MODEL, DEFAULT_OLLAMA_URL,
    FileBedrockConfig, FileOllamaConfig,
};
pub use repl::FileReplConfig;

use crate::providers::ProviderKind;
use crate::providers::bedrock::model_map;
use jobshift_application::AnalysisConfig;
use jobshift_domain::{InferenceParams, RetryPolicy};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("temperature must be between 0.0 and 1.0 (got {0})")]
    InvalidTemperature(f32),

    #[error("max_tokens cannot be 0")]
    ZeroMaxTokens,

    #[error("retry.max_attempts cannot be 0")]
    ZeroMaxAttempts,

    #[error("model name cannot be empty")]
    EmptyModelName,

    #[error("unknown provider '{0}' (expected 'ollama' or 'bedrock')")]
    UnknownProvider(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// `ollama` or `bedrock`
    pub provider: String,
    pub inference: FileInferenceConfig,
    pub retry: FileRetryConfig,
    pub ollama: FileOllamaConfig,
    pub bedrock: FileBedrockConfig,
    pub output: FileOutputConfig,
    pub repl: FileReplConfig,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default().as_str().to_string(),
            inference: FileInferenceConfig::default(),
            retry: FileRetryConfig::default(),
            ollama: FileOllamaConfig::default(),
            bedrock: FileBedrockConfig::default(),
            output: FileOutputConfig::default(),
            repl: FileReplConfig::default(),
        }
    }
}

impl FileConfig {
    pub fn provider_kind(&self) -> Result<ProviderKind, ConfigValidationError> {
        self.provider
            .parse()
            .map_err(|_| ConfigValidationError::UnknownProvider(self.provider.clone()))
    }

    /// Model configured for the selected provider, as sent on the wire
    pub fn model_id(&self) -> Result<String, ConfigValidationError> {
        Ok(match self.provider_kind()? {
            ProviderKind::Ollama => self.ollama.model.trim().to_string(),
            ProviderKind::Bedrock => model_map::to_bedrock_model_id(
                &self.bedrock.model,
                self.bedrock.cross_region,
                &self.bedrock.region,
            ),
        })
    }

    /// Override the model of the selected provider
    pub fn set_model(&mut self, model: impl Into<String>) -> Result<(), ConfigValidationError> {
        match self.provider_kind()? {
            ProviderKind::Ollama => self.ollama.model = model.into(),
            ProviderKind::Bedrock => self.bedrock.model = model.into(),
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let temperature = self.inference.temperature;
        if !(0.0..=1.0).contains(&temperature) {
            return Err(ConfigValidationError::InvalidTemperature(temperature));
        }

        if self.inference.max_tokens == 0 {
            return Err(ConfigValidationError::ZeroMaxTokens);
        }

        if self.retry.max_attempts == 0 {
            return Err(ConfigValidationError::ZeroMaxAttempts);
        }

        if self.model_id()?.is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        Ok(())
    }

    /// Validate and convert into the application's run configuration
    pub fn to_analysis_config(&self) -> Result<AnalysisConfig, ConfigValidationError> {
        self.validate()?;

        let params = InferenceParams::new(self.model_id()?)
            .with_temperature(self.inference.temperature)
            .with_max_tokens(self.inference.max_tokens);

        let max_delay = match self.retry.max_delay_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        };
        let retry = RetryPolicy::new(self.retry.max_attempts)
            .with_backoff_base(Duration::from_millis(self.retry.backoff_base_ms))
            .with_max_delay(max_delay);

        Ok(AnalysisConfig::new(params)
            .with_retry_policy(retry)
            .with_mode(self.inference.mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobshift_domain::{ExecutionMode, OutputFormat};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
provider = "bedrock"

[inference]
temperature = 0.2
max_tokens = 2000
mode = "concurrent"

[retry]
max_attempts = 5
backoff_base_ms = 500

[bedrock]
region = "eu-west-1"
profile = "dev"
cross_region = true

[output]
format = "json"
color = false

[repl]
show_progress = false
history_file = "~/.local/share/jobshift/history.txt"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.provider_kind().unwrap(), ProviderKind::Bedrock);
        assert_eq!(config.inference.mode, ExecutionMode::Concurrent);
        assert_eq!(config.retry.max_attempts, 5);
        assert_eq!(config.retry.max_delay_ms, 30_000);
        assert_eq!(config.bedrock.profile.as_deref(), Some("dev"));
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
        assert_eq!(
            config.model_id().unwrap(),
            format!("eu.{DEFAULT_BEDROCK_MODEL}")
        );
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: FileConfig = toml::from_str("[ollama]\nmodel = \"mistral\"\n").unwrap();
        assert_eq!(config.provider, "ollama");
        assert_eq!(config.model_id().unwrap(), "mistral");
        assert_eq!(config.ollama.url, DEFAULT_OLLAMA_URL);
        assert_eq!(config.inference.temperature, 0.7);
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.model_id().unwrap(), DEFAULT_OLLAMA_MODEL);
    }

    #[test]
    fn test_validate_temperature_range() {
        let mut config = FileConfig::default();
        config.inference.temperature = 1.5;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidTemperature(1.5))
        );
        config.inference.temperature = f32::NAN;
        assert!(config.validate().is_err());
        config.inference.temperature = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_values() {
        let mut config = FileConfig::default();
        config.inference.max_tokens = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::ZeroMaxTokens));

        let mut config = FileConfig::default();
        config.retry.max_attempts = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::ZeroMaxAttempts));
    }

    #[test]
    fn test_validate_empty_model_name() {
        let mut config = FileConfig::default();
        config.ollama.model = "   ".to_string();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyModelName));
    }

    #[test]
    fn test_validate_unknown_provider() {
        let config = FileConfig {
            provider: "openai".to_string(),
            ..FileConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::UnknownProvider("openai".to_string()))
        );
    }

    #[test]
    fn test_set_model_targets_selected_provider() {
        let mut config = FileConfig {
            provider: "bedrock".to_string(),
            ..FileConfig::default()
        };
        config.set_model("anthropic.claude-3-5-sonnet").unwrap();
        assert_eq!(config.bedrock.model, "anthropic.claude-3-5-sonnet");
        assert_eq!(config.ollama.model, DEFAULT_OLLAMA_MODEL);
    }

    #[test]
    fn test_to_analysis_config() {
        let mut config = FileConfig::default();
        config.inference.temperature = 0.3;
        config.retry.max_delay_ms = 0;

        let analysis = config.to_analysis_config().unwrap();

        assert_eq!(analysis.inference.model_id, "llama3");
        assert_eq!(analysis.inference.temperature, 0.3);
        assert_eq!(analysis.inference.max_tokens, 4000);
        assert_eq!(analysis.retry.max_attempts, 3);
        assert_eq!(analysis.retry.backoff_base, Duration::from_secs(1));
        assert_eq!(analysis.retry.max_delay, None);
        assert_eq!(analysis.mode, ExecutionMode::Sequential);
    }
}
