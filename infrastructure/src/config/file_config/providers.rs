//! Provider configuration from TOML (`[ollama]`, `[bedrock]`)

use serde::{Deserialize, Serialize};

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3";
pub const DEFAULT_BEDROCK_MODEL: &str = "anthropic.claude-3-haiku-20240307-v1:0";
pub const DEFAULT_BEDROCK_REGION: &str = "us-east-1";

/// Ollama endpoint settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOllamaConfig {
    /// Full URL of the generate endpoint
    pub url: String,
    pub model: String,
    /// HTTP client timeout
    pub timeout_secs: u64,
}

impl Default for FileOllamaConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_OLLAMA_URL.to_string(),
            model: DEFAULT_OLLAMA_MODEL.to_string(),
            timeout_secs: 120,
        }
    }
}

/// AWS Bedrock settings
///
/// ```toml
/// [bedrock]
/// region = "eu-west-1"
/// profile = "dev"
/// cross_region = true
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBedrockConfig {
    pub region: String,
    pub model: String,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    /// Named AWS profile, used when no explicit keys are set
    pub profile: Option<String>,
    /// Prefix the model with the region's inference profile group
    pub cross_region: bool,
}

impl Default for FileBedrockConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_BEDROCK_REGION.to_string(),
            model: DEFAULT_BEDROCK_MODEL.to_string(),
            access_key_id: None,
            secret_access_key: None,
            profile: None,
            cross_region: false,
        }
    }
}

// Keep secrets out of `--show-config` and debug logs
impl std::fmt::Debug for FileBedrockConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileBedrockConfig")
            .field("region", &self.region)
            .field("model", &self.model)
            .field("access_key_id", &self.access_key_id.as_ref().map(|_| "<set>"))
            .field(
                "secret_access_key",
                &self.secret_access_key.as_ref().map(|_| "<set>"),
            )
            .field("profile", &self.profile)
            .field("cross_region", &self.cross_region)
            .finish()
    }
}
