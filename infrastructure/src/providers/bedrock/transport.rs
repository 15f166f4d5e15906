//! Bedrock transport

use super::types::{self, MessagesRequest};
use crate::config::FileBedrockConfig;
use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client as BedrockClient;
use aws_sdk_bedrockruntime::config::Credentials;
use aws_smithy_types::Blob;
use jobshift_application::ports::inference_transport::{
    InferenceRequest, InferenceTransport, TransportError,
};
use jobshift_domain::ResponseFormat;
use tracing::{debug, info};

/// Where the AWS credentials come from
#[derive(Debug, Clone, PartialEq, Eq)]
enum CredentialSource {
    StaticKeys,
    Profile(String),
    /// Only one of the two keys was set
    Incomplete,
    Missing,
}

pub struct BedrockTransport {
    client: BedrockClient,
    region: String,
    credentials: CredentialSource,
}

impl BedrockTransport {
    /// Create a Bedrock Runtime client.
    ///
    /// Explicit keys win over a named profile. Nothing is contacted here;
    /// missing credentials surface through `ensure_configured`.
    pub async fn new(config: &FileBedrockConfig) -> Self {
        let credentials = credential_source(config);

        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));

        match (&credentials, &config.access_key_id, &config.secret_access_key) {
            (CredentialSource::StaticKeys, Some(key), Some(secret)) => {
                loader = loader.credentials_provider(Credentials::new(
                    key.clone(),
                    secret.clone(),
                    None,
                    None,
                    "jobshift",
                ));
            }
            (CredentialSource::Profile(profile), _, _) => {
                loader = loader.profile_name(profile);
            }
            _ => {}
        }

        let sdk_config = loader.load().await;
        info!(region = %config.region, "Bedrock transport initialized");

        Self {
            client: BedrockClient::new(&sdk_config),
            region: config.region.clone(),
            credentials,
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }
}

fn credential_source(config: &FileBedrockConfig) -> CredentialSource {
    let key = config.access_key_id.as_deref().filter(|k| !k.trim().is_empty());
    let secret = config
        .secret_access_key
        .as_deref()
        .filter(|s| !s.trim().is_empty());
    let profile = config.profile.as_deref().filter(|p| !p.trim().is_empty());

    match (key, secret, profile) {
        (Some(_), Some(_), _) => CredentialSource::StaticKeys,
        (None, None, Some(profile)) => CredentialSource::Profile(profile.to_string()),
        (None, None, None) => CredentialSource::Missing,
        _ => CredentialSource::Incomplete,
    }
}

#[async_trait]
impl InferenceTransport for BedrockTransport {
    fn name(&self) -> &str {
        "bedrock"
    }

    fn response_format(&self) -> ResponseFormat {
        ResponseFormat::AnthropicMessages
    }

    fn ensure_configured(&self) -> Result<(), String> {
        match &self.credentials {
            CredentialSource::StaticKeys | CredentialSource::Profile(_) => Ok(()),
            CredentialSource::Incomplete => Err(
                "both AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY must be set".to_string(),
            ),
            CredentialSource::Missing => Err(
                "AWS credentials are not set (AWS_ACCESS_KEY_ID / AWS_SECRET_ACCESS_KEY or bedrock.profile)"
                    .to_string(),
            ),
        }
    }

    async fn send(&self, request: &InferenceRequest) -> Result<String, TransportError> {
        let body = serde_json::to_vec(&MessagesRequest::from(request))
            .map_err(|e| TransportError::service(None, format!("failed to encode body: {}", e)))?;

        debug!(
            model = %request.model_id,
            region = %self.region,
            "Calling Bedrock InvokeModel"
        );

        let output = self
            .client
            .invoke_model()
            .model_id(&request.model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| types::convert_invoke_error(&e))?;

        Ok(String::from_utf8_lossy(output.body().as_ref()).into_owned())
    }
}
