//! Ollama request body

use jobshift_application::ports::inference_transport::InferenceRequest;
use serde::Serialize;

/// Body of `POST /api/generate`
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub stream: bool,
    pub options: GenerateOptions,
}

/// Sampling options; `num_predict` caps the generated tokens
#[derive(Debug, Clone, Serialize)]
pub struct GenerateOptions {
    pub temperature: f32,
    pub num_predict: u32,
}

impl<'a> From<&'a InferenceRequest> for GenerateRequest<'a> {
    fn from(request: &'a InferenceRequest) -> Self {
        Self {
            model: &request.model_id,
            prompt: &request.prompt,
            stream: false,
            options: GenerateOptions {
                temperature: request.temperature,
                num_predict: request.max_tokens,
            },
        }
    }
}
