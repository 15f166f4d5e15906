//! Bedrock request body and error conversion

use aws_sdk_bedrockruntime::error::SdkError;
use aws_sdk_bedrockruntime::operation::invoke_model::InvokeModelError;
use jobshift_application::ports::inference_transport::{InferenceRequest, TransportError};
use serde::Serialize;

pub const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

/// Anthropic messages body for `InvokeModel`
#[derive(Debug, Serialize)]
pub struct MessagesRequest<'a> {
    pub anthropic_version: &'static str,
    pub max_tokens: u32,
    pub temperature: f32,
    pub messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Message<'a> {
    pub role: &'static str,
    pub content: Vec<TextBlock<'a>>,
}

#[derive(Debug, Serialize)]
pub struct TextBlock<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: &'a str,
}

impl<'a> From<&'a InferenceRequest> for MessagesRequest<'a> {
    fn from(request: &'a InferenceRequest) -> Self {
        Self {
            anthropic_version: ANTHROPIC_VERSION,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            messages: vec![Message {
                role: "user",
                content: vec![TextBlock {
                    kind: "text",
                    text: &request.prompt,
                }],
            }],
        }
    }
}

/// Convert an SDK error into a transport error.
///
/// Service errors keep their HTTP status; everything else (dispatch,
/// credentials, construction) is treated as a connection failure.
pub fn convert_invoke_error(err: &SdkError<InvokeModelError>) -> TransportError {
    match err {
        SdkError::ServiceError(service_err) => match service_err.err() {
            InvokeModelError::ModelTimeoutException(_) => TransportError::Timeout,
            other => TransportError::service(
                Some(service_err.raw().status().as_u16()),
                format!("Bedrock error: {}", other),
            ),
        },
        SdkError::TimeoutError(_) => TransportError::Timeout,
        other => TransportError::Connection(format!("Bedrock SDK error: {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobshift_domain::InferenceParams;
    use serde_json::json;

    #[test]
    fn test_messages_body() {
        let params = InferenceParams::new("anthropic.claude-3-haiku-20240307-v1:0")
            .with_max_tokens(1000);
        let request = InferenceRequest::new(&params, "Describe an Accountant");

        let body = serde_json::to_value(MessagesRequest::from(&request)).unwrap();

        assert_eq!(
            body,
            json!({
                "anthropic_version": "bedrock-2023-05-31",
                "max_tokens": 1000,
                "temperature": 0.7f32,
                "messages": [{
                    "role": "user",
                    "content": [{ "type": "text", "text": "Describe an Accountant" }]
                }]
            })
        );
    }
}
