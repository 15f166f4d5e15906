//! AWS Bedrock `InvokeModel` transport
//!
//! Sends the Anthropic messages body to Claude models on Bedrock with
//! explicit IAM keys or a named AWS profile. The transport itself is only
//! compiled with the `bedrock` feature; model id mapping is always
//! available so configuration can be resolved without the AWS SDK.

pub mod model_map;

#[cfg(feature = "bedrock")]
mod transport;
#[cfg(feature = "bedrock")]
mod types;

#[cfg(feature = "bedrock")]
pub use transport::BedrockTransport;
