//! Ollama `/api/generate` transport
//!
//! Non-streaming generation over plain HTTP. The raw response body is
//! returned untouched; the `response` field is read by the inference client.

mod transport;
mod types;

pub use transport::OllamaTransport;
pub use types::{GenerateOptions, GenerateRequest};
