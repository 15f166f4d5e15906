//! Inference domain
//!
//! Value objects describing a call to a text-generation backend: sampling
//! parameters, the retry/backoff policy and where the generated text lives
//! in a response envelope.

pub mod params;
pub mod response_format;
pub mod retry;

pub use params::InferenceParams;
pub use response_format::ResponseFormat;
pub use retry::RetryPolicy;
