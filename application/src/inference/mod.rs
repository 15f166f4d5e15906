//! Retry-resilient inference client

mod client;
mod error;

pub use client::InferenceClient;
pub use error::InferenceError;
