//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod inference_transport;
pub mod progress;
pub mod response_repair;
