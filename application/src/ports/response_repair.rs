//! Response repair port
//!
//! A secondary recovery path for response bodies that are not valid JSON
//! or lack the expected field. The strategy is chosen when the
//! [`InferenceClient`](crate::inference::InferenceClient) is built.

use serde_json::Value;

/// Best-effort structural repair of a raw response body
pub trait ResponseRepair: Send + Sync {
    /// Try to turn `raw` into a JSON value; `None` if it cannot be repaired
    fn repair(&self, raw: &str) -> Option<Value>;
}

/// Repair strategy that never recovers anything
pub struct NoRepair;

impl ResponseRepair for NoRepair {
    fn repair(&self, _raw: &str) -> Option<Value> {
        None
    }
}
