//! Response repair strategies
//!
//! Implementations of the [`ResponseRepair`] port used when a backend
//! returns a body that is not quite valid JSON.
//!
//! [`ResponseRepair`]: jobshift_application::ports::response_repair::ResponseRepair

mod json_repair;

pub use json_repair::{LenientJsonRepair, strip_json_fences};
