//! Output format value object

use serde::{Deserialize, Serialize};

/// How a finished report is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored section headers in display order (default)
    #[default]
    Full,
    /// The serialized report as pretty-printed JSON
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Full => "full",
            OutputFormat::Json => "json",
        }
    }
}
