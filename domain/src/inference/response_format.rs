//! Response envelope formats

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Where a backend puts the generated text in its JSON response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Ollama `/api/generate`: `{"response": "..."}`
    OllamaGenerate,
    /// Anthropic messages: `{"content": [{"type": "text", "text": "..."}]}`
    AnthropicMessages,
}

impl ResponseFormat {
    /// JSON pointer to the generated text
    pub fn text_pointer(&self) -> &'static str {
        match self {
            ResponseFormat::OllamaGenerate => "/response",
            ResponseFormat::AnthropicMessages => "/content/0/text",
        }
    }

    /// Extract the generated text.
    ///
    /// Returns `None` when the field is absent or not a string. An empty
    /// string is a valid result.
    pub fn extract_text(&self, envelope: &Value) -> Option<String> {
        envelope
            .pointer(self.text_pointer())
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}
