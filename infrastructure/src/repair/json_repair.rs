//! Lenient JSON repair
//!
//! Recovers bodies that models and proxies commonly mangle: markdown code
//! fences, chatter around the payload, trailing commas, and output cut off
//! mid-string or mid-object.

use jobshift_application::ports::response_repair::ResponseRepair;
use serde_json::Value;
use tracing::debug;

/// Best-effort repair of near-JSON bodies
#[derive(Debug, Clone, Copy, Default)]
pub struct LenientJsonRepair;

impl ResponseRepair for LenientJsonRepair {
    fn repair(&self, raw: &str) -> Option<Value> {
        let payload = isolate_payload(strip_json_fences(raw))?;

        if let Ok(value) = serde_json::from_str(payload) {
            return Some(value);
        }

        let repaired = close_open_structures(&remove_trailing_commas(payload));
        match serde_json::from_str(&repaired) {
            Ok(value) => {
                debug!(raw_len = raw.len(), "Repaired malformed response body");
                Some(value)
            }
            Err(e) => {
                debug!("Response body could not be repaired: {}", e);
                None
            }
        }
    }
}

/// Strip a surrounding markdown code fence (```` ```json ```` or ```` ``` ````)
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let stripped = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));

    match stripped {
        Some(stripped) => stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start()),
        None => text,
    }
}

/// Slice from the first `{` or `[` to its matching close, or to the end
/// of the text when the payload is truncated.
fn isolate_payload(text: &str) -> Option<&str> {
    let start = text.find(['{', '['])?;
    let body = &text[start..];

    let mut depth = 0usize;
    let mut scanner = StringScanner::default();
    for (idx, ch) in body.char_indices() {
        if scanner.step(ch) {
            continue;
        }
        match ch {
            '{' | '[' => depth += 1,
            '}' | ']' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(&body[..idx + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    Some(body)
}

/// Drop commas that directly precede a closing bracket
fn remove_trailing_commas(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut scanner = StringScanner::default();

    for (i, &ch) in chars.iter().enumerate() {
        if scanner.step(ch) {
            out.push(ch);
            continue;
        }
        if ch == ',' {
            let next = chars[i + 1..].iter().find(|c| !c.is_whitespace());
            if matches!(next, Some('}') | Some(']')) {
                continue;
            }
        }
        out.push(ch);
    }
    out
}

/// Close an unterminated string and any open objects or arrays
fn close_open_structures(text: &str) -> String {
    let mut stack = Vec::new();
    let mut scanner = StringScanner::default();

    for ch in text.chars() {
        if scanner.step(ch) {
            continue;
        }
        match ch {
            '{' => stack.push('}'),
            '[' => stack.push(']'),
            '}' | ']' => {
                stack.pop();
            }
            _ => {}
        }
    }

    let mut out = text.to_string();
    if scanner.in_string {
        if scanner.escaped {
            out.pop();
        }
        out.push('"');
    }

    let trimmed_len = out.trim_end().len();
    out.truncate(trimmed_len);
    if out.ends_with(',') {
        out.pop();
    } else if out.ends_with(':') {
        out.push_str("null");
    }

    while let Some(close) = stack.pop() {
        out.push(close);
    }
    out
}

/// Tracks whether the scan position is inside a JSON string literal
#[derive(Default)]
struct StringScanner {
    in_string: bool,
    escaped: bool,
}

impl StringScanner {
    /// Feed one character; returns true if it belongs to a string literal
    fn step(&mut self, ch: char) -> bool {
        if self.in_string {
            if self.escaped {
                self.escaped = false;
            } else if ch == '\\' {
                self.escaped = true;
            } else if ch == '"' {
                self.in_string = false;
            }
            return true;
        }
        if ch == '"' {
            self.in_string = true;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn repair(raw: &str) -> Option<Value> {
        LenientJsonRepair.repair(raw)
    }

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
        assert_eq!(strip_json_fences("  {\"a\": 1} "), "{\"a\": 1}");
    }

    #[test]
    fn test_valid_json_untouched() {
        assert_eq!(
            repair(r#"{"response": "An accountant"}"#),
            Some(json!({"response": "An accountant"}))
        );
    }

    #[test]
    fn test_fenced_body_with_trailing_comma() {
        let raw = "```json\n{\"response\": \"Reconcile ledgers\",}\n```";
        assert_eq!(repair(raw), Some(json!({"response": "Reconcile ledgers"})));
    }

    #[test]
    fn test_chatter_around_payload() {
        let raw = "Sure! Here is the result: {\"response\": \"ok {not a brace}\"} Hope that helps.";
        assert_eq!(repair(raw), Some(json!({"response": "ok {not a brace}"})));
    }

    #[test]
    fn test_truncated_string_is_closed() {
        let raw = r#"{"response": "Accountants prepare financial statem"#;
        assert_eq!(
            repair(raw),
            Some(json!({"response": "Accountants prepare financial statem"}))
        );
    }

    #[test]
    fn test_truncated_nested_structures() {
        let raw = r#"{"content": [{"type": "text", "text": "Adopt RPA for invoices"#;
        assert_eq!(
            repair(raw),
            Some(json!({"content": [{"type": "text", "text": "Adopt RPA for invoices"}]}))
        );
    }

    #[test]
    fn test_dangling_key_gets_null() {
        assert_eq!(
            repair(r#"{"response": "x", "done":"#),
            Some(json!({"response": "x", "done": null}))
        );
    }

    #[test]
    fn test_escaped_quote_inside_string() {
        let raw = r#"{"response": "the \"ledger\" is ok","#;
        assert_eq!(repair(raw), Some(json!({"response": "the \"ledger\" is ok"})));
    }

    #[test]
    fn test_unrecoverable_text() {
        assert_eq!(repair("the model is overloaded"), None);
        assert_eq!(repair(""), None);
    }
}
