//! Formatting for opaque params/result/error payloads.

use std::fmt;

/// Renders a payload as a fenced block, pretty-printing it when it parses
/// as JSON and leaving it verbatim otherwise.
///
/// # Examples
///
/// ```rust
/// use wise_core::display::Payload;
///
/// let out = Payload(r#"{"url":"https://example.com"}"#).to_string();
/// assert!(out.starts_with("```json\n{\n  \"url\""));
///
/// let out = Payload("plain text").to_string();
/// assert_eq!(out, "```\nplain text\n```\n");
/// ```
pub struct Payload<'a>(pub &'a str);

impl<'a> Payload<'a> {
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Pretty JSON if the payload is a JSON object or array.
    fn pretty_json(&self) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(self.0.trim()).ok()?;
        if value.is_object() || value.is_array() {
            serde_json::to_string_pretty(&value).ok()
        } else {
            None
        }
    }
}

impl<'a> fmt::Display for Payload<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "_(empty)_");
        }
        match self.pretty_json() {
            Some(pretty) => writeln!(f, "```json\n{pretty}\n```"),
            None => writeln!(f, "```\n{}\n```", self.0.trim_end()),
        }
    }
}
