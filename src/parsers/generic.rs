//! Line-based fallback parser for unrecognized exports.
//!
//! Accepts any non-empty text. Each non-empty line is split on its first
//! colon into sender and content; colon-less lines are attributed to the
//! `Unknown` sentinel sender with the whole line as content.
//!
//! The format carries no timestamps, so every message receives the
//! conversion time. This is a documented fidelity loss of the format, not
//! a parsing error; the substitution is flagged via
//! `metadata.timestamp_inferred` so downstream chronology consumers can
//! tell real instants from invented ones.

use chrono::Utc;

use crate::error::Result;
use crate::message::{ParsedMessage, UNKNOWN_SENDER};
use crate::parsers::MessageParser;
use crate::platform::Platform;

/// Fallback parser for unrecognized but non-empty text.
///
/// # Example
///
/// ```rust
/// use chatnorm::parsers::{GenericParser, MessageParser};
///
/// let messages = GenericParser::new()
///     .parse_messages("Alice: hi\njust a bare line")
///     .unwrap();
/// assert_eq!(messages[0].sender, "Alice");
/// assert_eq!(messages[1].sender, "Unknown");
/// ```
pub struct GenericParser;

impl GenericParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }
}

impl Default for GenericParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits a line on its first colon, requiring a non-empty sender and
/// content on both sides.
fn split_line(line: &str) -> Option<(&str, &str)> {
    let idx = line.find(':')?;
    if idx == 0 {
        return None;
    }
    let sender = line[..idx].trim();
    let content = line[idx + 1..].trim();
    if sender.is_empty() || content.is_empty() {
        return None;
    }
    Some((sender, content))
}

impl MessageParser for GenericParser {
    fn name(&self) -> &'static str {
        "Generic"
    }

    fn platform(&self) -> Platform {
        Platform::Generic
    }

    fn parse_messages(&self, raw: &str) -> Result<Vec<ParsedMessage>> {
        // One instant for the whole call keeps a single import internally
        // consistent.
        let now = Utc::now();

        let messages = raw
            .lines()
            .filter_map(|line| {
                let line = line.trim();
                if line.is_empty() {
                    return None;
                }
                let message = match split_line(line) {
                    Some((sender, content)) => {
                        ParsedMessage::new(sender, content, now, Platform::Generic)
                    }
                    None => ParsedMessage::new(UNKNOWN_SENDER, line, now, Platform::Generic),
                };
                Some(message.with_inferred_timestamp())
            })
            .collect();
        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Vec<ParsedMessage> {
        GenericParser::new().parse_messages(raw).unwrap()
    }

    #[test]
    fn test_colon_split() {
        let messages = parse("Alice: hello there");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, "Alice");
        assert_eq!(messages[0].content, "hello there");
    }

    #[test]
    fn test_colonless_line_goes_to_unknown() {
        let messages = parse("a line with no speaker");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, UNKNOWN_SENDER);
        assert_eq!(messages[0].content, "a line with no speaker");
    }

    #[test]
    fn test_leading_colon_goes_to_unknown() {
        let messages = parse(": starts with a colon");
        assert_eq!(messages[0].sender, UNKNOWN_SENDER);
        assert_eq!(messages[0].content, ": starts with a colon");
    }

    #[test]
    fn test_empty_lines_are_dropped() {
        let messages = parse("Alice: one\n\n   \nBob: two");
        assert_eq!(messages.len(), 2);
    }

    #[test]
    fn test_timestamps_are_flagged_as_inferred() {
        let messages = parse("Alice: hi");
        assert!(messages[0].metadata.timestamp_inferred);
    }

    #[test]
    fn test_all_messages_share_one_timestamp() {
        let messages = parse("Alice: one\nBob: two\nthree");
        assert_eq!(messages[0].timestamp, messages[1].timestamp);
        assert_eq!(messages[1].timestamp, messages[2].timestamp);
    }

    #[test]
    fn test_binary_looking_garbage_does_not_panic() {
        let messages = parse("\u{0}\u{1}\u{2}garbage\u{fffd}");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, UNKNOWN_SENDER);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(parse("").is_empty());
        assert!(parse("   \n  ").is_empty());
    }

    #[test]
    fn test_split_line() {
        assert_eq!(split_line("a: b"), Some(("a", "b")));
        assert_eq!(split_line("no colon"), None);
        assert_eq!(split_line(": b"), None);
        assert_eq!(split_line("a:"), None);
        assert_eq!(split_line("a:   "), None);
    }
}
