//! Instagram JSON export parser.
//!
//! Instagram exports messages as a JSON array of records carrying
//! `sender_name`, `timestamp_ms`, `content` and `type`. Hand-pasted
//! exports are sometimes partial or corrupted, so a top-level parse
//! failure is absorbed (logged, zero messages) instead of propagated,
//! which keeps the detect/convert pipeline non-fatal.
//!
//! Records without textual content (reaction-only, attachment-only) trim
//! to empty and are dropped. Records recognized as platform events, by a
//! non-`Generic` record type or a keyword in the content, are emitted
//! under the `System` sender with the real sender preserved in metadata.

use chrono::DateTime;
use log::{debug, error};
use serde::Deserialize;

use crate::error::Result;
use crate::message::{ParsedMessage, UNKNOWN_SENDER};
use crate::parsers::MessageParser;
use crate::platform::Platform;

/// Content keywords that mark a record as a platform event, matched
/// case-insensitively as substrings.
const SYSTEM_KEYWORDS: &[&str] = &[
    "unsent a message",
    "missed a video call",
    "missed a call",
    "created group",
    "added you to the group",
];

#[derive(Debug, Deserialize)]
struct InstagramRecord {
    sender_name: Option<String>,
    #[serde(default)]
    timestamp_ms: i64,
    content: Option<String>,
    #[serde(rename = "type")]
    raw_type: Option<String>,
}

/// Parser for Instagram JSON exports.
///
/// # Example
///
/// ```rust
/// use chatnorm::parsers::{InstagramParser, MessageParser};
///
/// let json = r#"[{"sender_name": "alice", "content": "Hey!", "timestamp_ms": 1700000000000}]"#;
/// let messages = InstagramParser::new().parse_messages(json).unwrap();
/// assert_eq!(messages[0].sender, "alice");
/// ```
pub struct InstagramParser;

impl InstagramParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }
}

impl Default for InstagramParser {
    fn default() -> Self {
        Self::new()
    }
}

fn contains_system_keyword(content: &str) -> bool {
    let lower = content.to_lowercase();
    SYSTEM_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

fn convert_record(record: &InstagramRecord) -> Option<ParsedMessage> {
    if record.timestamp_ms <= 0 {
        debug!("skipping Instagram record without a usable timestamp_ms");
        return None;
    }
    let timestamp = DateTime::from_timestamp_millis(record.timestamp_ms)?;

    let sender = record
        .sender_name
        .clone()
        .unwrap_or_else(|| UNKNOWN_SENDER.to_string());
    let content = record.content.as_deref().unwrap_or("").trim();
    if content.is_empty() {
        // Reaction-only or attachment-only record with no caption.
        return None;
    }

    let raw_type = record.raw_type.as_deref().unwrap_or("Generic");
    if raw_type != "Generic" || contains_system_keyword(content) {
        return Some(
            ParsedMessage::system(content, timestamp, Platform::Instagram)
                .with_original_sender(sender)
                .with_raw_type(raw_type),
        );
    }

    Some(ParsedMessage::new(
        sender,
        content,
        timestamp,
        Platform::Instagram,
    ))
}

fn parse_content(raw: &str) -> Vec<ParsedMessage> {
    let records: Vec<InstagramRecord> = match serde_json::from_str(raw) {
        Ok(records) => records,
        Err(err) => {
            error!("Instagram export is not a valid JSON message array, producing no messages: {err}");
            return Vec::new();
        }
    };

    records.iter().filter_map(convert_record).collect()
}

impl MessageParser for InstagramParser {
    fn name(&self) -> &'static str {
        "Instagram"
    }

    fn platform(&self) -> Platform {
        Platform::Instagram
    }

    fn parse_messages(&self, raw: &str) -> Result<Vec<ParsedMessage>> {
        Ok(parse_content(raw))
    }
}
