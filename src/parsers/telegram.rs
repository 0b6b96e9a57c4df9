//! Telegram line-based export parser.
//!
//! Stateless single-line grammar, one message per matching line:
//!
//! ```text
//! [31.12.2023 23:59:59] Alice: Hello
//! ```
//!
//! Unlike WhatsApp there is no multi-line buffering; lines that do not
//! match are silently skipped.

use chrono::{DateTime, NaiveDate, Utc};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;
use crate::message::ParsedMessage;
use crate::parsers::MessageParser;
use crate::platform::Platform;

static LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[(\d{2})\.(\d{2})\.(\d{4}) (\d{2}):(\d{2}):(\d{2})\] ([^:]+): (.*)$")
        .expect("valid regex")
});

/// Parser for Telegram line-based exports.
pub struct TelegramParser;

impl TelegramParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }
}

impl Default for TelegramParser {
    fn default() -> Self {
        Self::new()
    }
}

fn convert_line(line: &str) -> Option<ParsedMessage> {
    let caps = LINE.captures(line)?;
    let field = |i| caps.get(i).map_or("", |m| m.as_str());

    let timestamp = build_timestamp(
        field(1).parse().ok()?,
        field(2).parse().ok()?,
        field(3).parse().ok()?,
        field(4).parse().ok()?,
        field(5).parse().ok()?,
        field(6).parse().ok()?,
    )?;

    let sender = field(7).trim();
    let content = field(8).trim();
    if content.is_empty() {
        return None;
    }

    Some(ParsedMessage::new(
        sender,
        content,
        timestamp,
        Platform::Telegram,
    ))
}

fn build_timestamp(
    day: u32,
    month: u32,
    year: i32,
    hour: u32,
    minute: u32,
    second: u32,
) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month, day)?
        .and_hms_opt(hour, minute, second)
        .map(|naive| naive.and_utc())
}

impl MessageParser for TelegramParser {
    fn name(&self) -> &'static str {
        "Telegram"
    }

    fn platform(&self) -> Platform {
        Platform::Telegram
    }

    fn parse_messages(&self, raw: &str) -> Result<Vec<ParsedMessage>> {
        let messages = raw
            .lines()
            .filter_map(|line| {
                let message = convert_line(line);
                if message.is_none() && !line.trim().is_empty() {
                    debug!("skipping non-matching Telegram line: {line:?}");
                }
                message
            })
            .collect();
        Ok(messages)
    }
}
