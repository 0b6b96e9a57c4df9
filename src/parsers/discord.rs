//! Discord line-based export parser.
//!
//! Stateless single-line grammar with a 3-letter English month
//! abbreviation:
//!
//! ```text
//! [31-Dec-23 23:59:59] Alice: Hello
//! ```
//!
//! The 2-digit year is expanded unconditionally into the 2000s; there is
//! no pivot, unlike WhatsApp. Lines that do not match are silently
//! skipped.

use chrono::NaiveDate;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;
use crate::message::ParsedMessage;
use crate::parsers::MessageParser;
use crate::platform::Platform;

static LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[(\d{2})-([A-Za-z]{3})-(\d{2}) (\d{2}):(\d{2}):(\d{2})\] ([^:]+): (.*)$")
        .expect("valid regex")
});

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn month_number(abbr: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|month| month.eq_ignore_ascii_case(abbr))
        .and_then(|idx| u32::try_from(idx).ok())
        .map(|idx| idx + 1)
}

/// Parser for Discord line-based exports.
pub struct DiscordParser;

impl DiscordParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }
}

impl Default for DiscordParser {
    fn default() -> Self {
        Self::new()
    }
}

fn convert_line(line: &str) -> Option<ParsedMessage> {
    let caps = LINE.captures(line)?;
    let field = |i| caps.get(i).map_or("", |m| m.as_str());

    let day: u32 = field(1).parse().ok()?;
    let month = month_number(field(2))?;
    let year: i32 = field(3).parse().ok()?;
    let timestamp = NaiveDate::from_ymd_opt(2000 + year, month, day)?
        .and_hms_opt(
            field(4).parse().ok()?,
            field(5).parse().ok()?,
            field(6).parse().ok()?,
        )
        .map(|naive| naive.and_utc())?;

    let sender = field(7).trim();
    let content = field(8).trim();
    if content.is_empty() {
        return None;
    }

    Some(ParsedMessage::new(
        sender,
        content,
        timestamp,
        Platform::Discord,
    ))
}

impl MessageParser for DiscordParser {
    fn name(&self) -> &'static str {
        "Discord"
    }

    fn platform(&self) -> Platform {
        Platform::Discord
    }

    fn parse_messages(&self, raw: &str) -> Result<Vec<ParsedMessage>> {
        let messages = raw
            .lines()
            .filter_map(|line| {
                let message = convert_line(line);
                if message.is_none() && !line.trim().is_empty() {
                    debug!("skipping non-matching Discord line: {line:?}");
                }
                message
            })
            .collect();
        Ok(messages)
    }
}
