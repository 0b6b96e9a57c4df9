//! WhatsApp TXT export parser.
//!
//! WhatsApp exports vary by client version. Two header grammars appear in
//! the wild and the parser accepts either on any line:
//!
//! - Old: `31.12.23, 23:59 - Alice: Hello` (no seconds, 2- or 4-digit year)
//! - New: `[31.12.2023, 23:59:59] Alice: Hello`
//!
//! Messages can span multiple lines (captions, pasted paragraphs). The
//! parser runs a stateful line scan: a header match flushes the message
//! accumulated so far, non-header lines are appended to the open message,
//! and end of input flushes whatever is still buffered.
//!
//! Platform notices (encryption banner, join/leave, missed calls, group
//! renames) are recognized against a locale-keyed phrase table covering
//! English, German and Turkish, and emitted under the `System` sender
//! instead of being attributed to a participant.

use chrono::{DateTime, NaiveDate, Utc};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;
use crate::message::ParsedMessage;
use crate::parsers::MessageParser;
use crate::platform::Platform;

// `[31.12.2023, 23:59:59] rest`
static HEADER_NEW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[(\d{1,2})\.(\d{1,2})\.(\d{4}), (\d{1,2}):(\d{2}):(\d{2})\] (.*)$")
        .expect("valid regex")
});

// `31.12.23, 23:59 - rest` (seconds absent, year 2 or 4 digits)
static HEADER_OLD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2})\.(\d{1,2})\.(\d{2,4}), (\d{1,2}):(\d{2}) - (.*)$")
        .expect("valid regex")
});

/// Locale-keyed system notice phrases.
///
/// Extending coverage to another locale means adding a row here, not
/// touching the parser. Entries are matched verbatim (case-sensitive),
/// as they appear in exports.
const SYSTEM_PHRASES: &[(&str, &[&str])] = &[
    (
        "en",
        &[
            "Messages and calls are end-to-end encrypted",
            "joined using this group's invite link",
            "You're now an admin",
            "is now an admin",
            "created group",
            "created this group",
            "added",
            "removed",
            "left",
            "changed the group description",
            "changed the subject",
            "changed this group's icon",
            "This message was deleted",
            "You deleted this message",
            "Missed voice call",
            "Missed video call",
        ],
    ),
    (
        "de",
        &[
            "Nachrichten und Anrufe sind Ende-zu-Ende-verschlüsselt",
            "über den Einladungslink dieser Gruppe beigetreten",
            "Du bist jetzt ein Admin",
            "ist jetzt ein Admin",
            "hat die Gruppe erstellt",
            "hinzugefügt",
            "entfernt",
            "hat die Gruppe verlassen",
            "hat die Gruppenbeschreibung geändert",
            "hat den Betreff",
            "hat das Gruppenbild geändert",
            "Diese Nachricht wurde gelöscht",
            "Du hast diese Nachricht gelöscht",
            "Verpasster Sprachanruf",
            "Verpasster Videoanruf",
        ],
    ),
    (
        "tr",
        &[
            "Mesajlar ve aramalar uçtan uca şifrelidir",
            "grubun davet bağlantısını kullanarak katıldı",
            "Artık yöneticisin",
            "artık yönetici",
            "grubunu oluşturdu",
            "ekledi",
            "çıkardı",
            "gruptan ayrıldı",
            "grup açıklamasını değiştirdi",
            "grup adını",
            "grubun simgesini değiştirdi",
            "Bu mesaj silindi",
            "Bu mesajı sildin",
            "Cevapsız sesli arama",
            "Cevapsız görüntülü arama",
        ],
    ),
];

/// Parser for WhatsApp TXT exports.
///
/// # Example
///
/// ```rust
/// use chatnorm::parsers::{MessageParser, WhatsAppParser};
///
/// let parser = WhatsAppParser::new();
/// let messages = parser
///     .parse_messages("31.12.23, 23:59 - Alice: Hello\nworld")
///     .unwrap();
/// assert_eq!(messages.len(), 1);
/// assert_eq!(messages[0].content, "Hello\nworld");
/// ```
pub struct WhatsAppParser;

impl WhatsAppParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }
}

impl Default for WhatsAppParser {
    fn default() -> Self {
        Self::new()
    }
}

/// A matched header line: timestamp plus everything after the separator.
struct Header<'a> {
    timestamp: Option<DateTime<Utc>>,
    rest: &'a str,
}

/// Per-line classification of header content.
///
/// Keeping this a standalone policy function makes "what gets silently
/// dropped" testable in isolation.
#[derive(Debug, PartialEq, Eq)]
enum LineClass<'a> {
    /// Header starts a user message.
    Message { sender: &'a str, body: &'a str },
    /// Header carries a platform notice.
    System { body: &'a str },
    /// Header content is unusable and the line is dropped.
    Discard,
}

fn classify_rest(rest: &str) -> LineClass<'_> {
    if let Some(idx) = rest.find(':') {
        let sender = rest[..idx].trim();
        if idx > 0 && !sender.is_empty() {
            let body = rest[idx + 1..].trim_start();
            if starts_with_system_phrase(body) {
                return LineClass::System { body };
            }
            return LineClass::Message { sender, body };
        }
    }
    // No colon (or nothing left of it): either a bare platform notice or
    // an unrecognized header remainder.
    if contains_system_phrase(rest) {
        return LineClass::System { body: rest };
    }
    LineClass::Discard
}

fn starts_with_system_phrase(body: &str) -> bool {
    SYSTEM_PHRASES
        .iter()
        .flat_map(|(_, phrases)| phrases.iter())
        .any(|phrase| body.starts_with(phrase))
}

fn contains_system_phrase(line: &str) -> bool {
    SYSTEM_PHRASES
        .iter()
        .flat_map(|(_, phrases)| phrases.iter())
        .any(|phrase| line.contains(phrase))
}

/// Expands a 2-digit year around the 1950/2050 pivot; 4-digit years pass
/// through.
fn expand_year(raw: i32) -> i32 {
    if raw >= 100 {
        raw
    } else if raw <= 50 {
        2000 + raw
    } else {
        1900 + raw
    }
}

fn build_timestamp(
    day: u32,
    month: u32,
    year: i32,
    hour: u32,
    minute: u32,
    second: u32,
) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(expand_year(year), month, day)?
        .and_hms_opt(hour, minute, second)
        .map(|naive| naive.and_utc())
}

fn match_header(line: &str) -> Option<Header<'_>> {
    if let Some(caps) = HEADER_NEW.captures(line) {
        let field = |i| caps.get(i).map_or("", |m| m.as_str());
        let timestamp = build_timestamp(
            field(1).parse().ok()?,
            field(2).parse().ok()?,
            field(3).parse().ok()?,
            field(4).parse().ok()?,
            field(5).parse().ok()?,
            field(6).parse().ok()?,
        );
        return Some(Header {
            timestamp,
            rest: caps.get(7).map_or("", |m| m.as_str()),
        });
    }
    if let Some(caps) = HEADER_OLD.captures(line) {
        let field = |i| caps.get(i).map_or("", |m| m.as_str());
        // The old grammar carries no seconds; they default to 0.
        let timestamp = build_timestamp(
            field(1).parse().ok()?,
            field(2).parse().ok()?,
            field(3).parse().ok()?,
            field(4).parse().ok()?,
            field(5).parse().ok()?,
            0,
        );
        return Some(Header {
            timestamp,
            rest: caps.get(6).map_or("", |m| m.as_str()),
        });
    }
    None
}

/// Line-scan accumulator, modeled as an explicit two-state machine.
enum ScanState {
    Idle,
    Buffering {
        sender: String,
        timestamp: DateTime<Utc>,
        lines: Vec<String>,
    },
}

impl ScanState {
    /// Emits the buffered message, if any, and returns to `Idle`.
    fn flush_into(&mut self, out: &mut Vec<ParsedMessage>) {
        if let ScanState::Buffering {
            sender,
            timestamp,
            lines,
        } = std::mem::replace(self, ScanState::Idle)
        {
            let content = lines.join("\n").trim().to_string();
            if content.is_empty() {
                debug!("dropping WhatsApp message from {sender:?} with empty content");
            } else {
                out.push(ParsedMessage::new(
                    sender,
                    content,
                    timestamp,
                    Platform::WhatsApp,
                ));
            }
        }
    }
}

fn parse_content(raw: &str) -> Vec<ParsedMessage> {
    let mut messages = Vec::new();
    let mut state = ScanState::Idle;

    for line in raw.lines() {
        if let Some(header) = match_header(line) {
            state.flush_into(&mut messages);

            let Some(timestamp) = header.timestamp else {
                debug!("skipping WhatsApp line with unparseable timestamp: {line:?}");
                continue;
            };

            match classify_rest(header.rest) {
                LineClass::Message { sender, body } => {
                    state = ScanState::Buffering {
                        sender: sender.to_string(),
                        timestamp,
                        lines: vec![body.to_string()],
                    };
                }
                LineClass::System { body } => {
                    messages.push(ParsedMessage::system(
                        body.trim(),
                        timestamp,
                        Platform::WhatsApp,
                    ));
                }
                LineClass::Discard => {
                    debug!("dropping unrecognized WhatsApp header content: {:?}", header.rest);
                }
            }
        } else if let ScanState::Buffering { lines, .. } = &mut state {
            // Continuation of the open message; appended verbatim.
            lines.push(line.to_string());
        }
        // Orphan continuation lines with no open message are dropped.
    }

    state.flush_into(&mut messages);
    messages
}

impl MessageParser for WhatsAppParser {
    fn name(&self) -> &'static str {
        "WhatsApp"
    }

    fn platform(&self) -> Platform {
        Platform::WhatsApp
    }

    fn parse_messages(&self, raw: &str) -> Result<Vec<ParsedMessage>> {
        Ok(parse_content(raw))
    }
}
