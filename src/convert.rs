//! Conversion facade: platform resolution, converter dispatch and title
//! synthesis.
//!
//! [`convert_chat_export`] is the sole public entry point consumers need:
//! it resolves the platform (explicit hint wins, otherwise the detector
//! runs), dispatches to the matching converter and synthesizes a
//! human-readable chat title from the detected participants.

use serde::{Deserialize, Serialize};

use crate::detect::detect;
use crate::error::Result;
use crate::message::{ParsedMessage, SYSTEM_SENDER, UNKNOWN_SENDER};
use crate::parsers::create_parser;
use crate::platform::Platform;

/// Result of converting a raw chat export.
///
/// Created fresh per conversion call; ownership lies entirely with the
/// caller, which typically folds it into a chat-creation payload
/// immediately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Normalized messages in input order.
    pub messages: Vec<ParsedMessage>,

    /// Synthesized human-readable chat title.
    pub title: String,

    /// The caller-supplied hint, or the detector's verdict.
    pub platform: Platform,
}

/// Converts a raw chat export into a normalized message sequence.
///
/// An explicit `platform` hint skips auto-detection, e.g. when a UI
/// forces "WhatsApp" mode.
///
/// # Errors
///
/// Returns [`crate::ConvertError::UnidentifiedPlatform`] when no hint is
/// given and the input is empty or whitespace-only. Record-level failures
/// inside an identified export never error; the affected records are
/// dropped.
///
/// # Example
///
/// ```rust
/// use chatnorm::{Platform, convert_chat_export};
///
/// let export = "[01.01.2024, 09:00:00] Bob: Hey\n[01.01.2024, 09:01:00] Alice: Hi Bob";
/// let result = convert_chat_export(export, None)?;
///
/// assert_eq!(result.platform, Platform::WhatsApp);
/// assert_eq!(result.messages.len(), 2);
/// assert_eq!(result.title, "WhatsApp: Bob & Alice");
/// # Ok::<(), chatnorm::ConvertError>(())
/// ```
pub fn convert_chat_export(raw: &str, platform: Option<Platform>) -> Result<ConversionResult> {
    let platform = match platform {
        Some(platform) => platform,
        None => detect(raw)?,
    };

    let parser = create_parser(platform);
    let messages = parser.parse_messages(raw)?;
    let title = generate_chat_title(&messages, platform);

    Ok(ConversionResult {
        messages,
        title,
        platform,
    })
}

/// Returns the distinct real senders in first-appearance order.
///
/// The `System` and `Unknown` sentinels are not participants.
pub fn participants(messages: &[ParsedMessage]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for message in messages {
        let sender = message.sender.as_str();
        if sender == SYSTEM_SENDER || sender == UNKNOWN_SENDER {
            continue;
        }
        if !seen.contains(&sender) {
            seen.push(sender);
        }
    }
    seen
}

/// Synthesizes a chat title from the participants of a message sequence.
///
/// Pure function of its inputs: the first two distinct real senders are
/// joined with `" & "`, any further ones are folded into a `+N` suffix,
/// and a sequence without real participants titles as `Unknown`.
pub fn generate_chat_title(messages: &[ParsedMessage], platform: Platform) -> String {
    let names = participants(messages);
    let label = match names.as_slice() {
        [] => UNKNOWN_SENDER.to_string(),
        [only] => (*only).to_string(),
        [first, second] => format!("{first} & {second}"),
        [first, second, rest @ ..] => format!("{first} & {second} +{}", rest.len()),
    };
    format!("{platform}: {label}")
}
