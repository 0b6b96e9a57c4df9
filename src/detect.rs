//! Platform auto-detection.
//!
//! [`detect`] inspects raw export text and returns the best-guess
//! [`Platform`] via ordered signature tests. The order matters because the
//! formats are ambiguous with each other: bracketed timestamps appear in
//! both WhatsApp's new grammar and Telegram's (distinguished by the comma
//! before the time), so WhatsApp is tried first.
//!
//! Detection is deterministic and pure. Any non-empty text matches at
//! least the Generic fallback; only empty or whitespace-only input fails.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::error::{ConvertError, Result};
use crate::platform::Platform;

// Old WhatsApp grammar: `31.12.23, 23:59 - ...`
static WHATSAPP_OLD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\d{1,2}\.\d{1,2}\.\d{2,4}, \d{1,2}:\d{2} - ").expect("valid regex")
});

// New WhatsApp grammar: `[31.12.2023, 23:59:59] ...`
static WHATSAPP_NEW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\[\d{1,2}\.\d{1,2}\.\d{4}, \d{1,2}:\d{2}:\d{2}\] ").expect("valid regex")
});

// Telegram: `[31.12.2023 23:59:59] ...` (space, no comma)
static TELEGRAM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\[\d{2}\.\d{2}\.\d{4} \d{2}:\d{2}:\d{2}\] ").expect("valid regex")
});

// Discord: `[31-Dec-23 23:59:59] ...` (3-letter month abbreviation)
static DISCORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\[\d{2}-[A-Za-z]{3}-\d{2} \d{2}:\d{2}:\d{2}\] ").expect("valid regex")
});

/// Detects the platform of a raw chat export.
///
/// First match wins, in this priority order: WhatsApp (old grammar),
/// WhatsApp (new grammar), Instagram (JSON array with `sender_name`),
/// Telegram, Discord, Generic.
///
/// # Errors
///
/// Returns [`ConvertError::UnidentifiedPlatform`] for empty or
/// whitespace-only input.
///
/// # Example
///
/// ```
/// use chatnorm::{Platform, detect};
///
/// let platform = detect("31.12.23, 23:59 - Alice: Hello").unwrap();
/// assert_eq!(platform, Platform::WhatsApp);
/// ```
pub fn detect(raw: &str) -> Result<Platform> {
    if WHATSAPP_OLD.is_match(raw) || WHATSAPP_NEW.is_match(raw) {
        return Ok(Platform::WhatsApp);
    }
    if is_instagram_json(raw) {
        return Ok(Platform::Instagram);
    }
    if TELEGRAM.is_match(raw) {
        return Ok(Platform::Telegram);
    }
    if DISCORD.is_match(raw) {
        return Ok(Platform::Discord);
    }
    if !raw.trim().is_empty() {
        return Ok(Platform::Generic);
    }
    Err(ConvertError::unidentified("input is empty"))
}

/// Instagram signature: the entire text parses as a JSON array whose first
/// element carries a `sender_name` field.
fn is_instagram_json(raw: &str) -> bool {
    // Cheap guard before paying for a full JSON parse.
    if !raw.trim_start().starts_with('[') {
        return false;
    }
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items
            .first()
            .is_some_and(|item| item.get("sender_name").is_some()),
        _ => false,
    }
}
