//! Malformed-input behavior: what gets dropped, what gets absorbed, what
//! still comes through.

use chatnorm::prelude::*;

// =========================================================================
// WhatsApp
// =========================================================================

#[test]
fn whatsapp_unparseable_timestamp_drops_line_only() {
    // February 31st: the header matches but the date does not exist.
    let export = "31.02.24, 09:00 - Alice: dropped\n01.03.24, 09:00 - Bob: kept";
    let result = convert_chat_export(export, Some(Platform::WhatsApp)).unwrap();
    assert_eq!(result.messages.len(), 1);
    assert_eq!(result.messages[0].sender, "Bob");
}

#[test]
fn whatsapp_orphan_continuation_lines_are_dropped() {
    let export = "leading garbage\nmore garbage\n01.01.24, 09:00 - Alice: hi";
    let result = convert_chat_export(export, Some(Platform::WhatsApp)).unwrap();
    assert_eq!(result.messages.len(), 1);
    assert_eq!(result.messages[0].content, "hi");
}

#[test]
fn whatsapp_header_without_colon_or_phrase_is_dropped() {
    let export = "01.01.24, 09:00 - nothing recognizable here";
    let result = convert_chat_export(export, Some(Platform::WhatsApp)).unwrap();
    assert!(result.messages.is_empty());
}

#[test]
fn whatsapp_discarded_header_resets_accumulation() {
    // The unrecognized header closes Alice's message; the stray line after
    // it has no open buffer to join and vanishes.
    let export = "\
01.01.24, 09:00 - Alice: first
01.01.24, 09:01 - unrecognized header rest
stray line
01.01.24, 09:02 - Bob: second";
    let result = convert_chat_export(export, Some(Platform::WhatsApp)).unwrap();
    assert_eq!(result.messages.len(), 2);
    assert_eq!(result.messages[0].content, "first");
    assert_eq!(result.messages[1].content, "second");
}

#[test]
fn whatsapp_multiline_message_with_blank_interior_line() {
    let export = "01.01.24, 09:00 - Alice: first paragraph\n\nsecond paragraph";
    let result = convert_chat_export(export, Some(Platform::WhatsApp)).unwrap();
    assert_eq!(result.messages.len(), 1);
    assert_eq!(result.messages[0].content, "first paragraph\n\nsecond paragraph");
}

#[test]
fn whatsapp_crlf_export() {
    let export = "01.01.24, 09:00 - Alice: hi\r\n01.01.24, 09:01 - Bob: yo\r\n";
    let result = convert_chat_export(export, None).unwrap();
    assert_eq!(result.messages.len(), 2);
    assert_eq!(result.messages[1].content, "yo");
}

// =========================================================================
// Instagram
// =========================================================================

#[test]
fn instagram_malformed_json_yields_zero_messages() {
    let result = convert_chat_export("{truncated", Some(Platform::Instagram)).unwrap();
    assert!(result.messages.is_empty());
    assert_eq!(result.title, "Instagram: Unknown");
}

#[test]
fn instagram_object_instead_of_array_yields_zero_messages() {
    let result =
        convert_chat_export(r#"{"messages": []}"#, Some(Platform::Instagram)).unwrap();
    assert!(result.messages.is_empty());
}

#[test]
fn instagram_nonpositive_timestamps_are_skipped() {
    let export = r#"[
        {"sender_name": "a", "content": "no clock", "timestamp_ms": 0},
        {"sender_name": "b", "content": "negative", "timestamp_ms": -1},
        {"sender_name": "c", "content": "fine", "timestamp_ms": 1700000000000}
    ]"#;
    let result = convert_chat_export(export, Some(Platform::Instagram)).unwrap();
    assert_eq!(result.messages.len(), 1);
    assert_eq!(result.messages[0].sender, "c");
}

// =========================================================================
// Telegram / Discord
// =========================================================================

#[test]
fn telegram_mixed_valid_and_invalid_lines() {
    let export = "\
[01.01.2024 09:00:00] Bob: valid
[99.99.2024 09:00:00] Bob: impossible date
[01.01.2024 09:01:00] Alice:
[01.01.2024 09:02:00] Alice: also valid";
    let result = convert_chat_export(export, Some(Platform::Telegram)).unwrap();
    assert_eq!(result.messages.len(), 2);
    assert_eq!(result.messages[1].content, "also valid");
}

#[test]
fn discord_unknown_month_is_skipped() {
    let export = "[15-Foo-24 12:00:00] Bob: hi\n[15-Jun-24 12:00:00] Bob: hi";
    let result = convert_chat_export(export, Some(Platform::Discord)).unwrap();
    assert_eq!(result.messages.len(), 1);
}

// =========================================================================
// Generic
// =========================================================================

#[test]
fn generic_never_fails_on_garbage() {
    let inputs = [
        "\u{0}\u{1}\u{2}\u{3}",
        "::::::",
        "🦀🦀🦀",
        "a\nb\nc",
        "\u{fffd}\u{fffd}",
    ];
    for input in inputs {
        let result = convert_chat_export(input, Some(Platform::Generic)).unwrap();
        for msg in &result.messages {
            assert!(!msg.sender.is_empty());
            assert!(!msg.content.is_empty());
        }
    }
}

#[test]
fn generic_url_line_is_not_mistaken_for_sender_split() {
    // First colon splits "https" from the rest; the split succeeds but
    // stays well-formed.
    let result = convert_chat_export("https://example.com/page", Some(Platform::Generic)).unwrap();
    assert_eq!(result.messages.len(), 1);
    assert_eq!(result.messages[0].sender, "https");
}

// =========================================================================
// Invariants across converters
// =========================================================================

#[test]
fn no_converter_emits_empty_sender_or_content() {
    let samples = [
        (Platform::WhatsApp, "01.01.24, 09:00 - Alice: hi\n\n01.01.24, 09:01 - : \n01.01.24, 09:02 - Bob: yo"),
        (Platform::Telegram, "[01.01.2024 09:00:00] Bob: hey\n[01.01.2024 09:01:00] Al: "),
        (Platform::Discord, "[01-Jan-24 09:00:00] Bob: hey\nnoise"),
        (Platform::Instagram, r#"[{"sender_name": "a", "content": " ", "timestamp_ms": 1}]"#),
        (Platform::Generic, "x: y\nbare"),
    ];
    for (platform, raw) in samples {
        let result = convert_chat_export(raw, Some(platform)).unwrap();
        for msg in &result.messages {
            assert!(!msg.sender.is_empty(), "{platform}: empty sender");
            assert!(!msg.content.is_empty(), "{platform}: empty content");
        }
    }
}
