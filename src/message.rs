//! Canonical message type for all chat platforms.
//!
//! Every platform converter normalizes its native export format into
//! [`ParsedMessage`]: a sender, the message text, an absolute timestamp and
//! a small [`MessageMetadata`] block identifying the source platform.
//!
//! # Invariants
//!
//! - `sender` and `content` are never empty; records that trim to empty
//!   content are dropped by the converters instead of being emitted blank.
//! - `timestamp` is always a successfully parsed instant. The only
//!   converter that invents one is the Generic fallback, which marks the
//!   substitution via [`MessageMetadata::timestamp_inferred`].
//!
//! # Example
//!
//! ```
//! use chatnorm::{ParsedMessage, Platform};
//! use chrono::{TimeZone, Utc};
//!
//! let ts = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
//! let msg = ParsedMessage::new("Alice", "Hello!", ts, Platform::WhatsApp);
//! assert_eq!(msg.sender, "Alice");
//! assert!(!msg.is_system());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// Sender name used for platform-generated notices.
pub const SYSTEM_SENDER: &str = "System";

/// Sender name used when the export carries no attributable sender.
pub const UNKNOWN_SENDER: &str = "Unknown";

/// Classification of a normalized record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// A message written by a chat participant.
    #[default]
    User,
    /// A platform-generated notice (encryption banner, join/leave, missed
    /// call, deletion marker).
    System,
}

impl MessageKind {
    /// Returns `true` for [`MessageKind::User`].
    pub fn is_user(&self) -> bool {
        matches!(self, MessageKind::User)
    }
}

/// Converter-attached metadata.
///
/// At minimum this names the source platform. System messages additionally
/// carry `kind = system`; Instagram system records preserve the real sender
/// in `original_sender` along with the raw record `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageMetadata {
    /// Platform the message was converted from.
    pub platform: Platform,

    /// User message or platform notice. Omitted from JSON for user
    /// messages.
    #[serde(default, skip_serializing_if = "MessageKind::is_user")]
    pub kind: MessageKind,

    /// The real sender of a system record whose `sender` field was
    /// replaced by [`SYSTEM_SENDER`] (Instagram only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_sender: Option<String>,

    /// Raw record type as reported by the platform export (Instagram
    /// only).
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "type")]
    pub raw_type: Option<String>,

    /// Set when the source format carries no timestamp and the converter
    /// substituted the conversion time (Generic fallback only).
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub timestamp_inferred: bool,
}

impl MessageMetadata {
    /// Creates metadata for a user message on the given platform.
    pub fn user(platform: Platform) -> Self {
        Self {
            platform,
            kind: MessageKind::User,
            original_sender: None,
            raw_type: None,
            timestamp_inferred: false,
        }
    }

    /// Creates metadata for a system message on the given platform.
    pub fn system(platform: Platform) -> Self {
        Self {
            kind: MessageKind::System,
            ..Self::user(platform)
        }
    }
}

/// A normalized chat message from any supported platform.
///
/// Both types are created fresh per conversion call; there is no identity
/// or persistence beyond the call, and ownership lies entirely with the
/// caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedMessage {
    /// Display name of the author, or the [`SYSTEM_SENDER`] /
    /// [`UNKNOWN_SENDER`] sentinel.
    pub sender: String,

    /// Message text, trimmed. May contain embedded newlines for
    /// multi-line input.
    pub content: String,

    /// When the message was sent. Converted to UTC; serialized as
    /// RFC 3339.
    pub timestamp: DateTime<Utc>,

    /// Source platform plus optional system/inference markers.
    pub metadata: MessageMetadata,
}

impl ParsedMessage {
    /// Creates a user message.
    pub fn new(
        sender: impl Into<String>,
        content: impl Into<String>,
        timestamp: DateTime<Utc>,
        platform: Platform,
    ) -> Self {
        Self {
            sender: sender.into(),
            content: content.into(),
            timestamp,
            metadata: MessageMetadata::user(platform),
        }
    }

    /// Creates a platform notice under the [`SYSTEM_SENDER`] sentinel.
    pub fn system(
        content: impl Into<String>,
        timestamp: DateTime<Utc>,
        platform: Platform,
    ) -> Self {
        Self {
            sender: SYSTEM_SENDER.to_string(),
            content: content.into(),
            timestamp,
            metadata: MessageMetadata::system(platform),
        }
    }

    /// Builder method to preserve the real sender of a system record.
    #[must_use]
    pub fn with_original_sender(mut self, sender: impl Into<String>) -> Self {
        self.metadata.original_sender = Some(sender.into());
        self
    }

    /// Builder method to attach the raw platform record type.
    #[must_use]
    pub fn with_raw_type(mut self, raw_type: impl Into<String>) -> Self {
        self.metadata.raw_type = Some(raw_type.into());
        self
    }

    /// Builder method to mark the timestamp as converter-substituted.
    #[must_use]
    pub fn with_inferred_timestamp(mut self) -> Self {
        self.metadata.timestamp_inferred = true;
        self
    }

    /// Returns `true` if this message is a platform notice.
    pub fn is_system(&self) -> bool {
        self.metadata.kind == MessageKind::System
    }
}
