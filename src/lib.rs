//! # chatnorm
//!
//! A Rust library for normalizing chat exports from popular messaging
//! platforms into a single canonical message sequence.
//!
//! ## Overview
//!
//! Chat exports arrive as heterogeneous, loosely-specified text or JSON:
//!
//! - **WhatsApp** — TXT exports in two header grammars (old and new
//!   client revisions), with multi-line messages and locale-dependent
//!   system notices (English/German/Turkish)
//! - **Instagram** — JSON message arrays from the data download
//! - **Telegram** — line-based `[DD.MM.YYYY HH:MM:SS]` exports
//! - **Discord** — line-based `[DD-Mon-YY HH:MM:SS]` exports
//! - **Generic** — a colon-split fallback for anything else
//!
//! chatnorm detects the platform, parses the platform grammar, folds
//! multi-line messages, isolates platform-generated notices and
//! synthesizes a chat title, all in one pure, synchronous pass.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatnorm::{Platform, convert_chat_export};
//!
//! let export = "[01.01.2024, 09:00:00] Bob: Hey\n\
//!               [01.01.2024, 09:01:00] Alice: Hi Bob";
//!
//! let result = convert_chat_export(export, None)?;
//!
//! assert_eq!(result.platform, Platform::WhatsApp);
//! assert_eq!(result.messages.len(), 2);
//! assert_eq!(result.title, "WhatsApp: Bob & Alice");
//! # Ok::<(), chatnorm::ConvertError>(())
//! ```
//!
//! Pass `Some(platform)` to skip auto-detection, e.g. when the user
//! forced a platform in a UI picker.
//!
//! ## Error Model
//!
//! Structural failures (the platform cannot be identified) surface as
//! [`ConvertError`]. Record-level failures (lines failing the grammar,
//! unparseable timestamps, empty content) are absorbed silently so a
//! partially messy export still yields everything salvageable. See
//! [`error`] for the full policy.
//!
//! ## Module Structure
//!
//! - [`convert`] — [`convert_chat_export`], [`ConversionResult`], title
//!   synthesis
//! - [`detect`] — platform auto-detection
//! - [`parsers`] — per-platform converters behind the
//!   [`parsers::MessageParser`] trait
//! - [`message`] — [`ParsedMessage`] and metadata types
//! - [`platform`] — the [`Platform`] enum
//! - [`error`] — [`ConvertError`] and [`Result`]

pub mod convert;
pub mod detect;
pub mod error;
pub mod message;
pub mod parsers;
pub mod platform;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export the main types at the crate root for convenience
pub use convert::{ConversionResult, convert_chat_export, generate_chat_title, participants};
pub use detect::detect;
pub use error::{ConvertError, Result};
pub use message::{MessageKind, MessageMetadata, ParsedMessage};
pub use platform::Platform;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatnorm::prelude::*;
/// ```
pub mod prelude {
    pub use crate::convert::{ConversionResult, convert_chat_export, generate_chat_title};
    pub use crate::detect::detect;
    pub use crate::error::{ConvertError, Result};
    pub use crate::message::{MessageKind, MessageMetadata, ParsedMessage};
    pub use crate::parsers::{
        DiscordParser, GenericParser, InstagramParser, MessageParser, TelegramParser,
        WhatsAppParser, create_parser,
    };
    pub use crate::platform::Platform;
}
