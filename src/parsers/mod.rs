//! Platform converters.
//!
//! Each converter implements [`MessageParser`], turning raw export text
//! into an ordered `Vec<ParsedMessage>`. Output ordering always equals
//! input order; converters never resort by timestamp.
//!
//! # Available Converters
//!
//! - [`WhatsAppParser`] — TXT exports, old and new header grammar
//! - [`InstagramParser`] — JSON message arrays
//! - [`TelegramParser`] — line-based `[DD.MM.YYYY HH:MM:SS]` exports
//! - [`DiscordParser`] — line-based `[DD-Mon-YY HH:MM:SS]` exports
//! - [`GenericParser`] — colon-split fallback for unrecognized text
//!
//! # Example
//!
//! ```rust
//! use chatnorm::parsers::create_parser;
//! use chatnorm::Platform;
//!
//! let parser = create_parser(Platform::Telegram);
//! let messages = parser
//!     .parse_messages("[31.12.2023 23:59:59] Alice: Hello")
//!     .unwrap();
//! assert_eq!(messages.len(), 1);
//! ```

mod discord;
mod generic;
mod instagram;
mod telegram;
mod whatsapp;

pub use discord::DiscordParser;
pub use generic::GenericParser;
pub use instagram::InstagramParser;
pub use telegram::TelegramParser;
pub use whatsapp::WhatsAppParser;

use crate::error::Result;
use crate::message::ParsedMessage;
use crate::platform::Platform;

/// Trait for converting a raw chat export into normalized messages.
///
/// Converters are pure, synchronous and single-pass: each call operates on
/// its own input string and local accumulator state, so a converter is safe
/// to invoke concurrently from multiple callers without locking.
pub trait MessageParser: Send + Sync {
    /// Returns the human-readable name of this converter.
    fn name(&self) -> &'static str;

    /// Returns the platform this converter handles.
    fn platform(&self) -> Platform;

    /// Converts raw export text into an ordered message sequence.
    ///
    /// Records that fail the platform grammar, carry an unparseable
    /// timestamp or trim to empty content are dropped silently; this is
    /// intentional lossy tolerance for the attachments, reactions and
    /// locale quirks that chat exports routinely contain.
    ///
    /// # Errors
    ///
    /// Current converters absorb all record-level failures and return
    /// `Ok`; the `Result` is part of the contract for converters that may
    /// have structural failure modes.
    fn parse_messages(&self, raw: &str) -> Result<Vec<ParsedMessage>>;
}

/// Creates the converter for the specified platform.
///
/// # Example
///
/// ```rust
/// use chatnorm::parsers::create_parser;
/// use chatnorm::Platform;
///
/// let parser = create_parser(Platform::WhatsApp);
/// assert_eq!(parser.name(), "WhatsApp");
/// ```
pub fn create_parser(platform: Platform) -> Box<dyn MessageParser> {
    match platform {
        Platform::WhatsApp => Box::new(WhatsAppParser::new()),
        Platform::Instagram => Box::new(InstagramParser::new()),
        Platform::Telegram => Box::new(TelegramParser::new()),
        Platform::Discord => Box::new(DiscordParser::new()),
        Platform::Generic => Box::new(GenericParser::new()),
    }
}
