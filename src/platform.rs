//! Supported messaging platforms.
//!
//! [`Platform`] is the shared vocabulary between callers that force a
//! specific converter (e.g. a UI platform picker) and the automatic
//! detector in [`crate::detect`].

use serde::{Deserialize, Serialize};

/// Source platform of a chat export.
///
/// # Example
///
/// ```rust
/// use chatnorm::Platform;
/// use std::str::FromStr;
///
/// let platform = Platform::from_str("whatsapp").unwrap();
/// assert_eq!(platform, Platform::WhatsApp);
///
/// // Aliases are supported
/// let platform = Platform::from_str("wa").unwrap();
/// assert_eq!(platform, Platform::WhatsApp);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Platform {
    /// WhatsApp TXT exports (old and new header grammar)
    #[serde(alias = "wa")]
    #[cfg_attr(feature = "cli", value(name = "whatsapp", alias = "wa"))]
    WhatsApp,

    /// Instagram JSON exports (message array from data download)
    #[serde(alias = "ig")]
    #[cfg_attr(feature = "cli", value(name = "instagram", alias = "ig"))]
    Instagram,

    /// Telegram line-based exports
    #[serde(alias = "tg")]
    #[cfg_attr(feature = "cli", value(name = "telegram", alias = "tg"))]
    Telegram,

    /// Discord line-based exports
    #[serde(alias = "dc")]
    #[cfg_attr(feature = "cli", value(name = "discord", alias = "dc"))]
    Discord,

    /// Line-based fallback for unrecognized but non-empty text
    #[cfg_attr(feature = "cli", value(name = "generic"))]
    Generic,
}

impl Platform {
    /// Returns all available platforms.
    pub fn all() -> &'static [Platform] {
        &[
            Platform::WhatsApp,
            Platform::Instagram,
            Platform::Telegram,
            Platform::Discord,
            Platform::Generic,
        ]
    }

    /// Returns all platform names including aliases.
    pub fn all_names() -> &'static [&'static str] {
        &[
            "whatsapp", "wa", "instagram", "ig", "telegram", "tg", "discord", "dc", "generic",
        ]
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::WhatsApp => write!(f, "WhatsApp"),
            Platform::Instagram => write!(f, "Instagram"),
            Platform::Telegram => write!(f, "Telegram"),
            Platform::Discord => write!(f, "Discord"),
            Platform::Generic => write!(f, "Generic"),
        }
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "whatsapp" | "wa" => Ok(Platform::WhatsApp),
            "instagram" | "ig" => Ok(Platform::Instagram),
            "telegram" | "tg" => Ok(Platform::Telegram),
            "discord" | "dc" => Ok(Platform::Discord),
            "generic" => Ok(Platform::Generic),
            _ => Err(format!(
                "Unknown platform: '{}'. Expected one of: {}",
                s,
                Platform::all_names().join(", ")
            )),
        }
    }
}
