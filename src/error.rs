//! Unified error types for chatnorm.
//!
//! The conversion pipeline distinguishes two failure classes:
//!
//! - **Structural failures** — the platform cannot be identified at all.
//!   These surface to the caller as [`ConvertError`].
//! - **Record-level failures** — a single line or JSON record that fails
//!   its platform's grammar, has an unparseable timestamp or trims to
//!   empty content. These are absorbed silently (logged, not fatal) so a
//!   partially messy export still yields everything salvageable.
//!
//! There is no retry logic: conversion is deterministic and pure, so
//! retrying with the same input is pointless. The only corrective action
//! is the caller supplying corrected input or an explicit platform hint.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatnorm operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// The error type for all chatnorm operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConvertError {
    /// An I/O error occurred while reading input or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error when writing a conversion result.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input matched no known platform signature.
    ///
    /// Raised when input is empty or whitespace-only and no explicit
    /// platform hint was given. Non-empty text always matches at least
    /// the Generic fallback.
    #[error("could not identify the export platform: {reason}")]
    UnidentifiedPlatform {
        /// Why detection failed.
        reason: &'static str,
    },
}

impl ConvertError {
    /// Creates an unidentified-platform error.
    pub fn unidentified(reason: &'static str) -> Self {
        ConvertError::UnidentifiedPlatform { reason }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ConvertError::Io(_))
    }

    /// Returns `true` if this is a JSON error.
    pub fn is_json(&self) -> bool {
        matches!(self, ConvertError::Json(_))
    }

    /// Returns `true` if this is an unidentified-platform error.
    pub fn is_unidentified_platform(&self) -> bool {
        matches!(self, ConvertError::UnidentifiedPlatform { .. })
    }
}
