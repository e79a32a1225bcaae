// crates/citizen-desk-i18n/src/locale.rs
// ============================================================================
// Module: Locale Metadata
// Description: Supported locales with text direction and formatting tags.
// Purpose: Provide the closed set of interface languages and their metadata.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The interface ships four languages. Each carries a text direction used for
//! layout and a formatting tag used when rendering dates.
//!
//! ## Invariants
//! - Exactly one direction and one formatting tag per locale.
//! - [`DEFAULT_LOCALE`] is used whenever no usable preference exists.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Supported interface locales.
///
/// # Invariants
/// - Variants are stable identifiers for persistence and query parameters.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Kurdish Sorani.
    Ckb,
    /// Kurdish Badini (Kurmanji).
    Kmr,
    /// Arabic.
    Ar,
    /// English.
    En,
}

/// Text direction of a locale.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left to right.
    Ltr,
    /// Right to left.
    Rtl,
}

impl Direction {
    /// Returns the canonical direction label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered list of supported locales.
///
/// # Invariants
/// - Ordering is stable for deterministic presentation.
pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::Ckb, Locale::Kmr, Locale::Ar, Locale::En];

/// Locale used when no preference has been stored.
pub const DEFAULT_LOCALE: Locale = Locale::Ckb;

impl Locale {
    /// Returns the canonical locale identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ckb => "ckb",
            Self::Kmr => "kmr",
            Self::Ar => "ar",
            Self::En => "en",
        }
    }

    /// Parses an exact locale identifier such as `ckb`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        SUPPORTED_LOCALES.iter().copied().find(|locale| locale.as_str() == value)
    }

    /// Returns the text direction for this locale.
    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Self::Ckb | Self::Ar => Direction::Rtl,
            Self::Kmr | Self::En => Direction::Ltr,
        }
    }

    /// Returns the formatting tag used for dates.
    #[must_use]
    pub const fn formatting_tag(self) -> &'static str {
        match self {
            Self::Ckb => "ckb-IQ",
            Self::Kmr => "ku",
            Self::Ar => "ar-IQ",
            Self::En => "en-US",
        }
    }

    /// Returns the catalog key holding this locale's display name.
    #[must_use]
    pub const fn display_key(self) -> &'static str {
        match self {
            Self::Ckb => "locale.ckb",
            Self::Kmr => "locale.kmr",
            Self::Ar => "locale.ar",
            Self::En => "locale.en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for Locale {
    fn default() -> Self {
        DEFAULT_LOCALE
    }
}
