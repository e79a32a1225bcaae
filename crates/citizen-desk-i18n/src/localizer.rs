// crates/citizen-desk-i18n/src/localizer.rs
// ============================================================================
// Module: Localizer
// Description: Active-locale holder with translation and interpolation.
// Purpose: Resolve catalog keys for the current locale and persist switches.
// Dependencies: crate::{catalog, format, locale, preferences}
// ============================================================================

//! ## Overview
//! [`Localizer`] owns the active locale and the preference store it was
//! restored from. Translation walks the active catalog tree; a miss returns
//! the key path itself so the interface never renders an empty string.
//! Hosts that only need a one-off lookup for a known locale can call
//! [`Locale::translate`] directly.
//!
//! ## Invariants
//! - The stored preference is read once, at construction.
//! - Every successful [`Localizer::set_locale`] writes the preference.
//! - Unsupported locale identifiers never change the active locale.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::borrow::Cow;

use citizen_desk_core::Timestamp;

use crate::catalog::catalog_for;
use crate::format::format_date;
use crate::locale::Direction;
use crate::locale::Locale;
use crate::preferences::InMemoryPreferenceStore;
use crate::preferences::LOCALE_PREFERENCE_KEY;
use crate::preferences::PreferenceError;
use crate::preferences::PreferenceStore;

// ============================================================================
// SECTION: Message Arguments
// ============================================================================

/// A formatted message argument captured by the [`macro@crate::t`] macro.
///
/// # Invariants
/// - `key` matches a placeholder name without braces (for example, `count`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageArg {
    /// The placeholder name used in message templates.
    pub key: Cow<'static, str>,
    /// The formatted string value to substitute for this placeholder.
    pub value: String,
}

impl MessageArg {
    /// Constructs a new [`MessageArg`] from a key and displayable value.
    pub fn new(key: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

// ============================================================================
// SECTION: Translation
// ============================================================================

impl Locale {
    /// Translates `key` in this locale, substituting `args`.
    ///
    /// Every occurrence of `{name}` is replaced for each supplied argument,
    /// in argument order. Placeholders without a matching argument are left
    /// as-is; arguments without a matching placeholder are ignored.
    #[must_use]
    pub fn translate(self, key: &str, args: Vec<MessageArg>) -> String {
        let Some(template) = catalog_for(self).lookup(key) else {
            return key.to_string();
        };
        let mut result = template.to_string();
        for arg in args {
            let placeholder = format!("{{{}}}", arg.key);
            result = result.replace(&placeholder, &arg.value);
        }
        result
    }
}

// ============================================================================
// SECTION: Localizer
// ============================================================================

/// Active-locale holder bound to a preference store.
pub struct Localizer {
    /// Currently active locale.
    locale: Locale,
    /// Store the active locale is persisted to.
    preferences: Box<dyn PreferenceStore>,
}

impl Localizer {
    /// Restores the stored locale preference, or uses `default` when none is
    /// stored, the stored value is unsupported, or the store cannot be read.
    #[must_use]
    pub fn new(preferences: Box<dyn PreferenceStore>, default: Locale) -> Self {
        let locale = preferences
            .load(LOCALE_PREFERENCE_KEY)
            .ok()
            .flatten()
            .and_then(|stored| Locale::parse(&stored))
            .unwrap_or(default);
        Self {
            locale,
            preferences,
        }
    }

    /// Creates a localizer that persists nothing beyond its own lifetime.
    #[must_use]
    pub fn ephemeral(locale: Locale) -> Self {
        Self::new(Box::new(InMemoryPreferenceStore::new()), locale)
    }

    /// Returns the active locale.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Switches to the locale identified by `id` and persists the choice.
    ///
    /// Unsupported identifiers are ignored. When persistence fails the
    /// in-memory switch still takes effect.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError`] when the preference cannot be written.
    pub fn set_locale(&mut self, id: &str) -> Result<(), PreferenceError> {
        let Some(locale) = Locale::parse(id) else {
            return Ok(());
        };
        self.locale = locale;
        self.preferences.save(LOCALE_PREFERENCE_KEY, locale.as_str())
    }

    /// Translates `key` in the active locale, substituting `args`.
    #[must_use]
    pub fn translate(&self, key: &str, args: Vec<MessageArg>) -> String {
        self.locale.translate(key, args)
    }

    /// Returns the active text direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.locale.direction()
    }

    /// Returns the active formatting tag.
    #[must_use]
    pub const fn formatting_tag(&self) -> &'static str {
        self.locale.formatting_tag()
    }

    /// Renders a creation date in the active locale.
    #[must_use]
    pub fn format_date(&self, timestamp: Timestamp) -> String {
        format_date(self.locale, timestamp)
    }
}

impl std::fmt::Debug for Localizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Localizer").field("locale", &self.locale).finish_non_exhaustive()
    }
}
