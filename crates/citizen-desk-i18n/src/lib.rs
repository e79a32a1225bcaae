// crates/citizen-desk-i18n/src/lib.rs
// ============================================================================
// Module: Citizen Desk i18n Library
// Description: Localization engine for the Citizen Desk interface and CLI.
// Purpose: Expose locales, catalogs, translation, and preference storage.
// Dependencies: crate::{catalog, format, locale, localizer, preferences}
// ============================================================================

//! ## Overview
//! Citizen Desk speaks Kurdish Sorani, Kurdish Badini, Arabic, and English.
//! Every user-facing string is resolved through a [`Localizer`] (or directly
//! through [`Locale::translate`]) and the [`t!`](crate::t) macro.
//!
//! ## Invariants
//! - Catalogs are immutable after first use.
//! - A missing key renders as the key path itself.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod catalog;
pub mod format;
pub mod locale;
pub mod localizer;
pub mod preferences;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use catalog::CatalogNode;
pub use catalog::catalog_entries_for;
pub use catalog::catalog_for;
pub use format::format_date;
pub use locale::DEFAULT_LOCALE;
pub use locale::Direction;
pub use locale::Locale;
pub use locale::SUPPORTED_LOCALES;
pub use localizer::Localizer;
pub use localizer::MessageArg;
pub use preferences::FilePreferenceStore;
pub use preferences::InMemoryPreferenceStore;
pub use preferences::LOCALE_PREFERENCE_KEY;
pub use preferences::PreferenceError;
pub use preferences::PreferenceStore;

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Formats a localized message from a translator, a key, and named arguments.
///
/// # Arguments
///
/// - `$translator` is a [`Localizer`] or a [`Locale`].
/// - `$key` must match a catalog entry.
/// - Named arguments are substituted into `{placeholder}` positions.
///
/// # Returns
///
/// A localized [`String`] with placeholders substituted.
#[macro_export]
macro_rules! t {
    ($translator:expr, $key:literal $(, $name:ident = $value:expr )* $(,)?) => {{
        let args = ::std::vec![
            $(
                $crate::MessageArg::new(stringify!($name), $value.to_string()),
            )*
        ];
        $translator.translate($key, args)
    }};
}
