// crates/citizen-desk-i18n/src/format.rs
// ============================================================================
// Module: Date Rendering
// Description: Short numeric date rendering per locale formatting tag.
// Purpose: Show submission creation dates in the reader's conventions.
// Dependencies: citizen-desk-core, crate::locale
// ============================================================================

//! ## Overview
//! Dates render as short numeric day, month, and year in UTC. `en-US` puts
//! the month first; every other tag puts the day first. Right-to-left
//! locales use Arabic-Indic digits.

// ============================================================================
// SECTION: Imports
// ============================================================================

use citizen_desk_core::Timestamp;

use crate::locale::Direction;
use crate::locale::Locale;

// ============================================================================
// SECTION: Formatting
// ============================================================================

/// Renders the calendar date of `timestamp` for `locale`.
///
/// Timestamps outside the representable calendar range render as their raw
/// unix-millisecond value.
#[must_use]
pub fn format_date(locale: Locale, timestamp: Timestamp) -> String {
    let Some(datetime) = timestamp.to_utc() else {
        return timestamp.as_unix_millis().to_string();
    };
    let day = datetime.day();
    let month = u8::from(datetime.month());
    let year = datetime.year();
    let rendered = match locale {
        Locale::En => format!("{month}/{day}/{year}"),
        Locale::Ckb | Locale::Kmr | Locale::Ar => format!("{day}/{month}/{year}"),
    };
    match locale.direction() {
        Direction::Rtl => localize_digits(&rendered),
        Direction::Ltr => rendered,
    }
}

/// Replaces ASCII digits with Arabic-Indic digits.
fn localize_digits(value: &str) -> String {
    value
        .chars()
        .map(|ch| match ch.to_digit(10) {
            Some(digit) => char::from_u32(0x0660 + digit).unwrap_or(ch),
            None => ch,
        })
        .collect()
}

// ============================================================================
// SECTION: Tests
// ============================================================================
