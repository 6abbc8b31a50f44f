//! Birthday formatting with the fixed `dd.MM.yyyy` pattern.

use chrono::NaiveDate;

/// chrono form of `dd.MM.yyyy`.
pub const DATE_PATTERN: &str = "%d.%m.%Y";

/// Formats a date, absent dates become the empty string.
pub fn format(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_PATTERN).to_string())
        .unwrap_or_default()
}

/// Parses `dd.mm.yyyy`. Returns `None` for anything else.
pub fn parse(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_PATTERN).ok()
}

pub fn is_valid(text: &str) -> bool {
    parse(text).is_some()
}
