//! ISO calendar-date formatting and parsing.
//!
//! Dates are time-zone naive: `2012-03-04` always means that calendar day,
//! regardless of where the browser runs.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use time::Date;
use time::macros::format_description;

/// Format as `YYYY-MM-DD`.
pub fn format_iso_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]")).unwrap_or_default()
}

/// Parse `YYYY-MM-DD`. Surrounding whitespace is ignored; anything else fails.
pub fn parse_iso_date(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]")).ok()
}

/// Format for display in tables and tree nodes (`DD.MM.YYYY`).
pub fn format_display_date(date: Date) -> String {
    date.format(format_description!("[day].[month].[year]")).unwrap_or_default()
}

/// Serde adapter for `Date` fields carried as ISO date strings.
pub mod iso_date {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};
    use time::Date;

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_iso_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_iso_date(&raw).ok_or_else(|| D::Error::custom(format!("invalid ISO date: {raw}")))
    }
}
