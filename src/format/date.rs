//! Date formatting for display
//!
//! Publication dates are stored as ISO-8601 strings. Display code formats
//! them in one of two styles; anything that does not parse renders as
//! `"Invalid Date"` rather than failing.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Placeholder shown for dates that do not parse
pub const INVALID_DATE: &str = "Invalid Date";

/// Display style for dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    /// "February 15, 2024"
    #[default]
    Long,
    /// "15 February 2024"
    British,
}

/// Parse an ISO date (`2024-02-15`) or an RFC 3339 timestamp
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }

    DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Format as "Month D, YYYY" with US month names
pub fn format_long(input: &str) -> String {
    parse_date(input)
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// Format as "D Month YYYY" following UK conventions
pub fn format_british(input: &str) -> String {
    parse_date(input)
        .map(|d| d.format("%-d %B %Y").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// Format using the given style
pub fn format_with(style: DateStyle, input: &str) -> String {
    match style {
        DateStyle::Long => format_long(input),
        DateStyle::British => format_british(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_long() {
        assert_eq!(format_long("2024-02-15"), "February 15, 2024");
        assert_eq!(format_long("2024-01-05"), "January 5, 2024");
    }

    #[test]
    fn test_day_is_unpadded_in_both_styles() {
        assert_eq!(format_with(DateStyle::Long, "2024-03-07"), "March 7, 2024");
        assert_eq!(format_with(DateStyle::British, "2024-03-07"), "7 March 2024");
    }

    #[test]
    fn test_format_british() {
        assert_eq!(format_british("2024-02-15"), "15 February 2024");
        assert_eq!(format_british("2023-12-05"), "5 December 2023");
    }

    #[test]
    fn test_rfc3339_input() {
        assert_eq!(format_long("2024-01-20T09:30:00Z"), "January 20, 2024");
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(format_long("not a date"), INVALID_DATE);
        assert_eq!(format_british(""), INVALID_DATE);
        assert_eq!(format_long("2024-02-30"), INVALID_DATE);
    }

    #[test]
    fn test_format_with_style() {
        assert_eq!(format_with(DateStyle::Long, "2023-12-15"), "December 15, 2023");
        assert_eq!(format_with(DateStyle::British, "2023-12-15"), "15 December 2023");
    }
}
