//! # Display Formatting
//!
//! Pure text-formatting helpers shared by the poster renderer. The model
//! performs no validation, so every helper here must accept arbitrary
//! input and degrade to defined fallback text instead of failing.

use chrono::NaiveDate;

/// Rendered in place of an empty time field
pub const TIME_PLACEHOLDER: &str = "--:--";

/// Rendered in place of an empty date field
pub const DATE_PLACEHOLDER: &str = "Select Date";

/// Rendered in place of an empty company name
pub const COMPANY_PLACEHOLDER: &str = "Company Name";

/// Convert a 24-hour `HH:MM` string to 12-hour display with AM/PM.
///
/// - empty input yields the `--:--` sentinel
/// - hour 0 displays as 12 AM, hour 12 as 12 PM
/// - a non-numeric hour, or a string with no `:` separator, is returned
///   unchanged (graceful passthrough, never an error)
/// - the minutes substring is carried through verbatim
///
/// # Example
///
/// ```rust
/// use schedule_core::format::format_time_12h;
///
/// assert_eq!(format_time_12h("13:00"), "1:00 PM");
/// assert_eq!(format_time_12h(""), "--:--");
/// ```
pub fn format_time_12h(raw: &str) -> String {
    if raw.is_empty() {
        return TIME_PLACEHOLDER.to_string();
    }
    let Some((hours, minutes)) = raw.split_once(':') else {
        return raw.to_string();
    };
    let Ok(hour) = hours.trim().parse::<u32>() else {
        return raw.to_string();
    };
    let suffix = if hour >= 12 { "PM" } else { "AM" };
    let hour_12 = match hour % 12 {
        0 => 12,
        other => other,
    };
    format!("{}:{} {}", hour_12, minutes, suffix)
}

/// Format an ISO `YYYY-MM-DD` date as a long display date
/// ("Monday, January 1, 2024").
///
/// Empty input yields the "Select Date" placeholder. A non-empty but
/// unparseable string is returned verbatim rather than raising.
pub fn format_long_date(raw: &str) -> String {
    if raw.is_empty() {
        return DATE_PLACEHOLDER.to_string();
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%A, %B %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// The header company line: the name, or its placeholder, uppercased.
pub fn display_company(raw: &str) -> String {
    if raw.is_empty() {
        COMPANY_PLACEHOLDER.to_uppercase()
    } else {
        raw.to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting_contract() {
        assert_eq!(format_time_12h("00:30"), "12:30 AM");
        assert_eq!(format_time_12h("09:00"), "9:00 AM");
        assert_eq!(format_time_12h("12:00"), "12:00 PM");
        assert_eq!(format_time_12h("13:00"), "1:00 PM");
        assert_eq!(format_time_12h("23:59"), "11:59 PM");
        assert_eq!(format_time_12h(""), "--:--");
    }

    #[test]
    fn test_time_passthrough_on_garbage() {
        assert_eq!(format_time_12h("ab:cd"), "ab:cd");
        assert_eq!(format_time_12h("noon"), "noon");
        assert_eq!(format_time_12h("9"), "9");
    }

    #[test]
    fn test_time_hours_past_midnight_wrap() {
        // Mirrors the modulo arithmetic of the display contract
        assert_eq!(format_time_12h("25:00"), "1:00 PM");
    }

    #[test]
    fn test_long_date() {
        assert_eq!(format_long_date("2024-01-01"), "Monday, January 1, 2024");
        assert_eq!(format_long_date("2026-08-06"), "Thursday, August 6, 2026");
        assert_eq!(format_long_date(""), DATE_PLACEHOLDER);
    }

    #[test]
    fn test_unparseable_date_degrades_to_raw_input() {
        assert_eq!(format_long_date("next tuesday"), "next tuesday");
        assert_eq!(format_long_date("2024-13-45"), "2024-13-45");
    }

    #[test]
    fn test_company_display() {
        assert_eq!(display_company("Royal Travels"), "ROYAL TRAVELS");
        assert_eq!(display_company(""), "COMPANY NAME");
    }
}
