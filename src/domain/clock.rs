use std::fmt::{Display, Write};

use chrono::{DateTime, TimeZone};

pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";
pub const DEFAULT_DATE_FORMAT: &str = "%A, %B %-d, %Y";

/// Formats `now` with a strftime pattern, falling back to `fallback` when
/// the pattern is invalid.
pub fn format_with<Tz>(now: &DateTime<Tz>, pattern: &str, fallback: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();
    if write!(out, "{}", now.format(pattern)).is_ok() {
        return out;
    }

    log::warn!("Invalid clock format {pattern:?}, using {fallback:?}");
    out.clear();
    match write!(out, "{}", now.format(fallback)) {
        Ok(()) => out,
        Err(_) => String::new(),
    }
}

pub fn format_time<Tz>(now: &DateTime<Tz>, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format_with(now, pattern, DEFAULT_TIME_FORMAT)
}

pub fn format_date<Tz>(now: &DateTime<Tz>, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format_with(now, pattern, DEFAULT_DATE_FORMAT)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    use super::*;

    fn fixed() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 3)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn test_default_formats() {
        let now = fixed();
        assert_eq!(format_time(&now, DEFAULT_TIME_FORMAT), "07:05:03");
        assert_eq!(
            format_date(&now, DEFAULT_DATE_FORMAT),
            "Saturday, March 9, 2024"
        );
    }

    #[test]
    fn test_custom_format() {
        assert_eq!(format_date(&fixed(), "%Y-%m-%d"), "2024-03-09");
    }

    #[test]
    fn test_invalid_format_falls_back() {
        assert_eq!(format_time(&fixed(), "%Q"), "07:05:03");
    }
}
