/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application

/// Format ISO datetime string to DD.MM.YYYY HH:MM format
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                let time = time_part.split('.').next().unwrap_or(time_part);
                let hhmm = time.rsplit_once(':').map(|(h, _)| h).unwrap_or(time);
                return format!("{}.{}.{} {}", day, month, year, hhmm.trim_end_matches('Z'));
            }
        }
    }
    datetime_str.to_string()
}

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Format a date range, collapsing same-day ranges to a single date.
pub fn format_date_range(start: &str, end: &str) -> String {
    if date_only(start) == date_only(end) {
        format_date(start)
    } else {
        format!("{} - {}", format_date(start), format_date(end))
    }
}

/// The `YYYY-MM-DD` part of an ISO date or datetime string.
pub fn date_only(value: &str) -> &str {
    value.split('T').next().unwrap_or(value)
}

/// Today's date as `YYYY-MM-DD` in the browser's local timezone.
pub fn today_iso() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// True when `date` falls on `today` (date-only comparison).
pub fn is_on_day(date: &str, today: &str) -> bool {
    date_only(date) == date_only(today)
}

/// True when `date` is strictly after `today` (date-only comparison,
/// valid lexicographically for ISO dates).
pub fn is_after_day(date: &str, today: &str) -> bool {
    date_only(date) > date_only(today)
}

/// Number of days from `from` to `to`, or None when either fails to parse.
pub fn days_between(from: &str, to: &str) -> Option<i64> {
    let from = chrono::NaiveDate::parse_from_str(date_only(from), "%Y-%m-%d").ok()?;
    let to = chrono::NaiveDate::parse_from_str(date_only(to), "%Y-%m-%d").ok()?;
    Some((to - from).num_days())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15.03.2024 14:02");
        assert_eq!(format_datetime("2024-12-31T23:59:59Z"), "31.12.2024 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
    }

    #[test]
    fn test_format_date_range() {
        assert_eq!(format_date_range("2024-03-15", "2024-03-15"), "15.03.2024");
        assert_eq!(
            format_date_range("2024-03-15T08:00:00Z", "2024-03-15T17:00:00Z"),
            "15.03.2024"
        );
        assert_eq!(
            format_date_range("2024-03-15", "2024-03-17"),
            "15.03.2024 - 17.03.2024"
        );
    }

    #[test]
    fn test_day_comparisons() {
        assert!(is_on_day("2024-03-15T08:00:00Z", "2024-03-15"));
        assert!(!is_on_day("2024-03-16", "2024-03-15"));
        assert!(is_after_day("2024-03-16", "2024-03-15"));
        assert!(!is_after_day("2024-03-15T23:59:00Z", "2024-03-15"));
    }

    #[test]
    fn test_days_between() {
        assert_eq!(days_between("2024-03-15", "2024-03-20"), Some(5));
        assert_eq!(days_between("2024-03-20", "2024-03-15"), Some(-5));
        assert_eq!(days_between("garbage", "2024-03-15"), None);
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }
}
