//! Date cell interpretation.
//!
//! A date cell is either a spreadsheet serial number (days since
//! 1899-12-30, so that serial `25569` is 1970-01-01) or a date string in one
//! of a handful of common layouts. Dates without a time zone are read as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use paoh_core::event::Timestamp;

use crate::row::Cell;

/// Serial day number of 1970-01-01 in spreadsheet date systems.
pub const SERIAL_EPOCH_OFFSET_DAYS: f64 = 25569.0;

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Converts a spreadsheet serial date to a timestamp.
///
/// The fractional part is the time of day; the result is rounded to the
/// nearest millisecond.
///
/// # Examples
///
/// ```
/// use paoh_parser::date::serial_to_timestamp;
///
/// let date = serial_to_timestamp(43840.0).unwrap();
/// assert_eq!(date.format("%Y-%m-%d").to_string(), "2020-01-10");
/// ```
pub fn serial_to_timestamp(serial: f64) -> Option<Timestamp> {
    if !serial.is_finite() {
        return None;
    }
    let millis = ((serial - SERIAL_EPOCH_OFFSET_DAYS) * 86400.0 * 1000.0).round();
    if millis.abs() >= i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp_millis(millis as i64)
}

/// Parses a date string.
///
/// Accepted layouts: RFC 3339, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS`,
/// `YYYY-MM-DD`, `YYYY/MM/DD`, `MM/DD/YYYY`, and plain numbers (read as
/// serial dates, since some exports quote every cell).
pub fn parse_date_str(text: &str) -> Option<Timestamp> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(date) = DateTime::parse_from_rfc3339(text) {
        return Some(date.with_timezone(&Utc));
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(date) = NaiveDateTime::parse_from_str(text, format) {
            return Some(date.and_utc());
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return date.and_hms_opt(0, 0, 0).map(|date| date.and_utc());
        }
    }

    text.parse::<f64>().ok().and_then(serial_to_timestamp)
}

/// Interprets a date cell, returning `None` when it is not a date.
pub fn parse_date(cell: &Cell) -> Option<Timestamp> {
    match cell {
        Cell::Number(serial) => serial_to_timestamp(*serial),
        Cell::Text(text) => parse_date_str(text),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Timestamp {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_serial_epoch() {
        assert_eq!(serial_to_timestamp(25569.0), Some(ymd(1970, 1, 1)));
    }

    #[test]
    fn test_serial_with_time_of_day() {
        let date = serial_to_timestamp(43840.5).unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2020, 1, 10, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_serial_rejects_non_finite() {
        assert!(serial_to_timestamp(f64::NAN).is_none());
        assert!(serial_to_timestamp(f64::INFINITY).is_none());
        assert!(serial_to_timestamp(1e300).is_none());
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = ymd(2020, 1, 10);
        assert_eq!(parse_date_str("2020-01-10"), Some(expected));
        assert_eq!(parse_date_str("2020/01/10"), Some(expected));
        assert_eq!(parse_date_str("01/10/2020"), Some(expected));
        assert_eq!(parse_date_str("2020-01-10 00:00:00"), Some(expected));
        assert_eq!(parse_date_str("2020-01-10T00:00:00"), Some(expected));
        assert_eq!(parse_date_str("2020-01-10T00:00:00.000Z"), Some(expected));
        assert_eq!(parse_date_str(" 2020-01-10 "), Some(expected));
    }

    #[test]
    fn test_parse_rfc3339_with_offset_converts_to_utc() {
        let date = parse_date_str("2020-01-10T02:00:00+02:00").unwrap();
        assert_eq!(date, ymd(2020, 1, 10));
    }

    #[test]
    fn test_parse_numeric_string_as_serial() {
        assert_eq!(parse_date_str("43840"), Some(ymd(2020, 1, 10)));
    }

    #[test]
    fn test_parse_malformed() {
        assert!(parse_date_str("").is_none());
        assert!(parse_date_str("next spring").is_none());
        assert!(parse_date_str("2020-13-45").is_none());
    }

    #[test]
    fn test_parse_date_cell() {
        assert_eq!(parse_date(&Cell::Number(43840.0)), Some(ymd(2020, 1, 10)));
        assert_eq!(parse_date(&Cell::from("2020-01-10")), Some(ymd(2020, 1, 10)));
        assert!(parse_date(&Cell::from("TBD")).is_none());
    }
}
