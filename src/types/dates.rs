use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde_json::Value;

/// Leniently parse a source publication date.
///
/// Upstream volume data carries anything from full RFC 3339 stamps down to a
/// bare year; partial dates resolve to the first instant of the period, UTC.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return start_of_day(date);
    }
    // "YYYY-MM": complete to the first of the month
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d") {
        return start_of_day(date);
    }
    // bare "YYYY"
    if let Ok(year) = s.parse::<i32>() {
        return NaiveDate::from_ymd_opt(year, 1, 1).and_then(start_of_day);
    }
    None
}

/// Interpret a candidate record's `publicationDate` value.
///
/// Strings go through the lenient parser; numbers are epoch milliseconds,
/// with chrono's range check rejecting values that do not map to a valid
/// instant. Anything else is not a date.
pub fn candidate_instant(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_instant(s),
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}

fn start_of_day(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0)
        .map(|naive| Utc.from_utc_datetime(&naive))
}
