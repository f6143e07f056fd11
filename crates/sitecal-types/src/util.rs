use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

/// Reduce a persisted date string to a calendar date.
///
/// `YYYY-MM-DD` and naive `YYYY-MM-DDTHH:MM:SS[.fff]` values are taken as
/// written. RFC 3339 timestamps are instants and take their date in `zone`,
/// so `2024-01-14T15:00:00Z` is the 15th at +09:00. Returns `None` for
/// anything else so callers can skip the record instead of failing.
pub fn parse_calendar_date(raw: &str, zone: FixedOffset) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&zone).date_naive());
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

/// Format a calendar date the way it is persisted (`YYYY-MM-DD`).
pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Allocate a time-based id (milliseconds since epoch).
///
/// Two records created within the same millisecond would collide, so the
/// candidate is bumped until `is_taken` rejects it.
pub fn next_time_id(now_millis: i64, is_taken: impl Fn(&str) -> bool) -> String {
    let mut candidate = now_millis;
    loop {
        let id = candidate.to_string();
        if !is_taken(&id) {
            return id;
        }
        candidate += 1;
    }
}

/// Truncate a string to a maximum number of characters
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max.saturating_sub(1)).collect::<String>() + "…"
    }
}
