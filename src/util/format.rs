//! Display formatting for durations, dates, and long strings.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a duration in seconds as `m:ss`. Non-finite or negative values
/// (an `<audio>` element can report `NaN` before metadata) render as `0:00`.
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_owned();
    }
    let total = seconds as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Relative day phrasing for briefing timestamps.
pub fn format_age_days(days: i64) -> String {
    match days {
        i64::MIN..=0 => "Today".to_owned(),
        1 => "Yesterday".to_owned(),
        2..=6 => format!("{days} days ago"),
        7..=29 => format!("{} weeks ago", days / 7),
        _ => format!("{} months ago", days / 30),
    }
}

/// Calendar-date prefix (`YYYY-MM-DD`) of an RFC 3339 timestamp, used when
/// a relative age cannot be computed (server render, unparseable value).
pub fn date_prefix(created_at: &str) -> &str {
    created_at.get(0..10).unwrap_or(created_at)
}

/// Human formatting for a briefing's `created_at` timestamp: relative age in
/// the browser, calendar date otherwise.
pub fn format_created_at(created_at: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        if let Some(days) = days_since(created_at) {
            return format_age_days(days);
        }
    }
    date_prefix(created_at).to_owned()
}

/// Whole days elapsed since the timestamp, or `None` when it fails to parse.
#[cfg(feature = "hydrate")]
fn days_since(created_at: &str) -> Option<i64> {
    let parsed = js_sys::Date::parse(created_at);
    if parsed.is_nan() {
        return None;
    }
    let elapsed_ms = js_sys::Date::now() - parsed;
    Some((elapsed_ms / 86_400_000.0).floor() as i64)
}

/// Truncate to `length` characters, appending an ellipsis when shortened.
pub fn truncate(value: &str, length: usize) -> String {
    if value.chars().count() <= length {
        return value.to_owned();
    }
    let mut shortened: String = value.chars().take(length).collect();
    shortened.push_str("...");
    shortened
}
