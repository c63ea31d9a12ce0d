use super::*;

// =============================================================
// Durations
// =============================================================

#[test]
fn format_duration_pads_seconds() {
    assert_eq!(format_duration(0.0), "0:00");
    assert_eq!(format_duration(7.9), "0:07");
    assert_eq!(format_duration(65.0), "1:05");
    assert_eq!(format_duration(600.0), "10:00");
}

#[test]
fn format_duration_handles_nan_and_negative() {
    assert_eq!(format_duration(f64::NAN), "0:00");
    assert_eq!(format_duration(-5.0), "0:00");
}

// =============================================================
// Relative dates
// =============================================================

#[test]
fn format_age_days_buckets() {
    assert_eq!(format_age_days(0), "Today");
    assert_eq!(format_age_days(1), "Yesterday");
    assert_eq!(format_age_days(3), "3 days ago");
    assert_eq!(format_age_days(13), "1 weeks ago");
    assert_eq!(format_age_days(21), "3 weeks ago");
    assert_eq!(format_age_days(60), "2 months ago");
}

#[test]
fn format_age_days_treats_future_as_today() {
    assert_eq!(format_age_days(-2), "Today");
}

#[test]
fn date_prefix_takes_calendar_date() {
    assert_eq!(date_prefix("2026-08-20T12:00:00Z"), "2026-08-20");
    assert_eq!(date_prefix("bad"), "bad");
}

// =============================================================
// Truncation
// =============================================================

#[test]
fn truncate_leaves_short_strings_alone() {
    assert_eq!(truncate("hello", 10), "hello");
}

#[test]
fn truncate_appends_ellipsis() {
    assert_eq!(truncate("hello world", 5), "hello...");
}

#[test]
fn truncate_counts_characters_not_bytes() {
    assert_eq!(truncate("héllo", 5), "héllo");
}
