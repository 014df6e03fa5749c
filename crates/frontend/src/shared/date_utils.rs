/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the pages
use chrono::{DateTime, Utc};

/// Format a timestamp as `YYYY-MM-DD HH:MM:SS`
/// Example: 2026-03-15T14:02:26.123Z -> "2026-03-15 14:02:26"
pub fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Same as `format_datetime`, empty for a missing timestamp
pub fn format_optional_datetime(dt: Option<DateTime<Utc>>) -> String {
    dt.map(format_datetime).unwrap_or_default()
}

/// Long form used on event cards
/// Example: 2026-11-12T18:30:00Z -> "Thu, 12 Nov 2026 18:30 UTC"
pub fn format_event_date(dt: DateTime<Utc>) -> String {
    dt.format("%a, %d %b %Y %H:%M UTC").to_string()
}
