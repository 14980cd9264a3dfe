//! Display formatting for event dates (en-US style, UTC).

use chrono::{DateTime, Utc};

/// Long form used on the event detail page,
/// e.g. "Saturday, March 15, 2025 at 07:30 PM".
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%A, %B %-d, %Y at %I:%M %p").to_string()
}

/// Short form used on event cards, e.g. "Mar 15, 07:30 PM".
pub fn format_event_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %I:%M %p").to_string()
}
