//! Human-readable sizes and timestamps for listings.

use chrono::{DateTime, TimeZone};

/// `"512 B"`, `"1.50 KB"`, `"2.00 MB"`.
pub fn format_size(size: u64) -> String {
    if size < 1024 {
        format!("{} B", size)
    } else if size < 1024 * 1024 {
        format!("{:.2} KB", size as f64 / 1024.0)
    } else {
        format!("{:.2} MB", size as f64 / (1024.0 * 1024.0))
    }
}

/// `"2024-03-01 09:30"`
pub fn format_time<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("%Y-%m-%d %H:%M").to_string()
}
