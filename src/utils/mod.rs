use chrono::DateTime;

const HOUR_SECS: i64 = 3600;

/// Truncate a unix timestamp down to the start of its containing hour.
/// Pure unix-seconds arithmetic, so buckets are UTC-aligned.
pub fn hour_bucket(timestamp: i64) -> i64 {
    timestamp - timestamp.rem_euclid(HOUR_SECS)
}

/// Display form of an order timestamp, rendered in UTC,
/// e.g. "3:25:10pm Thu Aug 6".
pub fn format_timestamp(timestamp: i64) -> String {
    match DateTime::from_timestamp(timestamp, 0) {
        Some(datetime) => datetime.format("%-I:%M:%S%P %a %b %-d").to_string(),
        // out-of-range timestamps fall back to the raw number
        None => timestamp.to_string(),
    }
}
