use time::{OffsetDateTime, UtcOffset};

/// Current time in UTC
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

// 2026-06-30 18:05 UTC
/// Timestamp shown on the "Generated at" line of the header.
///
/// The value is converted to UTC first so two reports generated at the same
/// instant print the same text regardless of the caller's offset.
pub fn to_report_timestamp(date: &OffsetDateTime) -> String {
    let date = date.to_offset(UtcOffset::UTC);
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02} UTC",
        date.year(),
        u8::from(date.month()),
        date.day(),
        date.hour(),
        date.minute(),
    )
}
