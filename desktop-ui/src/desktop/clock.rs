use chrono::{DateTime, FixedOffset, Utc};

const CLOCK_FORMAT: &str = "%I:%M %p";

/// Taskbar clock text, e.g. "11:32 PM".
///
/// `utc_offset_minutes` is east of UTC (KST = +540).
pub fn format_clock(epoch_ms: i64, utc_offset_minutes: i32) -> String {
    let Some(utc) = DateTime::<Utc>::from_timestamp_millis(epoch_ms) else {
        return "--:--".to_string();
    };

    match FixedOffset::east_opt(utc_offset_minutes.saturating_mul(60)) {
        Some(offset) => utc.with_timezone(&offset).format(CLOCK_FORMAT).to_string(),
        None => utc.format(CLOCK_FORMAT).to_string(),
    }
}
