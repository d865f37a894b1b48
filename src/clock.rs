//! Clock-string parsing for work reports.
//!
//! Clock-in/out columns hold 24-hour `HH:MM` or `HH:MM:SS` strings, zero-padded
//! or not, and are frequently null or garbage. Parsing is fail-soft: anything
//! that doesn't validate yields `None` and the report contributes nothing.

const MINUTES_PER_DAY: u32 = 1440;

/// Parse a `HH:MM` / `HH:MM:SS` clock string into minutes since midnight.
///
/// Hour must be 0–23 and minute 0–59; a seconds field is accepted and ignored.
pub fn clock_minutes(value: &str) -> Option<u32> {
    let mut parts = value.trim().split(':');
    let hours: u32 = parts.next()?.trim().parse().ok()?;
    let minutes: u32 = parts.next()?.trim().parse().ok()?;
    // At most one trailing seconds field.
    if let Some(seconds) = parts.next() {
        let _: u32 = seconds.trim().parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
    }
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Minutes worked between two clock strings.
///
/// A negative span wraps across midnight (+1440) to handle overnight shifts.
/// Returns `None` when either time is invalid or the span comes out
/// non-positive.
pub fn shift_duration_minutes(start: &str, end: &str) -> Option<u32> {
    let start = clock_minutes(start)? as i32;
    let end = clock_minutes(end)? as i32;
    let mut span = end - start;
    if span < 0 {
        span += MINUTES_PER_DAY as i32;
    }
    if span <= 0 {
        return None;
    }
    Some(span as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_padded_and_unpadded_clocks() {
        assert_eq!(clock_minutes("09:00"), Some(540));
        assert_eq!(clock_minutes("9:00"), Some(540));
        assert_eq!(clock_minutes("23:59"), Some(1439));
        assert_eq!(clock_minutes("0:05"), Some(5));
    }

    #[test]
    fn seconds_field_is_ignored() {
        assert_eq!(clock_minutes("09:00:30"), Some(540));
        assert_eq!(clock_minutes("9:15:00"), Some(555));
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        assert_eq!(clock_minutes("24:00"), None);
        assert_eq!(clock_minutes("12:60"), None);
        assert_eq!(clock_minutes("lunch"), None);
        assert_eq!(clock_minutes("12"), None);
        assert_eq!(clock_minutes("12:00:00:00"), None);
        assert_eq!(clock_minutes(""), None);
    }

    #[test]
    fn computes_plain_shift_duration() {
        assert_eq!(shift_duration_minutes("09:00", "13:00"), Some(240));
        assert_eq!(shift_duration_minutes("09:00", "10:30"), Some(90));
    }

    #[test]
    fn overnight_shift_wraps_past_midnight() {
        assert_eq!(shift_duration_minutes("22:00", "06:00"), Some(480));
    }

    #[test]
    fn zero_length_and_invalid_shifts_are_discarded() {
        assert_eq!(shift_duration_minutes("09:00", "09:00"), None);
        assert_eq!(shift_duration_minutes("", "17:00"), None);
        assert_eq!(shift_duration_minutes("09:00", "25:00"), None);
    }
}
