//! Time slot generation from a working-hours range

use chrono::{Duration, NaiveTime};
use thiserror::Error;

/// Fixed slot granularity: one bookable slot per hour.
pub const SLOT_STEP_MINUTES: i64 = 60;

/// The literal separator between the start and end times of a range.
const RANGE_SEPARATOR: &str = " - ";

/// A working-hours range string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeParseError {
    #[error("expected \"<start> - <end>\", got {0:?}")]
    Shape(String),
    #[error("invalid 12-hour time {0:?}")]
    Time(String),
}

/// Parse a `"hh:mmam - hh:mmpm"` range into start and end times.
///
/// Both sides are 12-hour clock times with an am/pm suffix, case-insensitive,
/// leading zero optional. No ordering constraint is enforced here; an
/// inverted range parses fine and simply produces no slots.
pub fn parse_time_range(range: &str) -> Result<(NaiveTime, NaiveTime), RangeParseError> {
    let mut parts = range.split(RANGE_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(start), Some(end), None) => Ok((parse_clock_time(start)?, parse_clock_time(end)?)),
        _ => Err(RangeParseError::Shape(range.to_string())),
    }
}

fn parse_clock_time(s: &str) -> Result<NaiveTime, RangeParseError> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%I:%M%p").map_err(|_| RangeParseError::Time(s.to_string()))
}

/// Generate the bookable slots for one weekly availability entry.
///
/// A blank entry is a day off and yields no slots (`Ok`). A malformed entry
/// is a data-quality problem and yields `Err`, which callers are expected to
/// degrade to "no slots" after recording it. Slots start at the range's start
/// time and step hourly while strictly before the end time; the end boundary
/// itself never becomes a slot. Each slot is a 24-hour `"HH:MM"` string.
pub fn try_generate_slots(entry: &str) -> Result<Vec<String>, RangeParseError> {
    let entry = entry.trim();
    if entry.is_empty() {
        return Ok(Vec::new());
    }

    let (start, end) = parse_time_range(entry)?;

    let mut slots = Vec::new();
    let mut current = start;
    while current < end {
        slots.push(current.format("%H:%M").to_string());
        let (next, wrap) = current.overflowing_add_signed(Duration::minutes(SLOT_STEP_MINUTES));
        if wrap != 0 {
            // stepped past midnight
            break;
        }
        current = next;
    }
    Ok(slots)
}

/// [`try_generate_slots`], with parse failures degraded to an empty list.
///
/// Matches the user-facing contract: bad availability data means nothing is
/// bookable that day, never a hard error.
pub fn generate_slots(entry: &str) -> Vec<String> {
    match try_generate_slots(entry) {
        Ok(slots) => slots,
        Err(err) => {
            tracing::warn!(entry, %err, "malformed availability entry, no slots generated");
            Vec::new()
        }
    }
}
