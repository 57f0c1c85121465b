use chrono::NaiveDate;
use thiserror::Error;

/// Errors produced by the grid engine.
///
/// Only `InvalidHourRange` is fatal (a misconfigured axis is a programmer
/// error in the composing page). The per-record variants are recovered
/// locally: the offending appointment is skipped or clamped and the rest of
/// the grid renders normally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A `start_time`/`end_time` string is not a valid `"HH:mm"` value.
    #[error("invalid time format {0:?}, expected \"HH:mm\"")]
    InvalidTimeFormat(String),

    /// The visible hour window is empty or out of bounds.
    #[error("invalid hour range {start_hour}..{end_hour}, expected 0 <= start < end <= 24")]
    InvalidHourRange { start_hour: u32, end_hour: u32 },

    /// The appointment's date does not match any visible day column.
    #[error("date {0} is outside the visible week")]
    DateOutOfWindow(NaiveDate),
}
