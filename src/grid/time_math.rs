//! Clock-time parsing and the pixel/percent math for placing cards.
//!
//! All functions are pure. Times are minutes since midnight once parsed;
//! the wire format is the literal string `"HH:mm"`.

use std::fmt;

use super::error::GridError;

/// Minimum rendered card height in pixels, so short or degenerate
/// appointments remain clickable.
pub const MIN_CARD_HEIGHT: f32 = 36.0;

/// Minimum visual duration in minutes for degenerate (zero or inverted)
/// intervals, used for overlap detection.
pub const MIN_SLOT_MINUTES: i32 = 15;

pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// A wall-clock time of day, stored as minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    /// Build from minutes since midnight; `None` outside `0..1440`.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        if (minutes as i32) < MINUTES_PER_DAY {
            Some(Self(minutes))
        } else {
            None
        }
    }

    /// Parse an `"HH:mm"` string.
    ///
    /// Splits on `:` and requires exactly two numeric components with
    /// hour below 24 and minute below 60, so `"25:00"` is rejected rather
    /// than wrapped.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let invalid = || GridError::InvalidTimeFormat(s.to_string());

        let mut parts = s.trim().split(':');
        let hour_part = parts.next().ok_or_else(invalid)?;
        let minute_part = parts.next().ok_or_else(invalid)?;
        if parts.next().is_some() {
            return Err(invalid());
        }

        let hours: u16 = hour_part.parse().map_err(|_| invalid())?;
        let minutes: u16 = minute_part.parse().map_err(|_| invalid())?;
        if hours >= 24 || minutes >= 60 {
            return Err(invalid());
        }

        Ok(Self(hours * 60 + minutes))
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Minutes past the start of the given hour (negative if earlier).
    pub fn minutes_past_hour(self, hour: u32) -> i32 {
        self.0 as i32 - (hour as i32) * 60
    }

    /// Format back to `"HH:mm"`.
    pub fn format(self) -> String {
        format!("{:02}:{:02}", self.hour(), self.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Signed duration in minutes; negative when `end` precedes `start`
/// (callers decide whether to clamp, see [`clamped_duration`]).
pub fn duration_minutes(start: ClockTime, end: ClockTime) -> i32 {
    end.minutes() as i32 - start.minutes() as i32
}

/// Duration with degenerate intervals clamped up to [`MIN_SLOT_MINUTES`].
pub fn clamped_duration(start: ClockTime, end: ClockTime) -> i32 {
    duration_minutes(start, end).max(MIN_SLOT_MINUTES)
}

/// Vertical position of `start` inside its containing hour cell, as a
/// percentage of the cell height.
pub fn vertical_offset_percent(start: ClockTime, hour_of_cell: u32) -> f32 {
    (start.minutes_past_hour(hour_of_cell) as f32 / 60.0) * 100.0
}

/// Pixel height for a card, clamped to [`MIN_CARD_HEIGHT`].
pub fn height_from_duration(duration_minutes: i32, pixels_per_hour: f32) -> f32 {
    let raw = duration_minutes as f32 / 60.0 * pixels_per_hour;
    raw.max(MIN_CARD_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("00:00", 0; "midnight")]
    #[test_case("09:05", 545; "leading zeros")]
    #[test_case("9:5", 545; "unpadded components")]
    #[test_case("23:59", 1439; "last minute of day")]
    fn test_parse_valid(input: &str, expected: u16) {
        assert_eq!(ClockTime::parse(input).unwrap().minutes(), expected);
    }

    #[test_case("25:00"; "hour out of range")]
    #[test_case("12:60"; "minute out of range")]
    #[test_case("12"; "missing separator")]
    #[test_case("12:00:00"; "too many components")]
    #[test_case("ab:cd"; "non numeric")]
    #[test_case(""; "empty string")]
    fn test_parse_invalid(input: &str) {
        assert!(matches!(
            ClockTime::parse(input),
            Err(GridError::InvalidTimeFormat(_))
        ));
    }

    #[test]
    fn test_format_round_trip() {
        for minutes in 0..(MINUTES_PER_DAY as u16) {
            let time = ClockTime::from_minutes(minutes).unwrap();
            assert_eq!(ClockTime::parse(&time.format()).unwrap(), time);
        }
    }

    #[test]
    fn test_from_minutes_rejects_out_of_day() {
        assert!(ClockTime::from_minutes(1440).is_none());
        assert!(ClockTime::from_minutes(1439).is_some());
    }

    #[test]
    fn test_duration_is_signed() {
        let nine = ClockTime::parse("09:00").unwrap();
        let ten = ClockTime::parse("10:00").unwrap();
        assert_eq!(duration_minutes(nine, ten), 60);
        assert_eq!(duration_minutes(ten, nine), -60);
        assert_eq!(clamped_duration(ten, nine), MIN_SLOT_MINUTES);
    }

    #[test]
    fn test_vertical_offset_percent() {
        let t = ClockTime::parse("09:15").unwrap();
        assert_eq!(vertical_offset_percent(t, 9), 25.0);
        assert_eq!(vertical_offset_percent(t, 8), 125.0);
    }

    #[test]
    fn test_height_clamps_short_cards() {
        // 5 minutes at 60 px/hour would be 5 px; the clamp keeps it clickable.
        assert_eq!(height_from_duration(5, 60.0), MIN_CARD_HEIGHT);
        assert_eq!(height_from_duration(60, 60.0), 60.0);
    }
}
