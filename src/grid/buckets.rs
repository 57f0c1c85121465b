//! Grouping the flat appointment list into per-day buckets.

use chrono::NaiveDate;

use super::axis::DayColumn;
use super::error::GridError;
use super::time_math::{self, ClockTime};
use crate::models::appointment::Appointment;

/// An appointment with its times parsed, ready for lane assignment.
///
/// Borrows the appointment; the parsed times live only for one render pass.
#[derive(Debug, Clone, Copy)]
pub struct TimedAppointment<'a> {
    pub appointment: &'a Appointment,
    pub start: ClockTime,
    pub end: ClockTime,
}

impl<'a> TimedAppointment<'a> {
    /// Start of the interval in minutes since midnight.
    pub fn start_minutes(&self) -> i32 {
        self.start.minutes() as i32
    }

    /// End of the interval in minutes, with degenerate intervals clamped to
    /// a minimum visual duration so they still participate in overlap
    /// detection. May exceed 24h for clamped late-night entries.
    pub fn clamped_end_minutes(&self) -> i32 {
        self.start_minutes() + time_math::clamped_duration(self.start, self.end)
    }

    pub fn is_degenerate(&self) -> bool {
        time_math::duration_minutes(self.start, self.end) <= 0
    }
}

/// Extract the calendar date from a raw `date` field.
///
/// Accepts both the pure `"YYYY-MM-DD"` form and timestamp forms such as
/// `"2026-08-26T09:00:00"` or `"2026-08-26 09:00:00"`; only the portion
/// before the time delimiter is used.
pub fn calendar_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw
        .split(|c| c == 'T' || c == ' ')
        .next()
        .unwrap_or(raw)
        .trim();
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Group appointments into one bucket per visible day column.
///
/// Appointments whose date matches no column are outside the displayed week
/// and are dropped. Records with unparseable dates or times are skipped with
/// a warning; one bad record never takes down the rest of the day. Within a
/// bucket, entries are sorted by start time, ties broken by id so the layout
/// is deterministic.
pub fn bucketize<'a>(
    appointments: &'a [Appointment],
    days: &[DayColumn],
) -> Vec<Vec<TimedAppointment<'a>>> {
    let mut buckets: Vec<Vec<TimedAppointment<'a>>> = vec![Vec::new(); days.len()];

    for appointment in appointments {
        let Some(date) = calendar_date(&appointment.date) else {
            log::warn!(
                "skipping appointment {}: unparseable date {:?}",
                appointment.id,
                appointment.date
            );
            continue;
        };

        let Some(day) = days.iter().find(|d| d.date == date) else {
            // Belongs to a different week; nothing to render.
            log::debug!(
                "dropping appointment {}: {}",
                appointment.id,
                GridError::DateOutOfWindow(date)
            );
            continue;
        };

        let start = match ClockTime::parse(&appointment.start_time) {
            Ok(t) => t,
            Err(err) => {
                log::warn!("skipping appointment {}: {}", appointment.id, err);
                continue;
            }
        };
        let end = match ClockTime::parse(&appointment.end_time) {
            Ok(t) => t,
            Err(err) => {
                log::warn!("skipping appointment {}: {}", appointment.id, err);
                continue;
            }
        };

        buckets[day.index].push(TimedAppointment {
            appointment,
            start,
            end,
        });
    }

    for bucket in &mut buckets {
        bucket.sort_by(|a, b| {
            a.start
                .cmp(&b.start)
                .then_with(|| a.appointment.id.cmp(&b.appointment.id))
        });
    }

    buckets
}
