//! The full layout pipeline: appointments in, card rectangles out.
//!
//! Pure per invocation; recomputed from scratch on every appointment-list or
//! axis change, so there is no cache to invalidate and no stale state to
//! synchronize.

use super::axis::TimeAxis;
use super::buckets::{bucketize, TimedAppointment};
use super::lanes::assign_lanes;
use super::time_math;

/// Fractional gutter between side-by-side lanes, as a percentage of the
/// day-column width.
pub const LANE_GUTTER_PERCENT: f32 = 1.5;

/// Computed placement for one appointment card. Ephemeral: owned by the
/// render pass that produced it, never persisted or mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRect {
    pub appointment_id: String,
    pub day_index: usize,
    /// Percentage down the visible hour range at which the card starts.
    pub top_percent: f32,
    /// Card height in pixels at the pipeline's `pixels_per_hour`.
    pub height_px: f32,
    pub lane_index: usize,
    pub lane_count: usize,
}

impl LayoutRect {
    /// Left edge within the day column, percent.
    pub fn left_percent(&self) -> f32 {
        self.lane_index as f32 / self.lane_count as f32 * 100.0
    }

    /// Card width within the day column, percent, minus the lane gutter.
    pub fn width_percent(&self) -> f32 {
        let full = 100.0 / self.lane_count as f32;
        (full - LANE_GUTTER_PERCENT).max(full * 0.5)
    }
}

/// Run the whole pipeline: bucketize by day, clip to the visible hour
/// window, assign lanes, and emit one [`LayoutRect`] per visible card.
///
/// Per-record failures (bad dates, bad times, out-of-week dates) are already
/// recovered inside [`bucketize`]; this stage additionally drops entries
/// whose interval misses the hour window entirely and clips partial overlaps
/// to the window edges.
pub fn layout_week(
    appointments: &[crate::models::appointment::Appointment],
    axis: &TimeAxis,
    pixels_per_hour: f32,
) -> Vec<LayoutRect> {
    let days = axis.day_columns();
    let buckets = bucketize(appointments, &days);

    let window_start = axis.window_start_minutes();
    let window_end = axis.window_end_minutes();
    let visible = axis.visible_minutes() as f32;

    let mut rects = Vec::new();

    for (day_index, bucket) in buckets.iter().enumerate() {
        // Clip each entry to the visible window before lane assignment, so
        // overlap is judged on what the user can actually see.
        let clipped: Vec<(&TimedAppointment<'_>, i32, i32)> = bucket
            .iter()
            .filter_map(|entry| {
                if entry.is_degenerate() {
                    log::warn!(
                        "appointment {} has a degenerate interval {}..{}, clamping",
                        entry.appointment.id,
                        entry.start,
                        entry.end
                    );
                }
                let start = entry.start_minutes().max(window_start);
                let end = entry.clamped_end_minutes().min(window_end);
                if start >= end {
                    log::debug!(
                        "appointment {} falls outside the visible hours",
                        entry.appointment.id
                    );
                    return None;
                }
                Some((entry, start, end))
            })
            .collect();

        let intervals: Vec<(i32, i32)> =
            clipped.iter().map(|&(_, start, end)| (start, end)).collect();
        let slots = assign_lanes(&intervals);

        for ((entry, start, end), slot) in clipped.into_iter().zip(slots) {
            rects.push(LayoutRect {
                appointment_id: entry.appointment.id.clone(),
                day_index,
                top_percent: (start - window_start) as f32 / visible * 100.0,
                height_px: time_math::height_from_duration(end - start, pixels_per_hour),
                lane_index: slot.lane_index,
                lane_count: slot.lane_count,
            });
        }
    }

    rects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::time_math::MIN_CARD_HEIGHT;
    use crate::models::appointment::Appointment;
    use chrono::NaiveDate;

    fn axis() -> TimeAxis {
        TimeAxis::new(NaiveDate::from_ymd_opt(2026, 8, 24).unwrap(), 8, 20).unwrap()
    }

    fn appt(id: &str, date: &str, start: &str, end: &str) -> Appointment {
        Appointment::new(id, date, start, end).unwrap()
    }

    #[test]
    fn test_card_geometry_for_simple_appointment() {
        let appointments = vec![appt("a", "2026-08-24", "09:00", "10:00")];
        let rects = layout_week(&appointments, &axis(), 60.0);

        assert_eq!(rects.len(), 1);
        let rect = &rects[0];
        assert_eq!(rect.day_index, 0);
        // 09:00 is one hour into an 8:00-20:00 window.
        assert!((rect.top_percent - 100.0 / 12.0).abs() < 1e-4);
        assert_eq!(rect.height_px, 60.0);
        assert_eq!(rect.lane_count, 1);
        assert_eq!(rect.left_percent(), 0.0);
    }

    #[test]
    fn test_overlap_splits_column() {
        let appointments = vec![
            appt("a", "2026-08-24", "09:00", "09:30"),
            appt("b", "2026-08-24", "09:15", "09:45"),
        ];
        let rects = layout_week(&appointments, &axis(), 60.0);
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0].lane_index, 0);
        assert_eq!(rects[1].lane_index, 1);
        assert!(rects.iter().all(|r| r.lane_count == 2));
        assert_eq!(rects[1].left_percent(), 50.0);
    }

    #[test]
    fn test_entries_outside_hour_window_are_dropped() {
        let appointments = vec![
            appt("dawn", "2026-08-24", "05:00", "06:00"),
            appt("night", "2026-08-24", "21:00", "22:00"),
            appt("kept", "2026-08-24", "19:30", "20:30"),
        ];
        let rects = layout_week(&appointments, &axis(), 60.0);
        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0].appointment_id, "kept");
        // Clipped at the 20:00 boundary: 30 minutes tall.
        assert!((rects[0].height_px - MIN_CARD_HEIGHT.max(30.0)).abs() < 1e-4);
    }

    #[test]
    fn test_degenerate_interval_gets_min_height() {
        let appointments = vec![appt("a", "2026-08-24", "10:00", "09:00")];
        let rects = layout_week(&appointments, &axis(), 60.0);
        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0].height_px, MIN_CARD_HEIGHT);
    }

    #[test]
    fn test_pipeline_is_deterministic() {
        let appointments = vec![
            appt("b", "2026-08-24", "09:00", "10:00"),
            appt("a", "2026-08-24", "09:00", "10:00"),
            appt("c", "2026-08-26", "14:00", "15:30"),
        ];
        let first = layout_week(&appointments, &axis(), 60.0);
        let second = layout_week(&appointments, &axis(), 60.0);
        assert_eq!(first, second);
    }
}
