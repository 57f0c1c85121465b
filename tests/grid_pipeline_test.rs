// Integration tests for the full layout pipeline:
// bucketize -> lane assignment -> layout rects, plus the now-line and
// selection flows the view composes on top.

mod fixtures;

use chrono::TimeZone;
use pretty_assertions::assert_eq;

use clinic_scheduler::grid::{
    layout_week, now_position, ClickOutcome, ClickRouting, ClockTime, InspectorStyle,
    SelectionController, TimeAxis,
};
use fixtures::{appt, clinic_appointment, default_axis, week_start};

const PIXELS_PER_HOUR: f32 = 60.0;

#[test]
fn test_overlapping_morning_pair_shares_the_column() {
    // Scenario: 09:00-09:30 and 09:15-09:45 on the same day.
    let appointments = vec![
        appt("a", "2026-08-24", "09:00", "09:30"),
        appt("b", "2026-08-24", "09:15", "09:45"),
    ];

    let rects = layout_week(&appointments, &default_axis(), PIXELS_PER_HOUR);

    assert_eq!(rects.len(), 2);
    assert!(rects.iter().all(|r| r.day_index == 0));
    assert_eq!(rects[0].lane_index, 0);
    assert_eq!(rects[1].lane_index, 1);
    assert!(rects.iter().all(|r| r.lane_count == 2));
}

#[test]
fn test_back_to_back_appointments_reuse_the_lane() {
    // Scenario: 10:00-11:00 followed by 11:00-12:00.
    let appointments = vec![
        appt("a", "2026-08-24", "10:00", "11:00"),
        appt("b", "2026-08-24", "11:00", "12:00"),
    ];

    let rects = layout_week(&appointments, &default_axis(), PIXELS_PER_HOUR);

    assert_eq!(rects.len(), 2);
    assert!(rects.iter().all(|r| r.lane_index == 0 && r.lane_count == 1));
}

#[test]
fn test_malformed_time_only_drops_that_card() {
    // Scenario: a "25:00" start time; the rest of the day still renders.
    let appointments = vec![
        appt("bad", "2026-08-24", "25:00", "26:00"),
        appt("good-1", "2026-08-24", "09:00", "10:00"),
        appt("good-2", "2026-08-24", "10:00", "11:00"),
    ];

    let rects = layout_week(&appointments, &default_axis(), PIXELS_PER_HOUR);

    let ids: Vec<&str> = rects.iter().map(|r| r.appointment_id.as_str()).collect();
    assert_eq!(ids, vec!["good-1", "good-2"]);
}

#[test]
fn test_now_line_percent_on_wednesday_afternoon() {
    // Scenario: now = Wednesday 14:30 on an 8..22 grid.
    let axis = TimeAxis::new(week_start(), 8, 22).unwrap();
    let now = chrono::Local
        .with_ymd_and_hms(2026, 8, 26, 14, 30, 0)
        .single()
        .unwrap();

    let position = now_position(now, &axis).unwrap();

    assert_eq!(position.day_index, 2);
    let expected = (14.5 - 8.0) / (22.0 - 8.0) * 100.0;
    assert!((position.top_percent - expected).abs() < 1e-4);
}

#[test]
fn test_appointment_a_week_away_contributes_nothing() {
    // Scenario: dated one week outside week_start..week_start+6d.
    let appointments = vec![
        appt("far", "2026-08-31", "09:00", "10:00"),
        appt("near", "2026-08-28", "09:00", "10:00"),
    ];

    let rects = layout_week(&appointments, &default_axis(), PIXELS_PER_HOUR);

    assert_eq!(rects.len(), 1);
    assert_eq!(rects[0].appointment_id, "near");
    assert_eq!(rects[0].day_index, 4);
}

#[test]
fn test_pipeline_is_deterministic_for_a_fixed_snapshot() {
    let appointments = vec![
        clinic_appointment("a-1", "2026-08-24", "09:00", "09:45"),
        clinic_appointment("a-2", "2026-08-24", "09:30", "10:15"),
        clinic_appointment("a-3", "2026-08-26", "11:00", "12:00"),
        clinic_appointment("a-4", "2026-08-26T00:00:00", "11:30", "12:30"),
        clinic_appointment("a-5", "2026-08-30", "19:30", "20:30"),
    ];

    let first = layout_week(&appointments, &default_axis(), PIXELS_PER_HOUR);
    let second = layout_week(&appointments, &default_axis(), PIXELS_PER_HOUR);

    assert_eq!(first, second);
    assert_eq!(first.len(), 5);
}

#[test]
fn test_timestamp_dates_land_in_the_right_bucket() {
    let appointments = vec![clinic_appointment(
        "a-1",
        "2026-08-27T09:00:00",
        "09:00",
        "10:00",
    )];

    let rects = layout_week(&appointments, &default_axis(), PIXELS_PER_HOUR);

    assert_eq!(rects.len(), 1);
    assert_eq!(rects[0].day_index, 3);
}

#[test]
fn test_misconfigured_axis_fails_at_construction() {
    assert!(TimeAxis::new(week_start(), 20, 8).is_err());
    assert!(TimeAxis::new(week_start(), 9, 9).is_err());
}

#[test]
fn test_selection_flow_from_click_to_close() {
    let mut controller =
        SelectionController::new(ClickRouting::SelfContained, InspectorStyle::Overlay);

    assert_eq!(controller.click("a-1"), ClickOutcome::Inspecting);
    assert_eq!(controller.selected_id(), Some("a-1"));

    // Clicking another card replaces the selection directly.
    controller.click("a-2");
    assert_eq!(controller.selected_id(), Some("a-2"));
    assert!(controller.inspector_open());

    controller.close();
    assert_eq!(controller.selected_id(), None);
    assert!(!controller.inspector_open());
}

#[test]
fn test_clock_time_round_trip_across_the_day() {
    for minutes in (0..1440).step_by(7) {
        let time = ClockTime::from_minutes(minutes as u16).unwrap();
        assert_eq!(ClockTime::parse(&time.format()).unwrap(), time);
    }
}
