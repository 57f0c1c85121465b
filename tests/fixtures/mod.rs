// Test fixtures - reusable test data
// Provides consistent appointments and axes across test files

use chrono::NaiveDate;
use clinic_scheduler::grid::TimeAxis;
use clinic_scheduler::models::appointment::{Appointment, AppointmentStatus};

/// Monday of the reference test week.
pub fn week_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 24).unwrap()
}

/// The default 08:00-20:00 axis over the reference week.
pub fn default_axis() -> TimeAxis {
    TimeAxis::new(week_start(), 8, 20).unwrap()
}

/// A confirmed appointment with just the scheduling fields set.
pub fn appt(id: &str, date: &str, start: &str, end: &str) -> Appointment {
    Appointment::new(id, date, start, end).unwrap()
}

/// A fully-populated appointment the way the API delivers them.
pub fn clinic_appointment(id: &str, date: &str, start: &str, end: &str) -> Appointment {
    Appointment::builder()
        .id(id)
        .date(date)
        .times(start, end)
        .status(AppointmentStatus::Confirmed)
        .client("c-1", "Dana Reyes")
        .therapist("t-1", "K. Osei")
        .service("s-1", "Physiotherapy")
        .notes("weekly follow-up")
        .build()
        .unwrap()
}
