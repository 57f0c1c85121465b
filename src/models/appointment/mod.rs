// Appointment module
// Appointment records as delivered by the clinic REST API

use serde::{Deserialize, Serialize};

/// Lifecycle status of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Confirmed,
    Pending,
    Canceled,
}

/// A lightweight `{id, name}` reference to a related record
/// (client, therapist or service) owned by another service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: String,
    pub name: String,
}

/// A scheduled appointment, read-only to the grid engine.
///
/// The `date` and time fields are kept in the wire format the API hands us:
/// `date` is either `"YYYY-MM-DD"` or a full timestamp, `start_time` and
/// `end_time` are `"HH:mm"` strings. Parsing (and per-record recovery from
/// malformed values) happens in the layout pipeline, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub client: Option<NamedRef>,
    #[serde(default)]
    pub therapist: Option<NamedRef>,
    #[serde(default)]
    pub service: Option<NamedRef>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Appointment {
    /// Create a new appointment with required fields
    ///
    /// # Arguments
    /// * `id` - Unique appointment id (required, non-empty)
    /// * `date` - Calendar date, `"YYYY-MM-DD"` or timestamp form
    /// * `start_time` / `end_time` - `"HH:mm"` strings
    ///
    /// # Examples
    /// ```
    /// use clinic_scheduler::models::appointment::Appointment;
    ///
    /// let appt = Appointment::new("a-1", "2026-08-26", "09:00", "09:30").unwrap();
    /// assert_eq!(appt.id, "a-1");
    /// ```
    pub fn new(
        id: impl Into<String>,
        date: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Result<Self, String> {
        let id = id.into();

        if id.trim().is_empty() {
            return Err("Appointment id cannot be empty".to_string());
        }

        Ok(Self {
            id,
            date: date.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            status: AppointmentStatus::Confirmed,
            client: None,
            therapist: None,
            service: None,
            notes: None,
        })
    }

    /// Create a builder for constructing appointments with optional fields
    pub fn builder() -> AppointmentBuilder {
        AppointmentBuilder::new()
    }

    /// Best label for a card: client name, then service name, then the id.
    pub fn display_label(&self) -> &str {
        if let Some(client) = &self.client {
            return &client.name;
        }
        if let Some(service) = &self.service {
            return &service.name;
        }
        &self.id
    }

    pub fn is_canceled(&self) -> bool {
        self.status == AppointmentStatus::Canceled
    }
}

/// Builder for creating appointments with optional fields
pub struct AppointmentBuilder {
    id: Option<String>,
    date: Option<String>,
    start_time: Option<String>,
    end_time: Option<String>,
    status: AppointmentStatus,
    client: Option<NamedRef>,
    therapist: Option<NamedRef>,
    service: Option<NamedRef>,
    notes: Option<String>,
}

impl AppointmentBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            date: None,
            start_time: None,
            end_time: None,
            status: AppointmentStatus::Confirmed,
            client: None,
            therapist: None,
            service: None,
            notes: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn times(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_time = Some(start.into());
        self.end_time = Some(end.into());
        self
    }

    pub fn status(mut self, status: AppointmentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn client(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.client = Some(NamedRef {
            id: id.into(),
            name: name.into(),
        });
        self
    }

    pub fn therapist(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.therapist = Some(NamedRef {
            id: id.into(),
            name: name.into(),
        });
        self
    }

    pub fn service(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.service = Some(NamedRef {
            id: id.into(),
            name: name.into(),
        });
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn build(self) -> Result<Appointment, String> {
        let id = self.id.ok_or("Appointment id is required")?;
        let date = self.date.ok_or("Appointment date is required")?;
        let start_time = self.start_time.ok_or("Appointment start time is required")?;
        let end_time = self.end_time.ok_or("Appointment end time is required")?;

        let mut appointment = Appointment::new(id, date, start_time, end_time)?;
        appointment.status = self.status;
        appointment.client = self.client;
        appointment.therapist = self.therapist;
        appointment.service = self.service;
        appointment.notes = self.notes;
        Ok(appointment)
    }
}

impl Default for AppointmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
