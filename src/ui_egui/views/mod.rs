//! Scheduler views and the interaction results they produce.

use chrono::NaiveDate;

use crate::grid::ClockTime;
use crate::models::appointment::Appointment;

pub mod appointment_card;
pub mod inspector;
mod palette;
pub mod time_grid;

/// A request to move an appointment to a new slot, produced when a card
/// drag ends over the grid. The engine only emits this; persisting the move
/// belongs to the host's services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    pub appointment_id: String,
    pub new_date: NaiveDate,
    pub new_start: ClockTime,
    pub new_end: ClockTime,
}

/// Result of user interactions with the time grid.
///
/// Collects the intents raised during one render pass so the composing page
/// can process them after the view returns.
#[derive(Default)]
pub struct GridInteraction {
    /// Appointment clicked while the grid is in delegation mode.
    pub clicked: Option<Appointment>,
    /// Drag-to-move request (the `on_move_appointment` hook).
    pub move_request: Option<MoveRequest>,
}

impl GridInteraction {
    /// Merge another result into this one.
    pub fn merge(&mut self, other: GridInteraction) {
        if other.clicked.is_some() {
            self.clicked = other.clicked;
        }
        if other.move_request.is_some() {
            self.move_request = other.move_request;
        }
    }

    /// Check if any action needs to be processed.
    pub fn has_actions(&self) -> bool {
        self.clicked.is_some() || self.move_request.is_some()
    }
}
