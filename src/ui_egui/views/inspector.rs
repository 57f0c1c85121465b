//! The inspector surface for a selected appointment.
//!
//! The composing page picks one of two styles at construction: a floating
//! dialog window or a docked side overlay. The choice is configuration,
//! never inferred from render state.

use egui::RichText;

use crate::grid::InspectorStyle;
use crate::models::appointment::{Appointment, AppointmentStatus};

/// What the inspector asked for this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectorAction {
    KeepOpen,
    Close,
}

fn status_label(status: AppointmentStatus) -> &'static str {
    match status {
        AppointmentStatus::Confirmed => "Confirmed",
        AppointmentStatus::Pending => "Pending",
        AppointmentStatus::Canceled => "Canceled",
    }
}

fn details(ui: &mut egui::Ui, appointment: &Appointment) {
    egui::Grid::new("appointment_inspector_grid")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            ui.label(RichText::new("Date").strong());
            ui.label(&appointment.date);
            ui.end_row();

            ui.label(RichText::new("Time").strong());
            ui.label(format!(
                "{} – {}",
                appointment.start_time, appointment.end_time
            ));
            ui.end_row();

            ui.label(RichText::new("Status").strong());
            ui.label(status_label(appointment.status));
            ui.end_row();

            if let Some(client) = &appointment.client {
                ui.label(RichText::new("Client").strong());
                ui.label(&client.name);
                ui.end_row();
            }

            if let Some(therapist) = &appointment.therapist {
                ui.label(RichText::new("Therapist").strong());
                ui.label(&therapist.name);
                ui.end_row();
            }

            if let Some(service) = &appointment.service {
                ui.label(RichText::new("Service").strong());
                ui.label(&service.name);
                ui.end_row();
            }
        });

    if let Some(notes) = &appointment.notes {
        ui.separator();
        ui.label(RichText::new("Notes").strong());
        ui.label(notes);
    }
}

/// Show the inspector for `appointment` in the configured style.
pub(crate) fn show_inspector(
    ctx: &egui::Context,
    style: InspectorStyle,
    appointment: &Appointment,
) -> InspectorAction {
    let mut action = InspectorAction::KeepOpen;

    match style {
        InspectorStyle::Dialog => {
            let mut open = true;
            egui::Window::new("Appointment")
                .collapsible(false)
                .resizable(false)
                .open(&mut open)
                .show(ctx, |ui| {
                    details(ui, appointment);
                    ui.separator();
                    if ui.button("Close").clicked() {
                        action = InspectorAction::Close;
                    }
                });
            if !open {
                action = InspectorAction::Close;
            }
        }
        InspectorStyle::Overlay => {
            egui::SidePanel::right("appointment_inspector")
                .resizable(false)
                .default_width(220.0)
                .show(ctx, |ui| {
                    ui.heading("Appointment");
                    ui.separator();
                    details(ui, appointment);
                    ui.separator();
                    if ui.button("Close").clicked() {
                        action = InspectorAction::Close;
                    }
                });
        }
    }

    action
}
