//! Demo composing page for the scheduler grid.
//!
//! Stands in for the clinic console host: it owns an in-memory appointment
//! list (normally refreshed from the REST services), configures the grid
//! once, and applies the move requests the grid emits.

use std::time::Duration;

use chrono::Local;

use crate::grid::{
    axis::week_start_for, ClickRouting, InspectorStyle, NowTicker, TimeAxis,
};
use crate::models::appointment::{Appointment, AppointmentStatus};
use crate::ui_egui::theme::SchedulerTheme;
use crate::ui_egui::views::time_grid::TimeGridView;

/// Refresh period for the current-time indicator.
const NOW_TICK: Duration = Duration::from_secs(60);

pub struct SchedulerApp {
    axis: TimeAxis,
    appointments: Vec<Appointment>,
    grid: TimeGridView,
    theme: SchedulerTheme,
    status_line: String,
    /// Keeps the repaint timer alive for the app's lifetime; cancelled on
    /// drop when the window closes.
    _now_ticker: Option<NowTicker>,
}

impl SchedulerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let theme = SchedulerTheme::light();
        cc.egui_ctx.set_visuals(theme.visuals());

        let week_start = week_start_for(Local::now().date_naive(), 1);
        let axis = TimeAxis::new(week_start, 8, 20)
            .expect("default hour window is valid");

        let ticker_ctx = cc.egui_ctx.clone();
        let now_ticker = match NowTicker::start(NOW_TICK, move || ticker_ctx.request_repaint()) {
            Ok(ticker) => Some(ticker),
            Err(err) => {
                log::error!("failed to start current-time ticker: {err}");
                None
            }
        };

        Self {
            appointments: sample_appointments(&axis),
            axis,
            grid: TimeGridView::new(ClickRouting::SelfContained, InspectorStyle::Dialog),
            theme,
            status_line: String::new(),
            _now_ticker: now_ticker,
        }
    }

    fn apply_move(&mut self, request: crate::ui_egui::views::MoveRequest) {
        let Some(appointment) = self
            .appointments
            .iter_mut()
            .find(|a| a.id == request.appointment_id)
        else {
            log::warn!("move request for unknown appointment {}", request.appointment_id);
            return;
        };

        appointment.date = request.new_date.format("%Y-%m-%d").to_string();
        appointment.start_time = request.new_start.format();
        appointment.end_time = request.new_end.format();

        self.status_line = format!(
            "Moved {} to {} {}",
            appointment.display_label(),
            appointment.date,
            appointment.start_time
        );
        log::info!("{}", self.status_line);
    }
}

impl eframe::App for SchedulerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("scheduler_toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("◀").clicked() {
                    self.axis = self.axis.shifted_weeks(-1);
                }
                if ui.button("Today").clicked() {
                    let week_start = week_start_for(Local::now().date_naive(), 1);
                    self.axis = TimeAxis::new(
                        week_start,
                        self.axis.start_hour(),
                        self.axis.end_hour(),
                    )
                    .expect("hour window unchanged");
                }
                if ui.button("▶").clicked() {
                    self.axis = self.axis.shifted_weeks(1);
                }

                ui.separator();
                let end = self.axis.week_start() + chrono::Duration::days(6);
                ui.label(format!(
                    "Week of {} – {}",
                    self.axis.week_start().format("%d %b"),
                    end.format("%d %b %Y")
                ));

                if !self.status_line.is_empty() {
                    ui.separator();
                    ui.label(&self.status_line);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let interaction =
                    self.grid.show(ui, &self.axis, &self.appointments, &self.theme);

                if let Some(request) = interaction.move_request {
                    self.apply_move(request);
                }
                if let Some(appointment) = interaction.clicked {
                    // Only reachable in delegation mode.
                    log::info!("appointment {} clicked", appointment.id);
                }
            });
        });
    }
}

/// In-memory stand-in for the appointment service, seeded relative to the
/// current week so the demo always has something on screen.
fn sample_appointments(axis: &TimeAxis) -> Vec<Appointment> {
    let day = |offset: i64| {
        (axis.week_start() + chrono::Duration::days(offset))
            .format("%Y-%m-%d")
            .to_string()
    };

    let mut appointments = vec![
        Appointment::builder()
            .id("a-100")
            .date(day(0))
            .times("09:00", "09:45")
            .client("c-1", "Dana Reyes")
            .therapist("t-1", "K. Osei")
            .service("s-1", "Physiotherapy")
            .build()
            .expect("valid sample"),
        Appointment::builder()
            .id("a-101")
            .date(day(0))
            .times("09:30", "10:15")
            .client("c-2", "Ari Blum")
            .therapist("t-2", "M. Haddad")
            .service("s-2", "Massage")
            .build()
            .expect("valid sample"),
        Appointment::builder()
            .id("a-102")
            .date(day(2))
            .times("11:00", "12:00")
            .status(AppointmentStatus::Pending)
            .client("c-3", "Noa Lindt")
            .service("s-1", "Physiotherapy")
            .notes("First visit, bring referral")
            .build()
            .expect("valid sample"),
        Appointment::builder()
            .id("a-103")
            .date(day(3))
            .times("14:00", "15:30")
            .status(AppointmentStatus::Canceled)
            .client("c-4", "Sam Petrov")
            .build()
            .expect("valid sample"),
        Appointment::builder()
            .id("a-104")
            .date(day(4))
            .times("16:00", "16:30")
            .client("c-5", "Lior Adler")
            .service("s-3", "Consultation")
            .build()
            .expect("valid sample"),
    ];

    // Same-day overlap cluster to show lane splitting.
    appointments.push(
        Appointment::builder()
            .id("a-105")
            .date(day(2))
            .times("11:30", "12:30")
            .client("c-6", "Mika Toth")
            .service("s-2", "Massage")
            .build()
            .expect("valid sample"),
    );

    appointments
}
