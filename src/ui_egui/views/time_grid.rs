//! Time grid rendering for the weekly scheduler view.
//!
//! Draws the day/hour skeleton, places appointment cards from the layout
//! pipeline, overlays the current-time indicator, and turns pointer input
//! into selection and move intents.

use std::collections::HashMap;

use chrono::{Datelike, Local};
use egui::{Align2, CursorIcon, Pos2, Rect, Sense, Stroke, Vec2};

use super::appointment_card::draw_card;
use super::inspector::{show_inspector, InspectorAction};
use super::palette::TimeGridPalette;
use super::{GridInteraction, MoveRequest};
use crate::grid::time_math::{self, ClockTime, MINUTES_PER_DAY};
use crate::grid::{
    layout_week, now_position, ClickOutcome, ClickRouting, InspectorStyle, LayoutRect,
    SelectionController, TimeAxis,
};
use crate::models::appointment::Appointment;
use crate::ui_egui::theme::SchedulerTheme;

/// Constants for time grid rendering
pub const TIME_LABEL_WIDTH: f32 = 50.0;
pub const COLUMN_SPACING: f32 = 1.0;
pub const HOUR_HEIGHT: f32 = 60.0;
pub const HEADER_HEIGHT: f32 = 28.0;
const SNAP_MINUTES: i32 = 15;

/// In-flight card drag. Owned by the view instance, never global.
struct DragState {
    appointment_id: String,
    duration_minutes: i32,
}

/// Pixel geometry of one rendered grid, derived from the allocated rect.
struct GridGeometry {
    body: Rect,
    col_width: f32,
    window_start: i32,
    visible_minutes: i32,
}

impl GridGeometry {
    fn new(rect: Rect, axis: &TimeAxis) -> Self {
        let body = Rect::from_min_max(
            Pos2::new(rect.left() + TIME_LABEL_WIDTH, rect.top() + HEADER_HEIGHT),
            rect.max,
        );
        Self {
            body,
            col_width: (body.width() - 6.0 * COLUMN_SPACING) / 7.0,
            window_start: axis.window_start_minutes(),
            visible_minutes: axis.visible_minutes(),
        }
    }

    fn col_left(&self, day_index: usize) -> f32 {
        self.body.left() + day_index as f32 * (self.col_width + COLUMN_SPACING)
    }

    fn y_of_minutes(&self, minutes: i32) -> f32 {
        self.body.top()
            + (minutes - self.window_start) as f32 / self.visible_minutes as f32
                * self.body.height()
    }

    fn card_rect(&self, layout: &LayoutRect) -> Rect {
        let col_left = self.col_left(layout.day_index);
        let left = col_left + layout.left_percent() / 100.0 * self.col_width;
        let width = layout.width_percent() / 100.0 * self.col_width;
        let top = self.body.top() + layout.top_percent / 100.0 * self.body.height();
        let height = layout.height_px.min(self.body.bottom() - top);
        Rect::from_min_size(Pos2::new(left, top), Vec2::new(width, height))
    }

    /// Map a pointer position to a (day, snapped start time) slot.
    fn slot_at(&self, pos: Pos2) -> Option<(usize, ClockTime)> {
        if !self.body.contains(pos) {
            return None;
        }
        let day_index = (((pos.x - self.body.left()) / (self.col_width + COLUMN_SPACING)) as usize)
            .min(6);
        let raw_minutes = self.window_start
            + ((pos.y - self.body.top()) / self.body.height() * self.visible_minutes as f32) as i32;
        let snapped = (raw_minutes / SNAP_MINUTES) * SNAP_MINUTES;
        let clamped = snapped
            .max(self.window_start)
            .min(self.window_start + self.visible_minutes - SNAP_MINUTES);
        ClockTime::from_minutes(clamped as u16).map(|t| (day_index, t))
    }
}

/// The weekly time-grid view.
///
/// Owns its selection controller and drag state; everything else is derived
/// per frame from the appointment list and the axis.
pub struct TimeGridView {
    selection: SelectionController,
    drag: Option<DragState>,
}

impl TimeGridView {
    pub fn new(routing: ClickRouting, style: InspectorStyle) -> Self {
        Self {
            selection: SelectionController::new(routing, style),
            drag: None,
        }
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    /// Render the grid for one week and collect interaction intents.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        axis: &TimeAxis,
        appointments: &[Appointment],
        theme: &SchedulerTheme,
    ) -> GridInteraction {
        let mut result = GridInteraction::default();
        let palette = TimeGridPalette::from_theme(theme);

        let hours = axis.visible_hours().len() as f32;
        let desired = Vec2::new(ui.available_width(), HEADER_HEIGHT + hours * HOUR_HEIGHT);
        let (rect, response) = ui.allocate_exact_size(desired, Sense::click_and_drag());
        let geometry = GridGeometry::new(rect, axis);

        self.paint_skeleton(ui, rect, &geometry, axis, &palette);

        // One consistent snapshot per render pass.
        let pixels_per_hour = geometry.body.height() / hours;
        let layouts = layout_week(appointments, axis, pixels_per_hour);
        let by_id: HashMap<&str, &Appointment> = appointments
            .iter()
            .map(|a| (a.id.as_str(), a))
            .collect();

        // Draw cards, remembering hitboxes in paint order (topmost last).
        let mut hitboxes: Vec<(Rect, &Appointment)> = Vec::new();
        for layout in &layouts {
            let Some(&appointment) = by_id.get(layout.appointment_id.as_str()) else {
                continue;
            };
            let card_rect = geometry.card_rect(layout);
            let time_label = format!("{}–{}", appointment.start_time, appointment.end_time);
            let selected = self.selection.selected_id() == Some(appointment.id.as_str());
            let hit = draw_card(ui, card_rect, appointment, &time_label, &palette, selected);
            hitboxes.push((hit, appointment));
        }

        self.draw_now_line(ui, &geometry, axis, &palette);

        let pointer_pos = response
            .interact_pointer_pos()
            .or_else(|| ui.input(|i| i.pointer.hover_pos()));
        let hovered_hit = pointer_pos.and_then(|pos| {
            hitboxes
                .iter()
                .rev()
                .find(|(hit_rect, _)| hit_rect.contains(pos))
                .copied()
        });
        let hovered = hovered_hit.map(|(_, appointment)| appointment);

        if let Some((hit_rect, _)) = hovered_hit {
            if self.drag.is_none() {
                ui.painter()
                    .rect_filled(hit_rect, egui::Rounding::same(3.0), palette.hover_overlay);
                ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
            }
        }

        if response.clicked() {
            if let Some(appointment) = hovered {
                match self.selection.click(&appointment.id) {
                    ClickOutcome::Forward => result.clicked = Some((*appointment).clone()),
                    ClickOutcome::Inspecting => {}
                }
            }
        }

        self.handle_drag(
            &response,
            pointer_pos,
            hovered,
            &geometry,
            axis,
            ui,
            &palette,
            &mut result,
        );

        self.show_selected_inspector(ui.ctx(), &by_id);

        result
    }

    fn paint_skeleton(
        &self,
        ui: &egui::Ui,
        rect: Rect,
        geometry: &GridGeometry,
        axis: &TimeAxis,
        palette: &TimeGridPalette,
    ) {
        let painter = ui.painter();
        let today = Local::now().date_naive();

        // Header strip.
        let header_rect =
            Rect::from_min_size(rect.min, Vec2::new(rect.width(), HEADER_HEIGHT));
        painter.rect_filled(header_rect, 0.0, palette.header_bg);

        for day in axis.day_columns() {
            let col_left = geometry.col_left(day.index);
            let col_rect = Rect::from_min_max(
                Pos2::new(col_left, geometry.body.top()),
                Pos2::new(col_left + geometry.col_width, geometry.body.bottom()),
            );

            let weekday = day.date.weekday().num_days_from_sunday();
            let bg = if day.date == today {
                palette.today_bg
            } else if weekday == 0 || weekday == 6 {
                palette.weekend_bg
            } else {
                palette.regular_bg
            };
            painter.rect_filled(col_rect, 0.0, bg);

            painter.text(
                Pos2::new(col_rect.center().x, header_rect.center().y),
                Align2::CENTER_CENTER,
                day.date.format("%a %d/%m").to_string(),
                egui::FontId::proportional(12.0),
                palette.header_text,
            );

            // Column divider.
            painter.line_segment(
                [
                    Pos2::new(col_rect.right(), geometry.body.top()),
                    Pos2::new(col_rect.right(), geometry.body.bottom()),
                ],
                Stroke::new(1.0, palette.divider),
            );
        }

        // Hour rows and labels.
        for hour in axis.visible_hours() {
            let y = geometry.y_of_minutes(hour as i32 * 60);
            painter.line_segment(
                [
                    Pos2::new(geometry.body.left(), y),
                    Pos2::new(geometry.body.right(), y),
                ],
                Stroke::new(1.0, palette.hour_line),
            );
            painter.text(
                Pos2::new(geometry.body.left() - 6.0, y),
                Align2::RIGHT_CENTER,
                format!("{:02}:00", hour),
                egui::FontId::proportional(12.0),
                palette.label_text,
            );
        }
    }

    /// Draw the current time indicator line across today's column.
    fn draw_now_line(
        &self,
        ui: &egui::Ui,
        geometry: &GridGeometry,
        axis: &TimeAxis,
        palette: &TimeGridPalette,
    ) {
        let Some(position) = now_position(Local::now(), axis) else {
            return;
        };

        let y = geometry.body.top() + position.top_percent / 100.0 * geometry.body.height();
        let x_start = geometry.col_left(position.day_index);
        let x_end = x_start + geometry.col_width;

        let painter = ui.painter();
        painter.circle_filled(Pos2::new(x_start - 4.0, y), 3.0, palette.now_line);
        painter.line_segment(
            [Pos2::new(x_start, y), Pos2::new(x_end, y)],
            Stroke::new(2.0, palette.now_line),
        );
    }

    #[allow(clippy::too_many_arguments)]
    fn handle_drag(
        &mut self,
        response: &egui::Response,
        pointer_pos: Option<Pos2>,
        hovered: Option<&Appointment>,
        geometry: &GridGeometry,
        axis: &TimeAxis,
        ui: &egui::Ui,
        palette: &TimeGridPalette,
        result: &mut GridInteraction,
    ) {
        if response.drag_started() {
            if let Some(appointment) = hovered {
                // A card only renders with parseable times, but the list can
                // be refreshed between frames, so re-parse before dragging.
                if let (Ok(start), Ok(end)) = (
                    ClockTime::parse(&appointment.start_time),
                    ClockTime::parse(&appointment.end_time),
                ) {
                    self.drag = Some(DragState {
                        appointment_id: appointment.id.clone(),
                        duration_minutes: time_math::clamped_duration(start, end),
                    });
                }
            }
        }

        if let Some(drag) = &self.drag {
            if response.dragged() {
                ui.ctx().set_cursor_icon(CursorIcon::Grabbing);

                // Drop-target highlight.
                if let Some((day_index, start)) =
                    pointer_pos.and_then(|pos| geometry.slot_at(pos))
                {
                    let top = geometry.y_of_minutes(start.minutes() as i32);
                    let height =
                        drag.duration_minutes as f32 / geometry.visible_minutes as f32
                            * geometry.body.height();
                    let highlight = Rect::from_min_size(
                        Pos2::new(geometry.col_left(day_index), top),
                        Vec2::new(geometry.col_width, height),
                    )
                    .intersect(geometry.body)
                    .shrink2(Vec2::new(3.0, 2.0));
                    ui.painter().rect_stroke(
                        highlight,
                        2.0,
                        Stroke::new(1.5, palette.drop_highlight),
                    );
                }
            }
        }

        if response.drag_stopped() {
            if let Some(drag) = self.drag.take() {
                let target = pointer_pos
                    .and_then(|pos| geometry.slot_at(pos))
                    .and_then(|(day_index, start)| {
                        let end_minutes = (start.minutes() as i32 + drag.duration_minutes)
                            .min(MINUTES_PER_DAY - 1);
                        let end = ClockTime::from_minutes(end_minutes as u16)?;
                        Some((day_index, start, end))
                    });

                if let Some((day_index, start, end)) = target {
                    result.move_request = Some(MoveRequest {
                        appointment_id: drag.appointment_id,
                        new_date: axis.week_start() + chrono::Duration::days(day_index as i64),
                        new_start: start,
                        new_end: end,
                    });
                }
            }
        }
    }

    fn show_selected_inspector(
        &mut self,
        ctx: &egui::Context,
        by_id: &HashMap<&str, &Appointment>,
    ) {
        if !self.selection.inspector_open() {
            return;
        }
        let Some(selected_id) = self.selection.selected_id().map(str::to_string) else {
            return;
        };

        match by_id.get(selected_id.as_str()) {
            Some(appointment) => {
                if show_inspector(ctx, self.selection.style(), appointment)
                    == InspectorAction::Close
                {
                    self.selection.close();
                }
            }
            None => {
                // Selection outlived the record (deleted by the host).
                self.selection.close();
            }
        }
    }
}
