//! Painting a single appointment card inside its computed rectangle.

use egui::{Color32, Pos2, Rect, Stroke, Vec2};

use super::palette::TimeGridPalette;
use crate::models::appointment::{Appointment, AppointmentStatus};

fn status_color(appointment: &Appointment, palette: &TimeGridPalette) -> Color32 {
    match appointment.status {
        AppointmentStatus::Confirmed => palette.card_confirmed,
        AppointmentStatus::Pending => palette.card_pending,
        AppointmentStatus::Canceled => palette.card_canceled,
    }
}

/// Paint one card and return the rect used for hit testing.
///
/// Canceled appointments stay visible but dimmed, the same treatment the
/// rest of the console gives stale records.
pub(crate) fn draw_card(
    ui: &egui::Ui,
    rect: Rect,
    appointment: &Appointment,
    time_label: &str,
    palette: &TimeGridPalette,
    selected: bool,
) -> Rect {
    let base_color = status_color(appointment, palette);
    let fill = if appointment.is_canceled() {
        Color32::from_rgba_unmultiplied(
            (base_color.r() as f32 * 0.6) as u8,
            (base_color.g() as f32 * 0.6) as u8,
            (base_color.b() as f32 * 0.6) as u8,
            140,
        )
    } else {
        base_color
    };

    let card_rect = rect.shrink2(Vec2::new(1.0, 1.0));
    ui.painter()
        .rect_filled(card_rect, egui::Rounding::same(3.0), fill);

    if selected {
        ui.painter().rect_stroke(
            card_rect,
            egui::Rounding::same(3.0),
            Stroke::new(2.0, palette.selected_outline),
        );
    }

    let text_color = if appointment.is_canceled() {
        Color32::from_rgba_unmultiplied(255, 255, 255, 170)
    } else {
        palette.card_text
    };

    let mut title = String::new();
    title.push_str(appointment.display_label());
    if let Some(service) = &appointment.service {
        if appointment.client.is_some() {
            title.push_str(&format!(" [{}]", service.name));
        }
    }

    let font_id = egui::FontId::proportional(10.0);
    let available_width = (card_rect.width() - 8.0).max(8.0);

    let layout_job = egui::text::LayoutJob::simple(
        format!("{}\n{}", title, time_label),
        font_id,
        text_color,
        available_width,
    );
    let galley = ui.fonts(|f| f.layout_job(layout_job));

    ui.painter().galley(
        Pos2::new(card_rect.left() + 4.0, card_rect.top() + 3.0),
        galley,
        text_color,
    );

    card_rect
}
