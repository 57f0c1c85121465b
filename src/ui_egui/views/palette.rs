use egui::Color32;

use crate::ui_egui::theme::SchedulerTheme;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

#[derive(Clone, Copy)]
pub(crate) struct TimeGridPalette {
    pub regular_bg: Color32,
    pub weekend_bg: Color32,
    pub today_bg: Color32,
    pub hour_line: Color32,
    pub divider: Color32,
    pub hover_overlay: Color32,
    pub header_bg: Color32,
    pub header_text: Color32,
    pub label_text: Color32,
    pub now_line: Color32,
    pub card_confirmed: Color32,
    pub card_pending: Color32,
    pub card_canceled: Color32,
    pub card_text: Color32,
    pub selected_outline: Color32,
    pub drop_highlight: Color32,
}

impl TimeGridPalette {
    pub fn from_theme(theme: &SchedulerTheme) -> Self {
        Self {
            regular_bg: theme.day_background,
            weekend_bg: theme.weekend_background,
            today_bg: theme.today_background,
            hour_line: theme.day_border,
            divider: with_alpha(theme.day_border, 220),
            hover_overlay: with_alpha(theme.today_border, if theme.is_dark { 80 } else { 50 }),
            header_bg: theme.header_background,
            header_text: theme.header_text,
            label_text: theme.text_secondary,
            now_line: Color32::from_rgb(255, 100, 100),
            card_confirmed: Color32::from_rgb(100, 150, 200),
            card_pending: Color32::from_rgb(222, 168, 62),
            card_canceled: blend(theme.day_background, Color32::from_rgb(128, 128, 128), 0.55),
            card_text: Color32::WHITE,
            selected_outline: theme.today_border,
            drop_highlight: Color32::from_rgb(120, 200, 120),
        }
    }
}
