//! Theme colors for the scheduler UI.

use egui::Color32;

/// Color scheme applied to the whole console.
#[derive(Debug, Clone, PartialEq)]
pub struct SchedulerTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Grid background color
    pub grid_background: Color32,

    /// Weekend day-column background color
    pub weekend_background: Color32,

    /// Today's column background color
    pub today_background: Color32,

    /// Today's column border color
    pub today_border: Color32,

    /// Regular day-column background color
    pub day_background: Color32,

    /// Column/row border color
    pub day_border: Color32,

    /// Primary text color (headings, labels)
    pub text_primary: Color32,

    /// Secondary text color (hour labels, secondary info)
    pub text_secondary: Color32,

    /// Header row background
    pub header_background: Color32,

    /// Header row text
    pub header_text: Color32,
}

impl SchedulerTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            grid_background: Color32::from_rgb(255, 255, 255),
            weekend_background: Color32::from_rgb(250, 250, 252),
            today_background: Color32::from_rgb(230, 240, 255),
            today_border: Color32::from_rgb(70, 130, 220),
            day_background: Color32::from_rgb(255, 255, 255),
            day_border: Color32::from_rgb(220, 220, 224),
            text_primary: Color32::from_rgb(40, 40, 45),
            text_secondary: Color32::from_rgb(120, 120, 128),
            header_background: Color32::from_rgb(238, 240, 244),
            header_text: Color32::from_rgb(60, 60, 68),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(28, 28, 32),
            grid_background: Color32::from_rgb(36, 36, 42),
            weekend_background: Color32::from_rgb(32, 32, 38),
            today_background: Color32::from_rgb(38, 48, 66),
            today_border: Color32::from_rgb(90, 150, 240),
            day_background: Color32::from_rgb(36, 36, 42),
            day_border: Color32::from_rgb(58, 58, 66),
            text_primary: Color32::from_rgb(225, 225, 230),
            text_secondary: Color32::from_rgb(150, 150, 158),
            header_background: Color32::from_rgb(44, 44, 52),
            header_text: Color32::from_rgb(200, 200, 208),
        }
    }

    /// Base egui visuals matching this theme.
    pub fn visuals(&self) -> egui::Visuals {
        if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        }
    }
}

impl Default for SchedulerTheme {
    fn default() -> Self {
        Self::light()
    }
}
