use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub heading: Color32,
    pub subdued: Color32,
    pub price: Color32,
    pub error: Color32,
    pub skeleton: Color32,
    pub status_ok: Color32,
    pub status_busy: Color32,
    pub status_failed: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub row_height: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        heading: Color32::from_rgb(0, 200, 150),
        subdued: Color32::GRAY,
        price: Color32::from_rgb(120, 200, 255),
        error: Color32::from_rgb(230, 80, 80),
        skeleton: Color32::from_gray(110),
        status_ok: Color32::from_rgb(80, 200, 120),
        status_busy: Color32::from_rgb(240, 190, 60),
        status_failed: Color32::from_rgb(230, 80, 80),
    },
    row_height: 32.0,
};

impl UiConfig {
    /// Frame for the Top Toolbar (Standard padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for Bottom Status bar (Tighter vertical padding)
    pub fn bottom_panel_frame(&self) -> Frame {
        Frame {
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(8, 4),
            ..Default::default()
        }
    }

    /// Card around the wallet details
    pub fn card_frame(&self) -> Frame {
        Frame {
            stroke: Stroke::new(1.0, self.colors.subdued),
            inner_margin: Margin::same(12),
            corner_radius: CornerRadius::same(6),
            ..Default::default()
        }
    }
}
