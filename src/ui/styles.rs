use {
    crate::{data::FetchStatus, ui::UI_CONFIG},
    eframe::egui::{Color32, CornerRadius, RichText, Sense, Ui, Vec2},
};

pub(crate) fn colored_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).strong().color(UI_CONFIG.colors.heading)
}

pub(crate) fn status_color(status: FetchStatus) -> Color32 {
    match status {
        FetchStatus::Idle => UI_CONFIG.colors.subdued,
        FetchStatus::Loading => UI_CONFIG.colors.status_busy,
        FetchStatus::Success => UI_CONFIG.colors.status_ok,
        FetchStatus::Failed => UI_CONFIG.colors.status_failed,
    }
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    /// Grey placeholder bar standing in for a cell that has not loaded yet.
    fn skeleton_bar(&mut self, width: f32);
    fn status_dot(&mut self, status: FetchStatus);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.subdued));
    }

    fn skeleton_bar(&mut self, width: f32) {
        let (rect, _) = self.allocate_exact_size(Vec2::new(width, 12.0), Sense::hover());
        if self.is_rect_visible(rect) {
            self.painter()
                .rect_filled(rect, CornerRadius::same(3), UI_CONFIG.colors.skeleton);
        }
    }

    fn status_dot(&mut self, status: FetchStatus) {
        let (rect, _) = self.allocate_exact_size(Vec2::splat(8.0), Sense::hover());
        self.painter()
            .circle_filled(rect.center(), 4.0, status_color(status));
    }
}
