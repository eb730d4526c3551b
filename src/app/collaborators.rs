//! Narrow seams to the capabilities the page only consumes: wallet status, clipboard, theme.

use eframe::egui::Context;

use crate::app::ThemeChoice;
use crate::domain::WalletStatus;

/// Connection-status provider. The page reads it every frame and never drives the connection itself.
pub trait WalletConnection {
    fn status(&self) -> WalletStatus;
}

pub trait ClipboardSink {
    fn write_text(&self, text: String);
}

pub trait ThemeSetter {
    fn set_theme(&self, choice: ThemeChoice);
}

impl ClipboardSink for Context {
    fn write_text(&self, text: String) {
        self.copy_text(text);
    }
}

impl ThemeSetter for Context {
    fn set_theme(&self, choice: ThemeChoice) {
        Context::set_theme(self, choice);
    }
}
