use {
    crate::{
        app::{Tab, ThemeChoice},
        data::FetchStatus,
        ui::{UI_CONFIG, UI_TEXT, UiStyleExt, colored_heading},
    },
    eframe::egui::{Align, Button, Context, Layout, TopBottomPanel},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ToolbarAction {
    Refresh,
    Theme(ThemeChoice),
}

pub(crate) fn render_toolbar(
    ctx: &Context,
    tab: &mut Tab,
    theme: ThemeChoice,
    fetching: bool,
) -> Option<ToolbarAction> {
    let mut action = None;
    TopBottomPanel::top("toolbar")
        .frame(UI_CONFIG.top_panel_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(colored_heading(&UI_TEXT.app_title).size(18.0));
                ui.separator();
                ui.selectable_value(tab, Tab::Assets, UI_TEXT.tab_assets.as_str());
                ui.selectable_value(tab, Tab::Wallet, UI_TEXT.tab_wallet.as_str());

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.menu_button(UI_TEXT.theme_menu.as_str(), |ui| {
                        for (choice, label) in [
                            (ThemeChoice::Light, &UI_TEXT.theme_light),
                            (ThemeChoice::Dark, &UI_TEXT.theme_dark),
                            (ThemeChoice::System, &UI_TEXT.theme_system),
                        ] {
                            if ui.selectable_label(theme == choice, label.as_str()).clicked() {
                                action = Some(ToolbarAction::Theme(choice));
                                ui.close();
                            }
                        }
                    });

                    if ui
                        .add_enabled(!fetching, Button::new(UI_TEXT.icon_refresh.as_str()))
                        .on_hover_text(&UI_TEXT.hover_refresh)
                        .clicked()
                    {
                        action = Some(ToolbarAction::Refresh);
                    }
                });
            });
        });
    action
}

pub(crate) fn render_status_bar(
    ctx: &Context,
    assets: FetchStatus,
    rate: FetchStatus,
    rate_available: bool,
    last_updated: &str,
) {
    TopBottomPanel::bottom("status_bar")
        .frame(UI_CONFIG.bottom_panel_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.status_dot(assets);
                ui.status_dot(rate);
                if assets == FetchStatus::Loading || rate == FetchStatus::Loading {
                    ui.label_subdued(&UI_TEXT.status_fetching);
                } else {
                    ui.label_subdued(last_updated);
                }
                if !rate_available && rate != FetchStatus::Loading {
                    ui.separator();
                    ui.label_subdued(&UI_TEXT.status_rate_missing);
                }
            });
        });
}
