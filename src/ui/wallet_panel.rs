use {
    crate::{
        app::{BalanceLine, WalletDetails, WalletView},
        config::{DashboardConfig, TABLE},
        ui::{UI_CONFIG, UI_TEXT, UiStyleExt, colored_heading},
    },
    eframe::egui::{Button, Grid, Image, Key, RichText, TextEdit, Ui, Vec2},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum WalletAction {
    Connect(String),
    Disconnect,
    CopyAddress,
}

pub(crate) fn render_wallet_panel(
    ui: &mut Ui,
    view: &WalletView,
    address_input: &mut String,
    connect_error: Option<&str>,
    config: &DashboardConfig,
) -> Option<WalletAction> {
    ui.heading(colored_heading(&UI_TEXT.wallet_heading));
    ui.add_space(8.0);

    match &view.details {
        Some(details) if view.connected => render_connected(ui, details, config),
        _ => render_disconnected(ui, address_input, connect_error),
    }
}

fn render_disconnected(
    ui: &mut Ui,
    address_input: &mut String,
    connect_error: Option<&str>,
) -> Option<WalletAction> {
    let mut action = None;
    ui.label_subdued(&UI_TEXT.wallet_not_connected);
    ui.horizontal(|ui| {
        let edit = ui.add(
            TextEdit::singleline(address_input)
                .hint_text(&UI_TEXT.wallet_address_hint)
                .desired_width(380.0),
        );
        let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
        if ui.button(UI_TEXT.wallet_connect.as_str()).clicked() || submitted {
            action = Some(WalletAction::Connect(address_input.clone()));
        }
    });
    if let Some(err) = connect_error {
        ui.label(RichText::new(err).color(UI_CONFIG.colors.error));
    }
    action
}

fn render_connected(
    ui: &mut Ui,
    details: &WalletDetails,
    config: &DashboardConfig,
) -> Option<WalletAction> {
    let mut action = None;
    UI_CONFIG.card_frame().show(ui, |ui| {
        Grid::new("wallet_details")
            .num_columns(2)
            .spacing([16.0, 8.0])
            .show(ui, |ui| {
                ui.label_subdued(&UI_TEXT.wallet_ens);
                ui.label(&details.ens);
                ui.end_row();

                ui.label_subdued(&UI_TEXT.wallet_address);
                ui.horizontal(|ui| {
                    ui.monospace(&details.short_address);
                    if ui
                        .add(Button::new(UI_TEXT.icon_copy.as_str()).small())
                        .on_hover_text(&UI_TEXT.hover_copy_address)
                        .clicked()
                    {
                        action = Some(WalletAction::CopyAddress);
                    }
                });
                ui.end_row();

                ui.label_subdued(&UI_TEXT.wallet_balance);
                let fiat = match &details.balance {
                    BalanceLine::Loading => {
                        ui.label_subdued(&UI_TEXT.wallet_loading);
                        None
                    }
                    BalanceLine::Ready {
                        amount,
                        symbol,
                        fiat,
                    } => {
                        ui.horizontal(|ui| {
                            ui.add(
                                Image::new(config.icon_uri(symbol))
                                    .fit_to_exact_size(Vec2::splat(TABLE.balance_icon_size)),
                            );
                            ui.label(format!("{} {}", amount, symbol));
                        });
                        Some(fiat)
                    }
                    BalanceLine::Unavailable { fiat } => {
                        ui.label(&UI_TEXT.not_available);
                        Some(fiat)
                    }
                };
                ui.end_row();

                ui.label_subdued(&UI_TEXT.wallet_usd);
                match fiat {
                    Some(fiat) => ui.label(RichText::new(fiat).color(UI_CONFIG.colors.price)),
                    None => ui.label("-"),
                };
                ui.end_row();
            });

        ui.add_space(8.0);
        if ui.button(UI_TEXT.wallet_disconnect.as_str()).clicked() {
            action = Some(WalletAction::Disconnect);
        }
    });
    action
}
