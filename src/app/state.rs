// src/app/state.rs

use eframe::egui::ThemePreference;
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Assets,
    Wallet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum ThemeChoice {
    Light,
    Dark,
    #[default]
    System,
}

impl From<ThemeChoice> for ThemePreference {
    fn from(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Light => ThemePreference::Light,
            ThemeChoice::Dark => ThemePreference::Dark,
            ThemeChoice::System => ThemePreference::System,
        }
    }
}

/// Balance row of the wallet card.
#[derive(Debug, Clone, PartialEq)]
pub enum BalanceLine {
    Loading,
    Ready {
        amount: String,
        symbol: String,
        fiat: String,
    },
    Unavailable {
        fiat: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct WalletDetails {
    pub ens: String,
    pub short_address: String,
    pub balance: BalanceLine,
}

/// Display-ready wallet card. `details` is only present while connected.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletView {
    pub connected: bool,
    pub details: Option<WalletDetails>,
}
