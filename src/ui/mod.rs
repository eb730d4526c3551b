mod asset_table;
mod styles;
mod toolbar;
mod ui_config;
mod ui_text;
mod wallet_panel;

pub(crate) use asset_table::{TableAction, render_asset_table};
pub(crate) use styles::{UiStyleExt, colored_heading};
pub(crate) use toolbar::{ToolbarAction, render_status_bar, render_toolbar};
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
pub(crate) use wallet_panel::{WalletAction, render_wallet_panel};
