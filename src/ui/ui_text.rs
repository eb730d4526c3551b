use std::sync::LazyLock;

// (Sort arrows)
pub const ICON_SORT_ASC: &str = "\u{2191}";
pub const ICON_SORT_DESC: &str = "\u{2193}";
pub const ICON_SORT: &str = "\u{2195}";

pub const ICON_REFRESH: &str = "\u{27f3}";
pub const ICON_COPY: &str = "\u{1f5d0}";
pub const ICON_PREVIOUS: &str = "\u{2039}";
pub const ICON_NEXT: &str = "\u{203a}";

pub struct UiText {
    pub app_title: String,

    pub icon_sort_asc: String,
    pub icon_sort_desc: String,
    pub icon_sort: String,
    pub icon_refresh: String,
    pub icon_copy: String,
    pub icon_previous: String,
    pub icon_next: String,

    // --- Toolbar ---
    pub tab_assets: String,
    pub tab_wallet: String,
    pub theme_menu: String,
    pub theme_light: String,
    pub theme_dark: String,
    pub theme_system: String,
    pub hover_refresh: String,

    // --- Asset table ---
    pub table_empty: String,
    pub hover_sort: String,

    // --- Wallet panel ---
    pub wallet_heading: String,
    pub wallet_not_connected: String,
    pub wallet_address_hint: String,
    pub wallet_connect: String,
    pub wallet_disconnect: String,
    pub wallet_ens: String,
    pub wallet_address: String,
    pub wallet_balance: String,
    pub wallet_usd: String,
    pub wallet_loading: String,
    pub hover_copy_address: String,
    pub not_available: String,

    // --- Status bar ---
    pub status_assets: String,
    pub status_rate: String,
    pub status_fetching: String,
    pub status_rate_missing: String,
}

// THE SINGLETON
pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "Energi Dashboard".to_string(),

    icon_sort_asc: ICON_SORT_ASC.to_string(),
    icon_sort_desc: ICON_SORT_DESC.to_string(),
    icon_sort: ICON_SORT.to_string(),
    icon_refresh: ICON_REFRESH.to_string(),
    icon_copy: ICON_COPY.to_string(),
    icon_previous: ICON_PREVIOUS.to_string(),
    icon_next: ICON_NEXT.to_string(),

    tab_assets: "Assets".to_string(),
    tab_wallet: "Wallet".to_string(),
    theme_menu: "Theme".to_string(),
    theme_light: "Light".to_string(),
    theme_dark: "Dark".to_string(),
    theme_system: "System".to_string(),
    hover_refresh: "Reload assets and price (F5)".to_string(),

    table_empty: "No results.".to_string(),
    hover_sort: "Click to sort".to_string(),

    wallet_heading: "Wallet".to_string(),
    wallet_not_connected: "No wallet connected.".to_string(),
    wallet_address_hint: "0x... address to watch".to_string(),
    wallet_connect: "Connect".to_string(),
    wallet_disconnect: "Disconnect".to_string(),
    wallet_ens: "ENS".to_string(),
    wallet_address: "Address".to_string(),
    wallet_balance: "Balance".to_string(),
    wallet_usd: "USD".to_string(),
    wallet_loading: "Loading...".to_string(),
    hover_copy_address: "Copy full address".to_string(),
    not_available: "Not available".to_string(),

    status_assets: "Assets".to_string(),
    status_rate: "ETH/USD".to_string(),
    status_fetching: "Fetching...".to_string(),
    status_rate_missing: "rate unavailable".to_string(),
});
