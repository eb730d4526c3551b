//! External endpoint configuration.
use crate::Cli;

/// Fixed paths and query parameters of the external APIs.
pub struct EndpointPaths {
    pub assets_path: &'static str,
    pub price_path: &'static str,
    /// CoinGecko id of the base currency
    pub base_id: &'static str,
    /// CoinGecko code of the quote currency
    pub quote_code: &'static str,
}

pub struct NativeCurrency {
    pub symbol: &'static str,
    pub decimals: u8,
}

pub struct EndpointConfig {
    pub paths: EndpointPaths,
    pub native: NativeCurrency,
}

pub const ENDPOINTS: EndpointConfig = EndpointConfig {
    paths: EndpointPaths {
        assets_path: "/assets",
        price_path: "/simple/price",
        base_id: "ethereum",
        quote_code: "usd",
    },
    native: NativeCurrency {
        symbol: "ETH",
        decimals: 18,
    },
};

/// Runtime configuration handed to every client constructor.
/// None of the URLs are validated here: a missing one shows up as a failed fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardConfig {
    pub catalog_base_url: Option<String>,
    pub conversion_base_url: Option<String>,
    pub rpc_url: Option<String>,
    pub icons_dir: String,
}

impl DashboardConfig {
    pub fn assets_url(&self) -> Option<String> {
        self.catalog_base_url
            .as_deref()
            .map(|base| format!("{}{}", base.trim_end_matches('/'), ENDPOINTS.paths.assets_path))
    }

    pub fn price_url(&self) -> Option<String> {
        self.conversion_base_url.as_deref().map(|base| {
            format!(
                "{}{}?ids={}&vs_currencies={}",
                base.trim_end_matches('/'),
                ENDPOINTS.paths.price_path,
                ENDPOINTS.paths.base_id,
                ENDPOINTS.paths.quote_code
            )
        })
    }

    /// Image URI for a coin icon, e.g. `file://images/icons/ETH.svg`
    pub fn icon_uri(&self, symbol: &str) -> String {
        format!(
            "file://{}/{}.svg",
            self.icons_dir.trim_end_matches('/'),
            symbol
        )
    }
}

impl From<&Cli> for DashboardConfig {
    fn from(args: &Cli) -> Self {
        Self {
            catalog_base_url: args.catalog_url.clone(),
            conversion_base_url: args.conversion_url.clone(),
            rpc_url: args.rpc_url.clone(),
            icons_dir: args.icons_dir.clone(),
        }
    }
}
