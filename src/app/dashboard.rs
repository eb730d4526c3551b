use std::sync::Arc;

use tokio::runtime::Handle;

use crate::app::{
    BalanceLine, ClipboardSink, ThemeChoice, ThemeSetter, WalletDetails, WalletView,
};
use crate::config::{DF, DashboardConfig};
use crate::data::{
    AssetCatalogSource, CoinGeckoClient, ConversionRateSource, EnergiSwapClient, FetchStatus,
    Notify, Query,
};
use crate::domain::{
    AssetCatalog, BalanceState, ConversionRate, WalletStatus, fiat_estimate, shorten_address,
};
use crate::models::AssetTable;
use crate::ui::UI_TEXT;
use crate::utils::format_clock;

/// Page controller: owns both queries and the table, and turns wallet status into display values.
pub struct Dashboard {
    catalog: Arc<dyn AssetCatalogSource>,
    conversion: Arc<dyn ConversionRateSource>,
    assets_query: Query<AssetCatalog>,
    rate_query: Query<ConversionRate>,
    table: AssetTable,
}

impl Dashboard {
    pub fn new(
        catalog: Arc<dyn AssetCatalogSource>,
        conversion: Arc<dyn ConversionRateSource>,
    ) -> Self {
        Self {
            catalog,
            conversion,
            assets_query: Query::new("assets"),
            rate_query: Query::new("eth-usd"),
            table: AssetTable::default(),
        }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(
            Arc::new(EnergiSwapClient::new(config)),
            Arc::new(CoinGeckoClient::new(config)),
        )
    }

    /// Kick off both fetches. They run independently and neither can fail the other.
    pub fn refresh(&mut self, runtime: &Handle, notify: Notify) {
        if DF.log_fetches {
            log::info!("Refreshing assets and conversion rate");
        }
        let catalog = self.catalog.clone();
        self.assets_query.start(
            runtime,
            async move { catalog.fetch_assets().await },
            notify.clone(),
        );

        let conversion = self.conversion.clone();
        self.rate_query.start(
            runtime,
            async move { conversion.fetch_base_to_quote_rate().await },
            notify,
        );
    }

    /// Drain finished fetches. Returns true if anything changed.
    pub fn update(&mut self) -> bool {
        let mut changed = false;
        if self.assets_query.poll() {
            if let Some(catalog) = self.assets_query.data() {
                self.table.set_assets(catalog.clone().into_assets());
            }
            changed = true;
        }
        if self.rate_query.poll() {
            changed = true;
        }
        changed
    }

    pub fn assets_loading(&self) -> bool {
        self.assets_query.is_loading()
    }

    pub fn is_fetching(&self) -> bool {
        self.assets_query.is_fetching() || self.rate_query.is_fetching()
    }

    pub fn assets_status(&self) -> FetchStatus {
        self.assets_query.status()
    }

    pub fn rate_status(&self) -> FetchStatus {
        self.rate_query.status()
    }

    pub fn table(&self) -> &AssetTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut AssetTable {
        &mut self.table
    }

    /// Sentinel `0` until a rate arrives.
    pub fn conversion_rate(&self) -> ConversionRate {
        self.rate_query.data().copied().unwrap_or_default()
    }

    /// e.g. "Assets 12:01:33 | ETH/USD 12:01:34"
    pub fn last_updated(&self) -> String {
        let stamp = |q: Option<chrono::DateTime<chrono::Local>>| {
            q.map(format_clock).unwrap_or_else(|| "-".to_string())
        };
        format!(
            "{} {} | {} {}",
            UI_TEXT.status_assets,
            stamp(self.assets_query.fetched_at()),
            UI_TEXT.status_rate,
            stamp(self.rate_query.fetched_at())
        )
    }

    pub fn wallet_view(&self, status: &WalletStatus) -> WalletView {
        let WalletStatus::Connected(wallet) = status else {
            return WalletView {
                connected: false,
                details: None,
            };
        };

        let rate = self.conversion_rate();
        let balance = match &wallet.balance {
            BalanceState::Loading => BalanceLine::Loading,
            BalanceState::Ready(b) => BalanceLine::Ready {
                amount: format!("{:.2}", b.value),
                symbol: b.symbol.clone(),
                fiat: fiat_estimate(Some(b.value), rate),
            },
            BalanceState::Unavailable => BalanceLine::Unavailable {
                fiat: fiat_estimate(None, rate),
            },
        };

        WalletView {
            connected: true,
            details: Some(WalletDetails {
                ens: wallet
                    .ens_name
                    .clone()
                    .unwrap_or_else(|| UI_TEXT.not_available.clone()),
                short_address: shorten_address(&wallet.address),
                balance,
            }),
        }
    }

    /// Writes the full address. Returns false when no wallet is connected.
    pub fn copy_address(&self, status: &WalletStatus, clipboard: &dyn ClipboardSink) -> bool {
        match status.address() {
            Some(address) => {
                clipboard.write_text(address.to_string());
                true
            }
            None => false,
        }
    }

    pub fn select_theme(&self, choice: ThemeChoice, setter: &dyn ThemeSetter) {
        if DF.log_theme {
            log::info!("Theme set to {}", choice);
        }
        setter.set_theme(choice);
    }
}
