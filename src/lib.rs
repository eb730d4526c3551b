#![allow(clippy::collapsible_if)]
#![allow(clippy::type_complexity)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for asset_snapshot.rs)
pub use app::{App, Dashboard};
pub use config::DashboardConfig;
pub use data::{AssetCatalogSource, CoinGeckoClient, ConversionRateSource, EnergiSwapClient};
pub use domain::{Asset, AssetCatalog, ConversionRate};
pub use models::{AssetColumn, AssetTable, SortDirection, SortState};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the EnergiSwap API (the asset catalog is read from `<url>/assets`)
    #[arg(long, env = "ENERGISWAP_API_URL")]
    pub catalog_url: Option<String>,

    /// Base URL of the CoinGecko API used for the ETH/USD rate
    #[arg(long, env = "COINGECKO_API_URL")]
    pub conversion_url: Option<String>,

    /// Ethereum JSON-RPC endpoint used to read the watched wallet's balance
    #[arg(long, env = "ETHEREUM_MAINNET_RPC_URL")]
    pub rpc_url: Option<String>,

    /// Directory holding `<SYMBOL>.svg` coin icons
    #[arg(long, default_value = "images/icons")]
    pub icons_dir: String,

    /// Address to watch on startup
    #[arg(long)]
    pub address: Option<String>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> anyhow::Result<App> {
    App::new(cc, args)
}
