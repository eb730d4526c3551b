mod catalog;
mod conversion;
mod query;
mod wallet_rpc;

#[cfg(test)]
mod test_server;

pub use {
    catalog::{AssetCatalogSource, EnergiSwapClient},
    conversion::{CoinGeckoClient, ConversionRateSource},
    query::{FetchStatus, Notify, Query},
    wallet_rpc::{BalanceSource, RpcBalanceClient},
};

#[cfg(test)]
pub(crate) use query::tests::{noop, settle};
