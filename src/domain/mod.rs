pub mod asset;
pub mod conversion;
pub mod wallet;

pub use asset::{Asset, AssetCatalog, AssetInfo};
pub use conversion::ConversionRate;
pub use wallet::{
    BalanceState, ConnectedWallet, WalletBalance, WalletStatus, fiat_estimate, is_valid_address,
    shorten_address,
};
