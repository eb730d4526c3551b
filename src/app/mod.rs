mod collaborators;
mod dashboard;
mod root;
mod state;
mod wallet;

pub use collaborators::{ClipboardSink, ThemeSetter, WalletConnection};
pub use dashboard::Dashboard;
pub use state::{BalanceLine, Tab, ThemeChoice, WalletDetails, WalletView};
pub use wallet::WatchOnlyWallet;

pub use root::App;
