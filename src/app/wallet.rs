use std::sync::Arc;

use anyhow::{Result, bail};
use tokio::runtime::Handle;

use crate::app::WalletConnection;
use crate::config::DF;
use crate::data::{BalanceSource, FetchStatus, Notify, Query};
use crate::domain::{
    BalanceState, ConnectedWallet, WalletBalance, WalletStatus, is_valid_address,
};

/// Address-only wallet: "connecting" means choosing an address to watch.
/// The balance is read once per connect (and on refresh) through a [`BalanceSource`].
pub struct WatchOnlyWallet {
    balances: Arc<dyn BalanceSource>,
    address: Option<String>,
    balance: Query<Result<WalletBalance>>,
}

impl WatchOnlyWallet {
    pub fn new(balances: Arc<dyn BalanceSource>) -> Self {
        Self {
            balances,
            address: None,
            balance: Query::new("balance"),
        }
    }

    pub fn connect(&mut self, address: &str, runtime: &Handle, notify: Notify) -> Result<()> {
        let address = address.trim();
        if !is_valid_address(address) {
            bail!("'{}' is not a valid address", address);
        }
        if DF.log_wallet {
            log::info!("Watching wallet {}", address);
        }
        self.address = Some(address.to_string());
        // Fresh query so a balance still in flight for the previous address is discarded.
        self.balance = Query::new("balance");
        self.refresh_balance(runtime, notify);
        Ok(())
    }

    pub fn disconnect(&mut self) {
        if DF.log_wallet {
            if let Some(address) = &self.address {
                log::info!("Disconnected wallet {}", address);
            }
        }
        self.address = None;
        self.balance = Query::new("balance");
    }

    pub fn refresh_balance(&mut self, runtime: &Handle, notify: Notify) {
        let Some(address) = self.address.clone() else {
            return;
        };
        let balances = self.balances.clone();
        self.balance.start(
            runtime,
            async move { balances.fetch_balance(&address).await },
            notify,
        );
    }

    pub fn poll(&mut self) {
        if self.balance.poll() {
            if let Some(Err(e)) = self.balance.data() {
                log::warn!("Wallet balance unavailable: {:#}", e);
            }
        }
    }
}

impl WalletConnection for WatchOnlyWallet {
    fn status(&self) -> WalletStatus {
        let Some(address) = &self.address else {
            return WalletStatus::Disconnected;
        };
        let balance = match self.balance.data() {
            Some(Ok(b)) => BalanceState::Ready(b.clone()),
            Some(Err(_)) => BalanceState::Unavailable,
            None if self.balance.status() == FetchStatus::Failed => BalanceState::Unavailable,
            None => BalanceState::Loading,
        };
        WalletStatus::Connected(ConnectedWallet {
            address: address.clone(),
            ens_name: None,
            balance,
        })
    }
}
