use alloy_primitives::{U256, utils::format_units};
use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use serde_json::{Value, json};

use crate::config::{DF, DashboardConfig, ENDPOINTS};
use crate::domain::WalletBalance;

/// Reads the native-currency balance of an account.
#[async_trait]
pub trait BalanceSource: Send + Sync {
    async fn fetch_balance(&self, address: &str) -> Result<WalletBalance>;
}

/// `eth_getBalance` over plain JSON-RPC against the configured node.
pub struct RpcBalanceClient {
    http: reqwest::Client,
    rpc_url: Option<String>,
}

impl RpcBalanceClient {
    pub fn new(config: &DashboardConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    pub fn with_http_client(config: &DashboardConfig, http: reqwest::Client) -> Self {
        Self {
            http,
            rpc_url: config.rpc_url.clone(),
        }
    }
}

#[async_trait]
impl BalanceSource for RpcBalanceClient {
    async fn fetch_balance(&self, address: &str) -> Result<WalletBalance> {
        let rpc_url = self
            .rpc_url
            .as_deref()
            .context("RPC URL is not configured")?;

        let response = self
            .http
            .post(rpc_url)
            .json(&json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "eth_getBalance",
                "params": [address, "latest"]
            }))
            .send()
            .await
            .context("balance request failed")?;

        let status = response.status();
        if !status.is_success() {
            bail!("RPC node responded with {}", status);
        }

        let body: Value = response.json().await.context("invalid balance response")?;
        if let Some(error) = body.get("error") {
            bail!("RPC error: {}", error);
        }

        let hex_balance = body
            .get("result")
            .and_then(Value::as_str)
            .context("missing balance result")?;

        let value = wei_to_units(hex_balance, ENDPOINTS.native.decimals)?;

        if DF.log_wallet {
            log::info!("Balance of {} is {} {}", address, value, ENDPOINTS.native.symbol);
        }

        Ok(WalletBalance {
            value,
            symbol: ENDPOINTS.native.symbol.to_string(),
        })
    }
}

/// `0x`-prefixed hex quantity in base units -> whole units as a float.
/// The quantity is a full uint256.
pub(crate) fn wei_to_units(hex_quantity: &str, decimals: u8) -> Result<f64> {
    let digits = hex_quantity.trim_start_matches("0x");
    if digits.is_empty() {
        return Ok(0.0);
    }
    let raw = U256::from_str_radix(digits, 16)
        .with_context(|| format!("balance {} is not a hex quantity", hex_quantity))?;
    let units = format_units(raw, decimals)
        .with_context(|| format!("cannot scale balance by {} decimals", decimals))?;
    units
        .parse::<f64>()
        .with_context(|| format!("balance {} is not a number", units))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_server::{http_client, serve_once};

    const ADDRESS: &str = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";

    fn client_for(url: Option<String>) -> RpcBalanceClient {
        let config = DashboardConfig {
            rpc_url: url,
            ..Default::default()
        };
        RpcBalanceClient::with_http_client(&config, http_client())
    }

    #[test]
    fn converts_wei_to_ether() {
        assert_eq!(wei_to_units("0x1bc16d674ec80000", 18).unwrap(), 2.0);
        assert_eq!(wei_to_units("0x0", 18).unwrap(), 0.0);
        assert_eq!(wei_to_units("0x", 18).unwrap(), 0.0);
        assert!(wei_to_units("0xnothex", 18).is_err());
    }

    #[test]
    fn converts_quantities_wider_than_u128() {
        // 2^128 wei: 33 hex digits
        let value = wei_to_units("0x100000000000000000000000000000000", 18).unwrap();
        let expected = 2f64.powi(128) / 1e18;
        assert!((value - expected).abs() / expected < 1e-12, "{}", value);

        let max = format!("0x{}", "f".repeat(64));
        assert!(wei_to_units(&max, 18).unwrap() > 1e59);
    }

    #[tokio::test]
    async fn reads_balance_from_node() {
        let (url, request) =
            serve_once(200, r#"{"jsonrpc":"2.0","id":1,"result":"0x1bc16d674ec80000"}"#).await;

        let balance = client_for(Some(url)).fetch_balance(ADDRESS).await.unwrap();

        assert_eq!(balance.value, 2.0);
        assert_eq!(balance.symbol, "ETH");
        let request = request.await.unwrap();
        assert!(request.starts_with("POST / "), "{}", request);
        assert!(request.contains("eth_getBalance"));
        assert!(request.contains(ADDRESS));
    }

    #[tokio::test]
    async fn surfaces_rpc_errors() {
        let (url, _request) = serve_once(
            200,
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32602,"message":"invalid address"}}"#,
        )
        .await;
        assert!(client_for(Some(url)).fetch_balance(ADDRESS).await.is_err());
    }

    #[tokio::test]
    async fn missing_rpc_url_is_an_error() {
        assert!(client_for(None).fetch_balance(ADDRESS).await.is_err());
    }
}
