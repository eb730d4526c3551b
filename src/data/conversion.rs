use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use serde_json::Value;

use crate::config::{DF, DashboardConfig, ENDPOINTS};
use crate::domain::ConversionRate;

/// Source of the base -> quote spot rate used for fiat estimates.
#[async_trait]
pub trait ConversionRateSource: Send + Sync {
    /// Never fails. Any error yields [`ConversionRate::UNAVAILABLE`].
    async fn fetch_base_to_quote_rate(&self) -> ConversionRate;
}

/// CoinGecko `simple/price` client for the ETH/USD pair.
pub struct CoinGeckoClient {
    http: reqwest::Client,
    url: Option<String>,
}

impl CoinGeckoClient {
    pub fn new(config: &DashboardConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    pub fn with_http_client(config: &DashboardConfig, http: reqwest::Client) -> Self {
        Self {
            http,
            url: config.price_url(),
        }
    }

    async fn try_fetch(&self) -> Result<ConversionRate> {
        let url = self
            .url
            .as_deref()
            .context("price endpoint is not configured")?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("GET {} failed", url))?;

        let status = response.status();
        if !status.is_success() {
            bail!("price API responded with {}", status);
        }

        let body: Value = response
            .json()
            .await
            .context("price body is not JSON")?;

        extract_rate(&body)
    }
}

/// Reads `body.<base_id>.<quote_code>`, e.g. `{"ethereum": {"usd": 3000.1}}`.
fn extract_rate(body: &Value) -> Result<ConversionRate> {
    let paths = &ENDPOINTS.paths;
    body.get(paths.base_id)
        .and_then(|base| base.get(paths.quote_code))
        .and_then(Value::as_f64)
        .map(ConversionRate::new)
        .with_context(|| format!("missing numeric {}.{}", paths.base_id, paths.quote_code))
}

#[async_trait]
impl ConversionRateSource for CoinGeckoClient {
    async fn fetch_base_to_quote_rate(&self) -> ConversionRate {
        match self.try_fetch().await {
            Ok(rate) => {
                if DF.log_fetches {
                    log::info!("Fetched conversion rate {}", rate);
                }
                rate
            }
            Err(e) => {
                log::warn!("Conversion rate unavailable, using 0: {:#}", e);
                ConversionRate::UNAVAILABLE
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_server::{http_client, refused_url, serve_once};

    fn client_for(base: Option<String>) -> CoinGeckoClient {
        let config = DashboardConfig {
            conversion_base_url: base,
            ..Default::default()
        };
        CoinGeckoClient::with_http_client(&config, http_client())
    }

    #[tokio::test]
    async fn reads_nested_usd_price() {
        let (base, request) = serve_once(200, r#"{"ethereum":{"usd":3012.45}}"#).await;

        let rate = client_for(Some(base)).fetch_base_to_quote_rate().await;

        assert_eq!(rate, ConversionRate::new(3012.45));
        let request = request.await.unwrap();
        assert!(
            request.starts_with("GET /simple/price?ids=ethereum&vs_currencies=usd "),
            "{}",
            request
        );
    }

    #[tokio::test]
    async fn missing_field_yields_zero() {
        let (base, _request) = serve_once(200, r#"{"bitcoin":{"usd":60000}}"#).await;
        let rate = client_for(Some(base)).fetch_base_to_quote_rate().await;
        assert_eq!(rate.value(), 0.0);
    }

    #[tokio::test]
    async fn non_numeric_field_yields_zero() {
        let (base, _request) = serve_once(200, r#"{"ethereum":{"usd":"3000"}}"#).await;
        let rate = client_for(Some(base)).fetch_base_to_quote_rate().await;
        assert_eq!(rate, ConversionRate::UNAVAILABLE);
    }

    #[tokio::test]
    async fn error_status_yields_zero() {
        let (base, _request) = serve_once(429, r#"{"status":{"error_code":429}}"#).await;
        let rate = client_for(Some(base)).fetch_base_to_quote_rate().await;
        assert_eq!(rate, ConversionRate::UNAVAILABLE);
    }

    #[tokio::test]
    async fn network_failure_yields_zero() {
        let base = refused_url().await;
        let rate = client_for(Some(base)).fetch_base_to_quote_rate().await;
        assert_eq!(rate, ConversionRate::UNAVAILABLE);
    }

    #[tokio::test]
    async fn unconfigured_endpoint_yields_zero() {
        let rate = client_for(None).fetch_base_to_quote_rate().await;
        assert_eq!(rate, ConversionRate::UNAVAILABLE);
    }
}
