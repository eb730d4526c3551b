use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use serde_json::Value;

use crate::config::{DF, DashboardConfig};
use crate::domain::AssetCatalog;

/// Source of the tradable asset list.
#[async_trait]
pub trait AssetCatalogSource: Send + Sync {
    /// Never fails. Transport errors, bad statuses and unreadable bodies all yield an empty catalog.
    async fn fetch_assets(&self) -> AssetCatalog;
}

/// EnergiSwap `GET {base}/assets` client.
pub struct EnergiSwapClient {
    http: reqwest::Client,
    url: Option<String>,
}

impl EnergiSwapClient {
    pub fn new(config: &DashboardConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    pub fn with_http_client(config: &DashboardConfig, http: reqwest::Client) -> Self {
        Self {
            http,
            url: config.assets_url(),
        }
    }

    async fn try_fetch(&self) -> Result<AssetCatalog> {
        let url = self
            .url
            .as_deref()
            .context("catalog endpoint is not configured")?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("GET {} failed", url))?;

        let status = response.status();
        if !status.is_success() {
            bail!("catalog responded with {}", status);
        }

        let body: Value = response
            .json()
            .await
            .context("catalog body is not JSON")?;

        Ok(AssetCatalog::from_json(&body))
    }
}

#[async_trait]
impl AssetCatalogSource for EnergiSwapClient {
    async fn fetch_assets(&self) -> AssetCatalog {
        match self.try_fetch().await {
            Ok(catalog) => {
                if DF.log_fetches {
                    log::info!("Fetched {} assets from catalog", catalog.len());
                }
                catalog
            }
            Err(e) => {
                log::warn!("Asset catalog unavailable, showing empty list: {:#}", e);
                AssetCatalog::default()
            }
        }
    }
}
