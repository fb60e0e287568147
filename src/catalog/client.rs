//! HTTP catalog client.
//!
//! Thin wrapper over `GET /categories` and `GET /items/{category}` relative
//! to a configured base URL. Parsing is pure (`parse_*`) for testability.

use std::time::Duration;

use async_trait::async_trait;
use layout::placement::FurnitureTemplate;
use reqwest::Url;
use tracing::debug;

use super::types::{CatalogError, CatalogSource, CategoriesResponse, ItemsResponse};
use crate::config::{CatalogTimeouts, PlannerConfig};

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

// =============================================================================
// CLIENT
// =============================================================================

pub struct CatalogClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CatalogClient {
    /// Build a client for the catalog rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidBaseUrl`] if the URL does not parse or
    /// cannot carry path segments, or [`CatalogError::HttpClientBuild`] if the
    /// HTTP client fails to build.
    pub fn new(base_url: &str, timeouts: CatalogTimeouts) -> Result<Self, CatalogError> {
        let base_url = Url::parse(base_url).map_err(|e| CatalogError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(CatalogError::InvalidBaseUrl(base_url.to_string()));
        }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| CatalogError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url })
    }

    /// Build a client from parsed planner config.
    ///
    /// # Errors
    ///
    /// See [`CatalogClient::new`].
    pub fn from_config(config: &PlannerConfig) -> Result<Self, CatalogError> {
        Self::new(&config.catalog_base_url, config.timeouts)
    }

    /// URL for `segments` under the base URL. Each segment is percent-encoded.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, CatalogError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| CatalogError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_text(&self, url: Url) -> Result<String, CatalogError> {
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| CatalogError::unavailable(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| CatalogError::unavailable(e.to_string()))?;

        if !status.is_success() {
            return Err(CatalogError::unavailable(format!("GET {url} returned status {}", status.as_u16())));
        }
        debug!(%url, bytes = text.len(), "catalog response received");
        Ok(text)
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn list_categories(&self) -> Result<Vec<String>, CatalogError> {
        let url = self.endpoint(&["categories"])?;
        parse_categories(&self.get_text(url).await?)
    }

    async fn list_items(&self, category: &str) -> Result<Vec<FurnitureTemplate>, CatalogError> {
        let url = self.endpoint(&["items", category])?;
        parse_items(&self.get_text(url).await?)
    }
}

// =============================================================================
// PARSING
// =============================================================================

pub(crate) fn parse_categories(json: &str) -> Result<Vec<String>, CatalogError> {
    let body: CategoriesResponse =
        serde_json::from_str(json).map_err(|e| CatalogError::unavailable(format!("categories parse failed: {e}")))?;
    Ok(body.categories)
}

pub(crate) fn parse_items(json: &str) -> Result<Vec<FurnitureTemplate>, CatalogError> {
    let body: ItemsResponse =
        serde_json::from_str(json).map_err(|e| CatalogError::unavailable(format!("items parse failed: {e}")))?;
    Ok(body.items)
}
