//! Upstream catalog client.
//!
//! # Responsibilities
//! - Forward the five product operations to the upstream API
//! - Serialize/deserialize products as JSON
//! - Surface network and decoding failures as [`CatalogError`]
//!
//! # Design Decisions
//! - One request per operation: no retry, no timeout, no caching
//! - Delete reports the upstream status instead of failing on non-2xx
//! - Update is a POST to the item URL, matching the upstream contract in use

use std::future::Future;
use std::time::Instant;

use reqwest::{Client, Response};

use crate::catalog::types::{CatalogError, CatalogResult, Product};
use crate::config::UpstreamConfig;
use crate::observability::metrics;

/// The operations the facade needs from a product catalog.
pub trait ProductCatalog: Clone + Send + Sync + 'static {
    /// Fetch every product, in upstream order.
    fn list_all(&self) -> impl Future<Output = CatalogResult<Vec<Product>>> + Send;

    /// Fetch one product. `None` when the upstream answers with an empty or `null` body.
    fn get_by_id(&self, id: u64) -> impl Future<Output = CatalogResult<Option<Product>>> + Send;

    /// Delete one product. Returns whether the upstream reported success.
    fn delete_by_id(&self, id: u64) -> impl Future<Output = CatalogResult<bool>> + Send;

    /// Create a product and return whatever the upstream echoes back.
    fn create(&self, product: &Product) -> impl Future<Output = CatalogResult<Product>> + Send;

    /// Replace a product and return whatever the upstream echoes back.
    fn update(
        &self,
        id: u64,
        product: &Product,
    ) -> impl Future<Output = CatalogResult<Product>> + Send;
}

/// [`ProductCatalog`] backed by an HTTP JSON API.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: Client,
    base_url: String,
}

impl HttpCatalog {
    /// Build a client for the configured upstream.
    pub fn new(config: &UpstreamConfig) -> CatalogResult<Self> {
        let mut builder = Client::builder().user_agent(&config.user_agent);
        if !config.system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build().map_err(CatalogError::Client)?;

        tracing::info!(base_url = %config.base_url, "Upstream catalog client initialized");

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The products endpoint this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: u64) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

impl ProductCatalog for HttpCatalog {
    async fn list_all(&self) -> CatalogResult<Vec<Product>> {
        let start = Instant::now();
        let result = async {
            let response = self.client.get(&self.base_url).send().await?;
            let body = read_success_body(response).await?;
            Ok::<_, CatalogError>(serde_json::from_str::<Vec<Product>>(&body)?)
        }
        .await;
        observe("list_all", &result, start);
        result
    }

    async fn get_by_id(&self, id: u64) -> CatalogResult<Option<Product>> {
        let start = Instant::now();
        let result = async {
            let response = self.client.get(self.item_url(id)).send().await?;
            let body = read_success_body(response).await?;
            decode_optional(&body)
        }
        .await;
        observe("get_by_id", &result, start);
        result
    }

    async fn delete_by_id(&self, id: u64) -> CatalogResult<bool> {
        let start = Instant::now();
        let result = async {
            let response = self.client.delete(self.item_url(id)).send().await?;
            let status = response.status();
            tracing::debug!(id, status = %status, "Upstream delete answered");
            Ok::<_, CatalogError>(status.is_success())
        }
        .await;
        observe("delete_by_id", &result, start);
        result
    }

    async fn create(&self, product: &Product) -> CatalogResult<Product> {
        let start = Instant::now();
        let result = async {
            let response = self.client.post(&self.base_url).json(product).send().await?;
            let body = read_success_body(response).await?;
            Ok::<_, CatalogError>(serde_json::from_str::<Product>(&body)?)
        }
        .await;
        observe("create", &result, start);
        result
    }

    async fn update(&self, id: u64, product: &Product) -> CatalogResult<Product> {
        let start = Instant::now();
        let result = async {
            let response = self.client.post(self.item_url(id)).json(product).send().await?;
            let body = read_success_body(response).await?;
            Ok::<_, CatalogError>(serde_json::from_str::<Product>(&body)?)
        }
        .await;
        observe("update", &result, start);
        result
    }
}

/// Fail on non-2xx, otherwise read the whole body as text.
async fn read_success_body(response: Response) -> CatalogResult<String> {
    let response = response.error_for_status()?;
    Ok(response.text().await?)
}

/// The upstream signals a missing item with a 200 and an empty (or `null`) body.
fn decode_optional(body: &str) -> CatalogResult<Option<Product>> {
    let body = body.trim();
    if body.is_empty() {
        return Ok(None);
    }
    Ok(serde_json::from_str::<Option<Product>>(body)?)
}

fn observe<T>(operation: &'static str, result: &CatalogResult<T>, start: Instant) {
    match result {
        Ok(_) => tracing::debug!(operation, elapsed = ?start.elapsed(), "Upstream call succeeded"),
        Err(e) => tracing::warn!(operation, error = %e, "Upstream call failed"),
    }
    metrics::record_upstream_call(operation, result.is_ok(), start);
}
