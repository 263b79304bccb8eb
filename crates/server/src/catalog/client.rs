//! Upstream catalog client.
//!
//! Fetches raw product records from a Fake-Store-style JSON endpoint and
//! normalizes them into [`Product`]s. Records are deserialized one by one so
//! a single malformed record is logged and skipped instead of failing the
//! whole fetch.

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{info, instrument, warn};

use stylefront_core::{Product, ProductId};

use crate::config::ServerConfig;

/// How many description words are folded into the derived feature list.
const FEATURE_DESCRIPTION_WORDS: usize = 5;

/// Errors from the upstream catalog fetch.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("catalog endpoint returned status {0}")]
    Status(u16),
}

/// A raw product record as served by the upstream catalog.
#[derive(Debug, Deserialize)]
pub struct RawProduct {
    pub id: u64,
    pub title: String,
    pub price: Decimal,
    pub description: String,
    pub category: String,
    pub image: String,
}

/// HTTP client for the upstream product catalog.
#[derive(Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new catalog client with the configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Request` if the HTTP client cannot be built.
    pub fn new(config: &ServerConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(config.catalog_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.catalog_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Fetch and normalize the full upstream catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the request fails or the endpoint responds
    /// with a non-success status. Malformed individual records are skipped,
    /// not errors.
    #[instrument(skip(self))]
    pub async fn fetch_catalog(&self) -> Result<Vec<Product>, CatalogError> {
        let url = format!("{}/products", self.base_url);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status().as_u16()));
        }

        let records: Vec<serde_json::Value> = response.json().await?;
        Ok(parse_records(records))
    }

    /// Fetch the catalog, degrading to an empty one on upstream failure.
    ///
    /// Startup and reload must never hang or die on a flaky upstream; the
    /// failure is logged and the storefront keeps serving.
    pub async fn load_or_empty(&self) -> Vec<Product> {
        match self.fetch_catalog().await {
            Ok(products) => {
                info!(count = products.len(), "Loaded products from upstream catalog");
                products
            }
            Err(e) => {
                warn!(error = %e, "Failed to load upstream catalog, continuing with empty catalog");
                Vec::new()
            }
        }
    }
}

/// Deserialize raw records item-by-item, skipping malformed ones.
fn parse_records(records: Vec<serde_json::Value>) -> Vec<Product> {
    let mut products = Vec::with_capacity(records.len());
    for record in records {
        match serde_json::from_value::<RawProduct>(record) {
            Ok(raw) => products.push(normalize(raw)),
            Err(e) => warn!(error = %e, "Skipping malformed catalog record"),
        }
    }
    products
}

/// Map a raw upstream record into the internal [`Product`] shape.
///
/// The numeric upstream id is stringified; the feature list is the category
/// followed by the first five lowercase words of the description.
fn normalize(raw: RawProduct) -> Product {
    let features = std::iter::once(raw.category.clone())
        .chain(
            raw.description
                .to_lowercase()
                .split_whitespace()
                .take(FEATURE_DESCRIPTION_WORDS)
                .map(ToOwned::to_owned),
        )
        .collect();

    Product {
        id: ProductId::from(raw.id.to_string()),
        name: raw.title,
        price: raw.price,
        image: raw.image,
        description: raw.description,
        category: raw.category,
        features,
    }
}
