//! Catalog store service.

use meltmunch::{
    catalog::{Banner, Catalog},
    products::Product,
};
use mockall::automock;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{
    config::StoreConfig,
    errors::CatalogStoreError,
    records::{BannerRecord, ProductRecord},
};

/// Read-only access to the shop catalog.
#[automock]
pub trait CatalogStore {
    /// Retrieves all products with their variants, ordered by id.
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogStoreError>;

    /// Retrieves the active promo banners.
    async fn fetch_banners(&self) -> Result<Vec<Banner>, CatalogStoreError>;
}

/// Catalog store backed by a PostgREST endpoint.
#[derive(Debug, Clone)]
pub struct PostgrestCatalogStore {
    config: StoreConfig,
    http: Client,
}

impl PostgrestCatalogStore {
    /// Create a new store client from the given configuration.
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, CatalogStoreError> {
        debug!(url, "fetching from catalog store");

        let response = self
            .http
            .get(url)
            .header("apikey", &self.config.store_key)
            .bearer_auth(&self.config.store_key)
            .send()
            .await?;

        Ok(check_status(response).await?.json().await?)
    }
}

async fn check_status(response: Response) -> Result<Response, CatalogStoreError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    Err(CatalogStoreError::UnexpectedResponse(format!(
        "request failed with status {status}: {text}"
    )))
}

impl CatalogStore for PostgrestCatalogStore {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogStoreError> {
        let records: Vec<ProductRecord> = self.get(&self.config.products_url()).await?;

        let products = records
            .into_iter()
            .filter_map(|record| {
                let id = record.id;

                Product::try_from(record)
                    .inspect_err(|error| warn!(product = id, %error, "skipping product row"))
                    .ok()
            })
            .collect();

        Ok(products)
    }

    async fn fetch_banners(&self) -> Result<Vec<Banner>, CatalogStoreError> {
        let records: Vec<BannerRecord> = self.get(&self.config.banners_url()).await?;

        Ok(records
            .into_iter()
            .filter_map(BannerRecord::into_banner)
            .collect())
    }
}

/// Load products and banners, degrading to empty lists when a request fails.
pub async fn load_catalog<S: CatalogStore>(store: &S) -> Catalog {
    let products = store.fetch_products().await.unwrap_or_else(|error| {
        warn!(%error, "failed to load products");
        Vec::new()
    });

    let banners = store.fetch_banners().await.unwrap_or_else(|error| {
        warn!(%error, "failed to load banners");
        Vec::new()
    });

    debug!(
        products = products.len(),
        banners = banners.len(),
        "catalog loaded"
    );

    Catalog::new(products, banners)
}
