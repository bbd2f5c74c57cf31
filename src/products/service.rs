//! Product operations exposed by the facade.
//!
//! Each operation is one upstream call plus in-memory post-processing
//! (windowing, filtering). Nothing is kept between calls.

use thiserror::Error;

use crate::catalog::{CatalogError, Product, ProductCatalog};
use crate::products::filter::{FilterError, ProductFilter};
use crate::products::window::Window;

/// Why a product operation failed.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Filter(#[from] FilterError),
}

/// Orchestrates product requests against a [`ProductCatalog`].
#[derive(Debug, Clone)]
pub struct ProductService<C> {
    catalog: C,
}

impl<C: ProductCatalog> ProductService<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// All products, windowed.
    pub async fn list(&self, window: Window) -> Result<Vec<Product>, ServiceError> {
        let products = self.catalog.list_all().await?;
        let total = products.len();
        let page = window.apply(products);
        tracing::debug!(total, returned = page.len(), ?window, "Listed products");
        Ok(page)
    }

    pub async fn get(&self, id: u64) -> Result<Option<Product>, ServiceError> {
        Ok(self.catalog.get_by_id(id).await?)
    }

    /// Returns `false` when the upstream did not confirm the deletion.
    pub async fn delete(&self, id: u64) -> Result<bool, ServiceError> {
        Ok(self.catalog.delete_by_id(id).await?)
    }

    pub async fn create(&self, product: &Product) -> Result<Product, ServiceError> {
        Ok(self.catalog.create(product).await?)
    }

    pub async fn update(&self, id: u64, product: &Product) -> Result<Product, ServiceError> {
        Ok(self.catalog.update(id, product).await?)
    }

    /// Products whose `field` matches `value`, windowed.
    pub async fn filter(
        &self,
        field: &str,
        value: &str,
        window: Window,
    ) -> Result<Vec<Product>, ServiceError> {
        let products = self.catalog.list_all().await?;
        // The value is only interpreted against fetched products.
        if products.is_empty() {
            return Ok(products);
        }
        let filter = ProductFilter::parse(field, value)?;
        let page = window.apply(products.into_iter().filter(|p| filter.matches(p)));
        tracing::debug!(field, value, ?filter, returned = page.len(), "Filtered products");
        Ok(page)
    }
}
