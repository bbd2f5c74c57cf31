//! Upstream product catalog.
//!
//! # Data Flow
//! ```text
//! ProductService
//!     → ProductCatalog trait (client.rs)
//!     → HttpCatalog (reqwest, JSON)
//!     → upstream products API
//! ```

pub mod client;
pub mod types;

pub use client::{HttpCatalog, ProductCatalog};
pub use types::{CatalogError, CatalogResult, Product};
