//! Product catalog facade library.
//!
//! Exposes a small `/products` REST surface and forwards every operation to
//! an upstream product API, wrapping results in a `{ message, data }` envelope.

pub mod catalog;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod products;

pub use catalog::{HttpCatalog, Product, ProductCatalog};
pub use config::FacadeConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
