//! Product model and catalog error definitions.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// A product as the upstream catalog represents it.
///
/// Every field is defaulted so partial payloads (a client omitting `id` on
/// create, an upstream echo missing a field) still decode. An explicit `null`
/// is read the same way as a missing field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    /// Assigned by the upstream catalog, never locally.
    pub id: Option<u64>,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Errors that can occur while talking to the upstream catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build upstream client: {0}")]
    Client(#[source] reqwest::Error),

    /// Network failure, or the upstream answered with a non-success status.
    #[error("Upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upstream body was not the JSON shape expected.
    #[error("Upstream returned an unreadable body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
