//! Product route handlers.
//!
//! Each handler makes one service call and wraps the result in the envelope.

use axum::extract::{Path, Query, State};
use axum::Json;

use crate::catalog::{Product, ProductCatalog};
use crate::http::request::{FilterQuery, PageQuery};
use crate::http::response::{ApiResponse, Failure, OrFailure};
use crate::http::server::AppState;

pub async fn list_products<C: ProductCatalog>(
    State(state): State<AppState<C>>,
    Query(page): Query<PageQuery>,
) -> Result<ApiResponse<Vec<Product>>, Failure> {
    let products = state
        .service
        .list(page.into())
        .await
        .or_failure("An error occurred while fetching products")?;
    Ok(ApiResponse::with_data("Request for all products successful", products))
}

/// The upstream's answer is passed through; a missing product yields `data: null`.
pub async fn get_product<C: ProductCatalog>(
    State(state): State<AppState<C>>,
    Path(id): Path<u64>,
) -> Result<ApiResponse<Product>, Failure> {
    let product = state
        .service
        .get(id)
        .await
        .or_failure("An error occurred while fetching the product")?;
    Ok(ApiResponse::new("Request for product by ID successful", product))
}

pub async fn delete_product<C: ProductCatalog>(
    State(state): State<AppState<C>>,
    Path(id): Path<u64>,
) -> Result<ApiResponse<()>, Failure> {
    let deleted = state
        .service
        .delete(id)
        .await
        .or_failure("An error occurred while deleting the product")?;

    if deleted {
        tracing::info!(id, "Product deleted");
        Ok(ApiResponse::empty("Product deleted successfully"))
    } else {
        Err(Failure::NotFound("Product not found"))
    }
}

pub async fn add_product<C: ProductCatalog>(
    State(state): State<AppState<C>>,
    Json(product): Json<Product>,
) -> Result<ApiResponse<Product>, Failure> {
    let created = state
        .service
        .create(&product)
        .await
        .or_failure("An error occurred while adding the product")?;
    tracing::info!(id = ?created.id, "Product added");
    Ok(ApiResponse::with_data("Product added successfully", created))
}

pub async fn update_product<C: ProductCatalog>(
    State(state): State<AppState<C>>,
    Path(id): Path<u64>,
    Json(product): Json<Product>,
) -> Result<ApiResponse<Product>, Failure> {
    let updated = state
        .service
        .update(id, &product)
        .await
        .or_failure("An error occurred while updating the product")?;
    tracing::info!(id, "Product updated");
    Ok(ApiResponse::with_data("Product updated successfully", updated))
}

pub async fn filter_products<C: ProductCatalog>(
    State(state): State<AppState<C>>,
    Query(query): Query<FilterQuery>,
) -> Result<ApiResponse<Vec<Product>>, Failure> {
    let products = state
        .service
        .filter(&query.field, &query.value, query.window())
        .await
        .or_failure("An error occurred while filtering products")?;
    Ok(ApiResponse::with_data("Filtering successful", products))
}
