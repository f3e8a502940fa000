//! Product API handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::Product;
use crate::db::repository::{ProductRepository, parse_product_id};
use crate::utils::{AppError, AppResult};

/// GET /products - every product in the catalog
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.db()?);
    let products = repo.find_all().await?;
    Ok(Json(products))
}

/// GET /products/featured - up to 6 featured products
pub async fn featured(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.db()?);
    let products = repo.find_featured().await?;
    Ok(Json(products))
}

/// GET /products/{id} - fetch one product
///
/// A malformed id is a 400; a well-formed id with no matching record is a
/// 404.
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let record_id =
        parse_product_id(&id).ok_or_else(|| AppError::invalid_argument("Invalid product id"))?;

    let repo = ProductRepository::new(state.db()?);
    let product = repo
        .find_by_id(&record_id)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))?;

    Ok(Json(product))
}
