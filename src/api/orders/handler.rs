//! Order API handlers

use axum::{Json, extract::State};
use serde::Serialize;
use validator::Validate;

use crate::core::ServerState;
use crate::db::repository::{OrderRepository, ProductRepository, parse_product_id};
use crate::db::models::Order;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Serialize)]
pub struct OrderReceipt {
    pub id: String,
    pub status: &'static str,
}

/// POST /orders - place an order
///
/// Every item is checked (id shape, product exists, stock covers quantity)
/// before the first write, so a failed check causes no partial writes. Stock
/// is decremented after the order document is inserted; check and decrement
/// are separate store operations and are not atomic across concurrent
/// submissions.
pub async fn create(
    State(state): State<ServerState>,
    Json(order): Json<Order>,
) -> AppResult<Json<OrderReceipt>> {
    order
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let db = state.db()?;
    let products = ProductRepository::new(db.clone());

    let mut decrements = Vec::with_capacity(order.items.len());
    for item in &order.items {
        let product_id = parse_product_id(&item.product_id).ok_or_else(|| {
            AppError::invalid_argument(format!("Invalid product id: {}", item.product_id))
        })?;

        let product = products.find_by_id(&product_id).await?.ok_or_else(|| {
            AppError::not_found(format!("Product not found: {}", item.product_id))
        })?;

        if product.stock_count < item.quantity {
            return Err(AppError::insufficient_stock(product.title));
        }

        decrements.push((product_id, item.quantity));
    }

    let created = OrderRepository::new(db).create(order).await?;
    let id = created
        .id
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();

    for (product_id, quantity) in decrements {
        products.decrement_stock(&product_id, quantity).await?;
    }

    tracing::info!(order = %id, items = created.items.len(), "Order received");

    Ok(Json(OrderReceipt {
        id,
        status: "received",
    }))
}
