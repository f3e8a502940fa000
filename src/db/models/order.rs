//! Order model
//!
//! An order is a denormalized snapshot: each item carries the title, price,
//! size and color as chosen at order time, and the server never re-derives
//! totals from current product prices. Constraints are declared on the type
//! and checked at the boundary before any store access.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;
use validator::Validate;

use super::record_id;

pub type OrderId = Thing;

/// One line of an order, snapshot of the product at order time
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderItem {
    /// String form of the product's record id ("product:key")
    pub product_id: String,
    pub title: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub size: String,
    pub color: String,
    #[serde(default = "default_quantity")]
    #[validate(range(min = 1))]
    pub quantity: i64,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Customer details, embedded in the order rather than stored standalone
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Customer {
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub address: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Order document
///
/// Created once via order submission, never updated in-place. The stored
/// status stays at its default "pending"; the submission response reports
/// "received".
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Order {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "record_id::option"
    )]
    pub id: Option<OrderId>,
    #[validate(nested)]
    pub items: Vec<OrderItem>,
    #[validate(range(min = 0.0))]
    pub subtotal: f64,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub shipping: f64,
    #[validate(range(min = 0.0))]
    pub total: f64,
    #[validate(nested)]
    pub customer: Customer,
    #[serde(default = "default_status")]
    pub status: String,
    /// Stamped server-side when the payload is read in
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

fn default_quantity() -> i64 {
    1
}

fn default_status() -> String {
    "pending".into()
}
