//! Product model

use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use super::record_id;

pub type ProductId = Thing;

/// Product document
///
/// Created by the seed endpoint. `stock_count` is the only field mutated
/// after creation (decremented on order placement); products are never
/// deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "record_id::option"
    )]
    pub id: Option<ProductId>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_true")]
    pub in_stock: bool,
    #[serde(default = "default_sizes")]
    pub sizes: Vec<String>,
    #[serde(default = "default_colors")]
    pub colors: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_stock_count")]
    pub stock_count: i64,
}

fn default_category() -> String {
    "surf-shirts".into()
}

fn default_true() -> bool {
    true
}

fn default_sizes() -> Vec<String> {
    ["S", "M", "L", "XL"].map(String::from).to_vec()
}

fn default_colors() -> Vec<String> {
    ["black", "white", "navy"].map(String::from).to_vec()
}

fn default_stock_count() -> i64 {
    50
}
