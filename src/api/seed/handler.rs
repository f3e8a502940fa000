//! Demo data seeding

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::Product;
use crate::db::repository::ProductRepository;
use crate::utils::AppResult;

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub seeded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

/// POST /seed - insert demo products if the collection is empty
///
/// Idempotent short-circuit: a non-empty collection is left untouched. Two
/// simultaneous first calls can both pass the empty-check and double-insert;
/// accepted for a demo seed.
pub async fn seed(State(state): State<ServerState>) -> AppResult<Json<SeedResponse>> {
    let repo = ProductRepository::new(state.db()?);

    if repo.count().await? > 0 {
        return Ok(Json(SeedResponse {
            seeded: false,
            message: Some("Products already exist".to_string()),
            count: None,
        }));
    }

    let demo = demo_products();
    let count = demo.len();
    for product in demo {
        repo.insert(product).await?;
    }

    tracing::info!(count, "Demo products seeded");

    Ok(Json(SeedResponse {
        seeded: true,
        message: None,
        count: Some(count),
    }))
}

fn demo_products() -> Vec<Product> {
    vec![
        Product {
            id: None,
            title: "Sunset Barrel Tee".to_string(),
            description: Some("Ultra-soft tee with sunset barrel graphic.".to_string()),
            price: 29.0,
            category: "surf-shirts".to_string(),
            in_stock: true,
            sizes: ["S", "M", "L", "XL"].map(String::from).to_vec(),
            colors: ["white", "navy"].map(String::from).to_vec(),
            image_url: Some(
                "https://images.unsplash.com/photo-1490474418585-ba9bad8fd0ea?q=80&w=1600&auto=format&fit=crop"
                    .to_string(),
            ),
            featured: true,
            stock_count: 80,
        },
        Product {
            id: None,
            title: "Aqua Lineup Tee".to_string(),
            description: Some("Breathable cotton tee inspired by the lineup.".to_string()),
            price: 32.0,
            category: "surf-shirts".to_string(),
            in_stock: true,
            sizes: ["S", "M", "L"].map(String::from).to_vec(),
            colors: ["black", "aqua"].map(String::from).to_vec(),
            image_url: Some(
                "https://images.unsplash.com/photo-1503341455253-b2e723bb3dbb?q=80&w=1600&auto=format&fit=crop"
                    .to_string(),
            ),
            featured: true,
            stock_count: 60,
        },
        Product {
            id: None,
            title: "Reef Break Tee".to_string(),
            description: Some("Minimal design with reef break coordinates.".to_string()),
            price: 27.0,
            category: "surf-shirts".to_string(),
            in_stock: true,
            sizes: ["M", "L", "XL"].map(String::from).to_vec(),
            colors: ["navy", "sand"].map(String::from).to_vec(),
            image_url: Some(
                "https://images.unsplash.com/photo-1482867899247-e295efdd8c1c?q=80&w=1600&auto=format&fit=crop"
                    .to_string(),
            ),
            featured: false,
            stock_count: 40,
        },
    ]
}
