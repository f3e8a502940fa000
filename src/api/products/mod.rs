//! Product API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/products", get(handler::list))
        .route("/products/featured", get(handler::featured))
        .route("/products/{id}", get(handler::get_by_id))
}
