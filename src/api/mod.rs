//! API routing module
//!
//! # Structure
//!
//! - [`diagnostics`] - liveness message and store connectivity report
//! - [`seed`] - one-time demo data population
//! - [`products`] - product catalog reads
//! - [`orders`] - order placement

pub mod diagnostics;
pub mod orders;
pub mod products;
pub mod seed;

use axum::Router;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::new()
        .merge(diagnostics::router())
        .merge(seed::router())
        .merge(products::router())
        .merge(orders::router())
}
