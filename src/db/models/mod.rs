//! Database models

// Serde helpers
pub mod record_id;

// Catalog
pub mod product;

// Orders
pub mod order;

// Re-exports
pub use order::{Customer, Order, OrderItem};
pub use product::{Product, ProductId};
