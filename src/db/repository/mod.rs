//! Repository module
//!
//! CRUD operations against the document store, one repository per
//! collection.
//!
//! # ID convention
//!
//! Record ids travel the full stack in `"table:key"` string form. Anything a
//! client sends that does not match that shape for the expected table is
//! malformed and rejected before the store is touched, which keeps a bad id
//! (400) distinguishable from a missing record (404).

pub mod order;
pub mod product;

// Re-exports
pub use order::OrderRepository;
pub use product::{ProductRepository, parse_product_id};

use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Any>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Any> {
        &self.db
    }
}
