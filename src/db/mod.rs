//! Database module
//!
//! Owns the SurrealDB connection. The store location is an `engine::any`
//! URL (`mem://`, `rocksdb://path`, `ws://host`), so the same code path
//! serves embedded, in-memory and remote stores.

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::any::{self, Any};

use crate::utils::AppError;

/// Namespace all collections live under
const NAMESPACE: &str = "store";

/// Database service — owns the SurrealDB handle
#[derive(Clone, Debug)]
pub struct DbService {
    pub db: Surreal<Any>,
}

impl DbService {
    /// Open the store at `url` and select the named database.
    pub async fn new(url: &str, name: &str) -> Result<Self, AppError> {
        let db = any::connect(url)
            .await
            .map_err(|e| AppError::database(format!("Failed to open store at {url}: {e}")))?;

        db.use_ns(NAMESPACE)
            .use_db(name)
            .await
            .map_err(|e| AppError::database(format!("Failed to select database {name}: {e}")))?;

        tracing::info!(url, name, "Store connection established");

        Ok(Self { db })
    }
}
