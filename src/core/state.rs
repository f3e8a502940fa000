//! Server state

use surrealdb::Surreal;
use surrealdb::engine::any::Any;

use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// Process-wide state handed to every handler
///
/// The store handle is opened once at startup and injected through axum
/// `State`; handlers never reach for ambient globals. `db` is `None` when
/// the store environment values are missing or the connection failed — data
/// endpoints then fail with a service error while diagnostics keep working.
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Document store handle, if configured
    pub db: Option<Surreal<Any>>,
}

impl ServerState {
    pub fn new(config: Config, db: Option<Surreal<Any>>) -> Self {
        Self { config, db }
    }

    /// Initialize server state, connecting to the store when configured.
    ///
    /// Startup continues without a store; only the seed and data endpoints
    /// depend on it.
    pub async fn initialize(config: &Config) -> Self {
        let db = match (&config.database_url, &config.database_name) {
            (Some(url), Some(name)) => match DbService::new(url, name).await {
                Ok(service) => Some(service.db),
                Err(e) => {
                    tracing::error!(error = %e, "Store connection failed");
                    None
                }
            },
            _ => {
                tracing::warn!("DATABASE_URL / DATABASE_NAME not set; store disabled");
                None
            }
        };

        Self::new(config.clone(), db)
    }

    /// Store handle, or a service error when unconfigured
    pub fn db(&self) -> Result<Surreal<Any>, AppError> {
        self.db
            .clone()
            .ok_or_else(|| AppError::unavailable("Database not configured"))
    }

    /// Explicit store teardown on shutdown
    pub async fn shutdown(&self) {
        if let Some(db) = &self.db {
            if let Err(e) = db.invalidate().await {
                tracing::warn!(error = %e, "Store session teardown failed");
            } else {
                tracing::info!("Store connection closed");
            }
        }
    }
}
