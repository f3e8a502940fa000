//! Liveness and connectivity diagnostics
//!
//! # Routes
//!
//! | Path | Method | Purpose |
//! |------|--------|---------|
//! | /     | GET | static liveness message |
//! | /test | GET | store connectivity report, never fails |
//!
//! `/test` converts every internal failure into a descriptive status string;
//! it always answers 200.

use std::collections::BTreeMap;

use axum::{Json, Router, extract::State, routing::get};
use serde::{Deserialize, Serialize};
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(root))
        .route("/test", get(test_connection))
}

#[derive(Serialize)]
pub struct RootResponse {
    message: &'static str,
}

/// GET / - liveness message
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Surf Shirts Store Backend is running",
    })
}

/// Connectivity report
#[derive(Serialize)]
pub struct TestResponse {
    backend: String,
    version: &'static str,
    database: String,
    database_url: String,
    database_name: String,
    connection_status: String,
    collections: Vec<String>,
}

/// `INFO FOR DB` output, reduced to the table map
#[derive(Deserialize)]
struct DbInfo {
    #[serde(default)]
    tables: BTreeMap<String, serde_json::Value>,
}

/// At most this many collection names are reported
const MAX_COLLECTIONS: usize = 10;

/// GET /test - store connectivity diagnostics
async fn test_connection(State(state): State<ServerState>) -> Json<TestResponse> {
    let mut database = "❌ Not Available".to_string();
    let mut connection_status = "Not Connected".to_string();
    let mut collections = Vec::new();

    if let Some(db) = &state.db {
        database = "✅ Available".to_string();
        connection_status = "Connected".to_string();

        match list_tables(db).await {
            Ok(tables) => {
                collections = tables.into_iter().take(MAX_COLLECTIONS).collect();
                database = "✅ Connected & Working".to_string();
            }
            Err(e) => {
                // Partial success: the handle exists but enumeration failed
                let detail: String = e.to_string().chars().take(50).collect();
                database = format!("⚠️ Connected but Error: {detail}");
            }
        }
    }

    Json(TestResponse {
        backend: "✅ Running".to_string(),
        version: env!("CARGO_PKG_VERSION"),
        database,
        database_url: set_or_not(state.config.database_url.is_some()),
        database_name: set_or_not(state.config.database_name.is_some()),
        connection_status,
        collections,
    })
}

fn set_or_not(set: bool) -> String {
    if set { "✅ Set" } else { "❌ Not Set" }.to_string()
}

async fn list_tables(db: &Surreal<Any>) -> Result<Vec<String>, surrealdb::Error> {
    let info: Option<DbInfo> = db.query("INFO FOR DB").await?.take(0)?;
    Ok(info.map(|i| i.tables.into_keys().collect()).unwrap_or_default())
}
