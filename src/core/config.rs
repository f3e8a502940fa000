//! Server configuration

/// Server configuration, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Store location URL (`mem://`, `rocksdb://path`, `ws://host`)
    pub database_url: Option<String>,
    /// Database name within the store
    pub database_name: Option<String>,
    /// HTTP listen port
    pub http_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").ok(),
            database_name: std::env::var("DATABASE_NAME").ok(),
            http_port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
        }
    }

    /// Both store environment values are present
    pub fn is_store_configured(&self) -> bool {
        self.database_url.is_some() && self.database_name.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
