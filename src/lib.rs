//! Surf Store server - product catalog and order intake over a document store
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/     # configuration, state, server, errors
//! ├── api/      # HTTP routes and handlers
//! ├── db/       # store connection, models, repositories
//! └── utils/    # error type, logging
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use crate::utils::logger::init_logger;

/// Load `.env` and initialize logging
pub fn setup_environment() {
    dotenv::dotenv().ok();
    init_logger();
}

pub fn print_banner() {
    println!(
        r#"
   _____ __  ______  ______   _______________  ____  ______
  / ___// / / / __ \/ ____/  / ___/_  __/ __ \/ __ \/ ____/
  \__ \/ / / / /_/ / /_      \__ \ / / / / / / /_/ / __/
 ___/ / /_/ / _, _/ __/     ___/ // / / /_/ / _, _/ /___
/____/\____/_/ |_/_/       /____//_/  \____/_/ |_/_____/
    "#
    );
}
