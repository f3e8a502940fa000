//! Shared utilities
//!
//! - [`error`] - application error type and HTTP mapping
//! - [`logger`] - tracing setup

pub mod error;
pub mod logger;

pub use error::{AppError, AppResult};
