//! Logging infrastructure

/// Initialize the logger
///
/// Level comes from `RUST_LOG`, defaulting to `info`.
pub fn init_logger() {
    let level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());

    tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .init();
}
