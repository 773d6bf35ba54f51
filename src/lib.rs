pub mod config;
pub mod db;
pub mod evidence;
pub mod extraction_config;
pub mod models;
pub mod pipeline;
pub mod timeline;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for binaries and test harnesses.
///
/// `RUST_LOG` wins when set; otherwise the crate default filter applies.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
}
