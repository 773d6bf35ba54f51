use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Chronolex";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Label stamped on export summaries so downstream consumers can tell
/// which analysis produced a timeline.
pub const EXTRACTION_METHOD: &str = "Legal-BERT AI Analysis";

/// Default tracing filter when RUST_LOG is not set
pub fn default_log_filter() -> &'static str {
    "chronolex=info"
}

/// Get the application data directory
/// ~/Chronolex/ on all platforms
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Chronolex")
}

/// Get the evidence storage directory (stored source files + ledger database)
pub fn evidence_dir() -> PathBuf {
    app_data_dir().join("evidence")
}

/// Path of the evidence ledger database inside a storage directory
pub fn ledger_db_path(storage_dir: &std::path::Path) -> PathBuf {
    storage_dir.join("evidence.db")
}
