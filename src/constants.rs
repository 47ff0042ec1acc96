//! Application constants and configuration

pub const APP_NAME: &str = "Torah AI Mockup";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// File stem for the daily rolling log under `<data dir>/logs`
pub const LOG_FILE_STEM: &str = "torah-ai-mockup.log";
