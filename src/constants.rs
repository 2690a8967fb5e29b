//! App-wide constants.
//!
//! Centralises the tool name, the default config path, and environment
//! variable names so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "keel";

/// Default config filename, resolved relative to the working directory.
pub const CONFIG_FILENAME: &str = "config.yaml";

/// Crate version as reported by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");


// ── Environment variable names ──────────────────────────────────────

pub const ENV_CONFIG_FILE: &str = "KEEL_CONFIG";
