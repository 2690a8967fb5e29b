//! The linear startup sequence.
//!
//! Boot order is fixed: load and persist the config, share it, register
//! every plugin, then instantiate them in registration order. Registration
//! always completes before the first constructor runs.

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::config::{self, ConfigError, ConfigTree, SharedConfig};
use crate::logging::Logger;
use crate::plugins::{Plugin, PluginError, PluginRegistry, builtin};

/// Built-in defaults, embedded so the binary is self-contained.
const DEFAULTS_YAML: &str = include_str!("config/defaults.yaml");

/// Errors during startup.
#[derive(Error, Debug)]
pub enum BootError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Plugin(#[from] PluginError),
}

/// A fully booted host: the shared configuration and the live plugins,
/// in registration order.
#[derive(Debug)]
pub struct Host {
    pub config: SharedConfig,
    pub plugins: Vec<Box<dyn Plugin>>,
}

/// The embedded defaults tree.
pub fn default_config() -> ConfigTree {
    serde_yaml_ng::from_str(DEFAULTS_YAML).expect("embedded defaults must be valid YAML")
}

/// Run the startup sequence against the config file at `path`.
pub fn boot(path: &Path, log: &Logger) -> Result<Host, BootError> {
    log.info("initializing");

    log.debug(format!("loading configuration from {}", path.display()));
    let config = config::load(path, &default_config())?;
    let config: SharedConfig = Arc::new(config);
    log.info("configuration loaded");

    let mut registry = PluginRegistry::new();
    builtin::register_all(&mut registry);
    log.debug(format!("{} plugin(s) registered", registry.len()));

    let plugins = registry.instantiate_all(log, &config)?;
    log.info(format!("{} plugin(s) loaded", plugins.len()));

    log.info("initialization complete");
    Ok(Host { config, plugins })
}
