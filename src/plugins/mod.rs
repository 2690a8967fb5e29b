//! The plugin capability contract and the state every plugin carries.
//!
//! A plugin is anything implementing [`Plugin`]. Implementations never
//! construct their own [`PluginCore`]: the registry builds it first (logging
//! the concrete type and assigning the default name) and hands it to the
//! implementation's factory, so base initialization cannot be skipped.

pub mod builtin;
pub mod registry;

use thiserror::Error;

use crate::config::{ConfigTree, SharedConfig, section};
use crate::logging::Logger;

pub use registry::{PluginDescriptor, PluginRegistry};

/// Friendly name assigned to every plugin until it picks its own.
pub const DEFAULT_PLUGIN_NAME: &str = "plugin";

/// Errors from plugin construction.
#[derive(Error, Debug)]
pub enum PluginError {
    #[error("plugin '{name}' failed to initialize: {reason}")]
    Init { name: String, reason: String },
}

/// Capability contract every plugin implementation must satisfy.
pub trait Plugin: std::fmt::Debug {
    /// The shared state this plugin was constructed with.
    fn core(&self) -> &PluginCore;

    /// One-line description shown in listings.
    fn describe(&self) -> &str;

    /// Friendly name used to reference this plugin.
    fn name(&self) -> &str {
        self.core().name()
    }
}

/// State handed to every plugin at construction: the shared logger, the
/// shared configuration tree, the concrete type's name, and a friendly name.
#[derive(Clone, Debug)]
pub struct PluginCore {
    log: Logger,
    config: SharedConfig,
    type_name: &'static str,
    name: String,
}

impl PluginCore {
    /// Base initialization: store the shared handles, assign the default
    /// name, and announce the concrete type.
    pub(crate) fn init(log: Logger, config: SharedConfig, type_name: &'static str) -> Self {
        log.info(format!("registering {type_name} as a plugin provider"));
        Self {
            log,
            config,
            type_name,
            name: DEFAULT_PLUGIN_NAME.to_string(),
        }
    }

    /// Short name of the concrete implementation type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The shared logger handle.
    pub fn log(&self) -> &Logger {
        &self.log
    }

    /// The shared merged configuration.
    pub fn config(&self) -> &SharedConfig {
        &self.config
    }

    /// This plugin's top-level config section, if one exists.
    pub fn section(&self, key: &str) -> Option<&ConfigTree> {
        section(&self.config, key)
    }

    /// Friendly name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Override the friendly name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}
