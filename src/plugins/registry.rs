//! Plugin discovery: descriptors and the ordered registry.
//!
//! The registry is an explicit value owned by the bootstrap (tests build
//! their own), populated once before any plugin is instantiated and never
//! mutated afterwards. Instantiation order is registration order.

use std::sync::Arc;

use crate::config::SharedConfig;
use crate::logging::Logger;
use crate::plugins::{Plugin, PluginCore, PluginError};

/// Factory signature every plugin implementation provides.
///
/// The factory receives an already-initialized [`PluginCore`] and returns the
/// boxed plugin, so base initialization always runs before any
/// implementation-specific setup.
pub type PluginFactory = fn(PluginCore) -> Result<Box<dyn Plugin>, PluginError>;

/// Registry entry for one concrete plugin implementation.
#[derive(Clone, Copy)]
pub struct PluginDescriptor {
    type_name: &'static str,
    factory: PluginFactory,
}

impl PluginDescriptor {
    /// Describe the implementation type `P` with its factory.
    pub fn of<P: Plugin + 'static>(factory: PluginFactory) -> Self {
        let full = std::any::type_name::<P>();
        let type_name = full.rsplit("::").next().unwrap_or(full);
        Self { type_name, factory }
    }

    /// Short name of the implementation type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Construct a live plugin sharing `log` and `config`.
    pub fn instantiate(
        &self,
        log: &Logger,
        config: &SharedConfig,
    ) -> Result<Box<dyn Plugin>, PluginError> {
        let core = PluginCore::init(log.clone(), Arc::clone(config), self.type_name);
        (self.factory)(core)
    }
}

impl std::fmt::Debug for PluginDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginDescriptor")
            .field("type_name", &self.type_name)
            .finish()
    }
}

/// Append-only, insertion-ordered collection of discovered plugins.
#[derive(Debug, Default)]
pub struct PluginRegistry {
    descriptors: Vec<PluginDescriptor>,
}

impl PluginRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a descriptor. Entries are never removed or reordered.
    pub fn register(&mut self, descriptor: PluginDescriptor) {
        self.descriptors.push(descriptor);
    }

    /// All registered descriptors, in registration order.
    pub fn all(&self) -> &[PluginDescriptor] {
        &self.descriptors
    }

    /// Number of registered descriptors.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Returns `true` when nothing has registered.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Instantiate every registered plugin, in registration order.
    ///
    /// The first failing constructor aborts the whole sequence.
    pub fn instantiate_all(
        &self,
        log: &Logger,
        config: &SharedConfig,
    ) -> Result<Vec<Box<dyn Plugin>>, PluginError> {
        self.descriptors
            .iter()
            .map(|descriptor| descriptor.instantiate(log, config))
            .collect()
    }
}
