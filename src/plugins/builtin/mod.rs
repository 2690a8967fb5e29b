//! Built-in plugins shipping with the binary.
//!
//! Each module owns its registration: adding a plugin means adding the file
//! and its `mod` line here. Nothing else in the crate enumerates the set.

pub mod greeter;
pub mod heartbeat;
pub mod sysinfo;

use crate::plugins::PluginRegistry;

/// Register every built-in plugin, in module order.
pub fn register_all(registry: &mut PluginRegistry) {
    greeter::register(registry);
    heartbeat::register(registry);
    sysinfo::register(registry);
}
