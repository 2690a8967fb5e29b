//! Host platform reporting plugin.

use crate::plugins::registry::{PluginDescriptor, PluginRegistry};
use crate::plugins::{Plugin, PluginCore, PluginError};

/// Reports the host platform at boot. Takes no configuration.
#[derive(Debug)]
pub struct SysInfo {
    core: PluginCore,
}

impl SysInfo {
    fn build(mut core: PluginCore) -> Result<Box<dyn Plugin>, PluginError> {
        core.set_name("sysinfo");
        core.log().debug(format!(
            "host platform: {}-{}",
            std::env::consts::OS,
            std::env::consts::ARCH,
        ));
        Ok(Box::new(Self { core }))
    }
}

impl Plugin for SysInfo {
    fn core(&self) -> &PluginCore {
        &self.core
    }

    fn describe(&self) -> &str {
        "reports the host platform at boot"
    }
}

pub(super) fn register(registry: &mut PluginRegistry) {
    registry.register(PluginDescriptor::of::<SysInfo>(SysInfo::build));
}
