//! Greeting plugin.

use crate::plugins::registry::{PluginDescriptor, PluginRegistry};
use crate::plugins::{Plugin, PluginCore, PluginError};

/// Greeting used when the config has no `greeter` section.
const DEFAULT_GREETING: &str = "hello from keel";

/// Logs a configurable greeting when the host boots.
#[derive(Debug)]
pub struct Greeter {
    core: PluginCore,
    greeting: String,
}

impl Greeter {
    fn build(mut core: PluginCore) -> Result<Box<dyn Plugin>, PluginError> {
        core.set_name("greeter");

        let greeting = match core.section("greeter").and_then(|s| s.get("greeting")) {
            None => DEFAULT_GREETING.to_string(),
            Some(value) => value
                .as_str()
                .ok_or_else(|| PluginError::Init {
                    name: "greeter".to_string(),
                    reason: "greeter.greeting must be a string".to_string(),
                })?
                .to_string(),
        };

        core.log().info(&greeting);
        Ok(Box::new(Self { core, greeting }))
    }

    /// The greeting this instance was configured with.
    pub fn greeting(&self) -> &str {
        &self.greeting
    }
}

impl Plugin for Greeter {
    fn core(&self) -> &PluginCore {
        &self.core
    }

    fn describe(&self) -> &str {
        "logs a configurable greeting at boot"
    }
}

pub(super) fn register(registry: &mut PluginRegistry) {
    registry.register(PluginDescriptor::of::<Greeter>(Greeter::build));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigTree, SharedConfig};
    use crate::logging::Logger;

    fn instantiate(yaml: &str) -> Result<Box<dyn Plugin>, PluginError> {
        let tree: ConfigTree = serde_yaml_ng::from_str(yaml).unwrap();
        PluginDescriptor::of::<Greeter>(Greeter::build)
            .instantiate(&Logger::capture(), &SharedConfig::new(tree))
    }

    #[test]
    fn uses_configured_greeting() {
        let log = Logger::capture();
        let tree: ConfigTree = serde_yaml_ng::from_str("{greeter: {greeting: good morning}}").unwrap();
        let plugin = PluginDescriptor::of::<Greeter>(Greeter::build)
            .instantiate(&log, &SharedConfig::new(tree))
            .unwrap();

        assert_eq!(plugin.name(), "greeter");
        assert!(
            log.entries().contains(&"INFO good morning".to_string()),
            "got: {:?}",
            log.entries(),
        );
    }

    #[test]
    fn falls_back_to_default_greeting() {
        let plugin = instantiate("{}").unwrap();
        assert_eq!(plugin.name(), "greeter");
    }

    #[test]
    fn non_string_greeting_is_an_error() {
        let err = instantiate("{greeter: {greeting: [not, a, string]}}").unwrap_err();
        assert!(err.to_string().contains("must be a string"), "got: {err}");
    }
}
