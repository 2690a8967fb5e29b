//! Liveness reporting plugin.

use serde_yaml_ng::Value;

use crate::plugins::registry::{PluginDescriptor, PluginRegistry};
use crate::plugins::{Plugin, PluginCore, PluginError};

const DEFAULT_INTERVAL_SECS: u64 = 60;
const DEFAULT_MESSAGE: &str = "still alive";

/// Announces liveness settings at boot; the interval and message come from
/// the `heartbeat` config section.
#[derive(Debug)]
pub struct Heartbeat {
    core: PluginCore,
    interval_secs: u64,
    message: String,
}

impl Heartbeat {
    fn build(mut core: PluginCore) -> Result<Box<dyn Plugin>, PluginError> {
        core.set_name("heartbeat");

        let section = core.section("heartbeat");
        let interval_secs = match section.and_then(|s| s.get("interval_secs")) {
            None => DEFAULT_INTERVAL_SECS,
            Some(value) => value.as_u64().ok_or_else(|| PluginError::Init {
                name: "heartbeat".to_string(),
                reason: "heartbeat.interval_secs must be a non-negative integer".to_string(),
            })?,
        };
        let message = match section.and_then(|s| s.get("message")) {
            None => DEFAULT_MESSAGE.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                return Err(PluginError::Init {
                    name: "heartbeat".to_string(),
                    reason: "heartbeat.message must be a string".to_string(),
                });
            }
        };

        core.log()
            .debug(format!("heartbeat '{message}' every {interval_secs}s"));
        Ok(Box::new(Self {
            core,
            interval_secs,
            message,
        }))
    }

    /// Seconds between liveness reports.
    pub fn interval_secs(&self) -> u64 {
        self.interval_secs
    }

    /// Message emitted on each report.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Plugin for Heartbeat {
    fn core(&self) -> &PluginCore {
        &self.core
    }

    fn describe(&self) -> &str {
        "periodic liveness reporting"
    }
}

pub(super) fn register(registry: &mut PluginRegistry) {
    registry.register(PluginDescriptor::of::<Heartbeat>(Heartbeat::build));
}
