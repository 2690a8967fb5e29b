//! JSON listing renderer.
//!
//! Outputs `{"plugins": [...], "count": N}` for scripting.

use crate::output::{ListingRenderer, PluginListing};

/// JSON listing renderer.
pub struct JsonRenderer;

impl ListingRenderer for JsonRenderer {
    fn render(&self, entries: &[PluginListing]) -> String {
        let output = serde_json::json!({
            "plugins": entries,
            "count": entries.len(),
        });

        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_json() {
        let entries = vec![PluginListing {
            name: "heartbeat".to_string(),
            type_name: "Heartbeat".to_string(),
            description: "periodic liveness reporting".to_string(),
        }];

        let output = JsonRenderer.render(&entries);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["count"], 1);
        assert_eq!(parsed["plugins"][0]["name"], "heartbeat");
        assert_eq!(parsed["plugins"][0]["type_name"], "Heartbeat");
    }

    #[test]
    fn render_empty_json() {
        let output = JsonRenderer.render(&[]);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["count"], 0);
        assert_eq!(parsed["plugins"].as_array().unwrap().len(), 0);
    }
}
