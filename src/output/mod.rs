//! Plugin listing renderers: terminal and JSON.

pub mod json;
pub mod terminal;

use serde::Serialize;

use crate::plugins::Plugin;

/// One row in a plugin listing.
#[derive(Debug, Clone, Serialize)]
pub struct PluginListing {
    pub name: String,
    pub type_name: String,
    pub description: String,
}

impl PluginListing {
    /// Build listing rows from live plugins, preserving their order.
    pub fn from_plugins(plugins: &[Box<dyn Plugin>]) -> Vec<Self> {
        plugins
            .iter()
            .map(|plugin| Self {
                name: plugin.name().to_string(),
                type_name: plugin.core().type_name().to_string(),
                description: plugin.describe().to_string(),
            })
            .collect()
    }
}

/// Trait for rendering a plugin listing to a string.
pub trait ListingRenderer {
    /// Render the listing to a string.
    fn render(&self, entries: &[PluginListing]) -> String;
}
