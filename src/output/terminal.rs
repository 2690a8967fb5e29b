//! Human-readable terminal listing.

use colored::Colorize;

use crate::output::{ListingRenderer, PluginListing};

/// Colored terminal renderer.
pub struct TerminalRenderer;

impl ListingRenderer for TerminalRenderer {
    fn render(&self, entries: &[PluginListing]) -> String {
        if entries.is_empty() {
            return "No plugins registered.\n".to_string();
        }

        let mut out = String::new();
        for entry in entries {
            out.push_str(&format!(
                "  {}  {}\n",
                entry.name.bold(),
                entry.description.dimmed(),
            ));
            out.push_str(&format!(
                "         {}  {}\n",
                "type:".cyan(),
                entry.type_name,
            ));
        }
        out
    }
}
