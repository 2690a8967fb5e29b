//! Configuration: the nested tree, the merge that layers user settings over
//! built-in defaults, and the loader that keeps the on-disk file normalized.

pub mod loader;
pub mod tree;

pub use loader::{ConfigError, load};
pub use tree::{ConfigTree, merge, section};

use std::sync::Arc;

/// The final merged configuration, shared by reference across all plugins.
pub type SharedConfig = Arc<ConfigTree>;
