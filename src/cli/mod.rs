//! CLI command definitions and argument parsing.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` in the environment always takes precedence; `--debug` falls
/// back to DEBUG, otherwise INFO so the boot milestones are visible.
pub fn init_tracing(debug: bool) {
    let fallback = if debug { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::from_default_env().add_directive(fallback.into());
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
