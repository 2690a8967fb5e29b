//! keel — config-driven plugin host CLI.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use std::path::Path;
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use keel::bootstrap;
use keel::config;
use keel::logging::Logger;
use keel::output::PluginListing;
use keel::plugins::{PluginRegistry, builtin};

use cli::args::{Cli, Command, ConfigAction, PluginsArgs};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    cli::init_tracing(cli.debug);

    match cli.command {
        Command::Run => run_host(&cli.config_file),
        Command::Plugins(args) => run_plugins(args),
        Command::Config { action } => run_config(action, &cli.config_file),
    }
}

/// Boot the host and print a summary of what loaded.
fn run_host(config_file: &Path) -> Result<()> {
    let host = bootstrap::boot(config_file, &Logger::real()).context("failed to boot")?;

    println!(
        "{} {} plugin(s) loaded",
        "✔".green().bold(),
        host.plugins.len(),
    );
    for plugin in &host.plugins {
        println!("  {}  {}", plugin.name().bold(), plugin.describe().dimmed());
    }

    Ok(())
}

/// List the registered plugins.
///
/// Instantiates against the built-in defaults so listing has no side
/// effects on the config file; construction logs are not part of the
/// listing output, hence the capturing logger.
fn run_plugins(args: PluginsArgs) -> Result<()> {
    let mut registry = PluginRegistry::new();
    builtin::register_all(&mut registry);

    let config = Arc::new(bootstrap::default_config());
    let plugins = registry
        .instantiate_all(&Logger::capture(), &config)
        .context("failed to instantiate plugins")?;

    let entries = PluginListing::from_plugins(&plugins);
    print!("{}", args.format.render(&entries));

    Ok(())
}

/// Inspect the configuration.
fn run_config(action: ConfigAction, config_file: &Path) -> Result<()> {
    match action {
        ConfigAction::Show => {
            // Uses the real loader, so the file on disk is normalized as a
            // side effect, exactly as `run` would leave it.
            let config = config::load(config_file, &bootstrap::default_config())
                .context("failed to load configuration")?;
            let yaml =
                serde_yaml_ng::to_string(&config).context("failed to render configuration")?;
            print!("{yaml}");
        }
        ConfigAction::Path => {
            println!("{}", config_file.display());
        }
    }

    Ok(())
}
