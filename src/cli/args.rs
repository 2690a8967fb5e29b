//! Clap argument types and listing format dispatch.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use keel::constants;
use keel::output::{ListingRenderer, PluginListing, json::JsonRenderer, terminal::TerminalRenderer};

/// Config-driven plugin host.
#[derive(Parser, Debug)]
#[command(name = constants::APP_NAME, version = constants::VERSION, about)]
pub struct Cli {
    /// Config file to load and normalize.
    #[arg(
        short = 'c',
        long,
        global = true,
        env = constants::ENV_CONFIG_FILE,
        default_value = constants::CONFIG_FILENAME,
    )]
    pub config_file: PathBuf,

    /// Enable debug logging.
    #[arg(short = 'd', long, global = true, default_value_t = false)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Boot the host: load the config and start every plugin.
    Run,

    /// List the registered plugins.
    Plugins(PluginsArgs),

    /// Inspect the configuration.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments for the `plugins` subcommand.
#[derive(Parser, Debug)]
pub struct PluginsArgs {
    /// Output format.
    #[arg(long, default_value = "terminal")]
    pub format: ListingFormat,
}

/// Config inspection subcommands.
#[derive(clap::Subcommand, Debug)]
pub enum ConfigAction {
    /// Load the config (normalizing the file on disk) and print the result.
    Show,
    /// Print the resolved config file path.
    Path,
}

/// Listing output formats.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ListingFormat {
    Terminal,
    Json,
}

impl ListingFormat {
    /// Render a listing using the renderer for this format.
    pub fn render(&self, entries: &[PluginListing]) -> String {
        match self {
            ListingFormat::Terminal => TerminalRenderer.render(entries),
            ListingFormat::Json => JsonRenderer.render(entries),
        }
    }
}
