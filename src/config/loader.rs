//! Config file loading and persist-back.
//!
//! The loader reconciles three sources into one tree: built-in defaults, the
//! on-disk file (which may be absent or empty), and the merge of the two. The
//! merged result is always written back so the file on disk shows every
//! available setting, including defaults the user never touched.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_yaml_ng::Value;
use thiserror::Error;

use crate::config::tree::{self, ConfigTree};

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml_ng::Error,
    },

    #[error("config file {path} must contain a mapping at the top level")]
    InvalidRoot { path: PathBuf },

    #[error("failed to serialize config for {path}: {source}")]
    Serialize {
        path: PathBuf,
        source: serde_yaml_ng::Error,
    },

    #[error("failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Load the config at `path`, merged over `defaults`, and persist the result.
///
/// A missing file and an empty (or all-comments) file both mean "no user
/// settings" and yield the defaults unchanged. Anything unparseable is fatal;
/// so is a document whose top level is not a mapping. The merged tree is
/// written back to `path` in every case, creating the file if needed.
pub fn load(path: &Path, defaults: &ConfigTree) -> Result<ConfigTree, ConfigError> {
    let merged = match fs::read_to_string(path) {
        Ok(content) => merge_content(path, &content, defaults)?,
        Err(e) if e.kind() == ErrorKind::NotFound => defaults.clone(),
        Err(e) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    persist(path, &merged)?;
    Ok(merged)
}

/// Parse file content and merge it over the defaults.
fn merge_content(
    path: &Path,
    content: &str,
    defaults: &ConfigTree,
) -> Result<ConfigTree, ConfigError> {
    let parsed: Value = serde_yaml_ng::from_str(content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    match parsed {
        Value::Null => Ok(defaults.clone()),
        Value::Mapping(loaded) if loaded.is_empty() => Ok(defaults.clone()),
        Value::Mapping(loaded) => Ok(tree::merge(defaults, &loaded)),
        _ => Err(ConfigError::InvalidRoot {
            path: path.to_path_buf(),
        }),
    }
}

/// Serialize the tree to block-style YAML and write it to `path`.
fn persist(path: &Path, config: &ConfigTree) -> Result<(), ConfigError> {
    let yaml = serde_yaml_ng::to_string(config).map_err(|e| ConfigError::Serialize {
        path: path.to_path_buf(),
        source: e,
    })?;

    fs::write(path, yaml).map_err(|e| ConfigError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}
