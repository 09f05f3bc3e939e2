//! Configuration file support for depviz.
//!
//! Provides YAML-based configuration through `depviz.config.yml` files,
//! and the merge of file values with command-line arguments into the
//! settings a run actually uses.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::dto::AsciiMode;
use crate::cli::Args;
use crate::ports::outbound::RepoMode;
use crate::shared::error::DepVizError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "depviz.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub package: Option<String>,
    pub repo_path: Option<String>,
    pub repo_mode: Option<String>,
    pub ascii_mode: Option<String>,
    pub reverse: Option<bool>,
    pub show_cycles: Option<bool>,
    pub fail_on_cycles: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    pub fn parsed_repo_mode(&self) -> Result<Option<RepoMode>> {
        self.repo_mode
            .as_deref()
            .map(|value| {
                value.parse::<RepoMode>().map_err(|message| {
                    anyhow::Error::from(DepVizError::Validation {
                        message: format!("repo_mode in config: {}", message),
                    })
                })
            })
            .transpose()
    }

    pub fn parsed_ascii_mode(&self) -> Result<Option<AsciiMode>> {
        self.ascii_mode
            .as_deref()
            .map(|value| {
                value.parse::<AsciiMode>().map_err(|message| {
                    anyhow::Error::from(DepVizError::Validation {
                        message: format!("ascii_mode in config: {}", message),
                    })
                })
            })
            .transpose()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty YAML document deserializes as null, not as an empty mapping.
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    config.parsed_repo_mode()?;
    config.parsed_ascii_mode()?;

    if let Some(package) = &config.package {
        if package.trim().is_empty() {
            return Err(DepVizError::Validation {
                message: "package in config must not be empty".to_string(),
            }
            .into());
        }
    }
    Ok(())
}

/// Warnings about unknown fields in the config file, sorted by key.
///
/// Returned rather than printed so the caller can route them through its
/// progress reporter.
pub fn unknown_field_warnings(config: &ConfigFile) -> Vec<String> {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    keys.into_iter()
        .map(|key| format!("⚠️  Warning: Unknown config field '{}' will be ignored.", key))
        .collect()
}

/// Effective parameters of one run after merging CLI arguments and config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub package: String,
    pub repo_path: String,
    pub repo_mode: RepoMode,
    pub ascii_mode: AsciiMode,
    pub reverse: bool,
    pub show_cycles: bool,
    pub fail_on_cycles: bool,
    pub output: Option<PathBuf>,
    pub quiet: bool,
}

impl Settings {
    /// Merges CLI arguments over config values.
    ///
    /// Command-line values take precedence; boolean switches are enabled when
    /// either source enables them. `package` and `repo_path` must be provided
    /// by one of the two.
    pub fn merge(args: Args, config: ConfigFile) -> Result<Self> {
        let config_repo_mode = config.parsed_repo_mode()?;
        let config_ascii_mode = config.parsed_ascii_mode()?;

        let package = args
            .package
            .or(config.package)
            .ok_or_else(|| DepVizError::MissingParameter {
                parameter: "package".to_string(),
                config_key: "package".to_string(),
            })?;

        let repo_path =
            args.repo_path
                .or(config.repo_path)
                .ok_or_else(|| DepVizError::MissingParameter {
                    parameter: "repo-path".to_string(),
                    config_key: "repo_path".to_string(),
                })?;

        let repo_mode = args
            .repo_mode
            .or(config_repo_mode)
            .unwrap_or_else(|| RepoMode::infer(&repo_path));

        Ok(Self {
            package,
            repo_path,
            repo_mode,
            ascii_mode: args.ascii_mode.or(config_ascii_mode).unwrap_or_default(),
            reverse: args.reverse || config.reverse.unwrap_or(false),
            show_cycles: args.show_cycles || config.show_cycles.unwrap_or(false),
            fail_on_cycles: args.fail_on_cycles || config.fail_on_cycles.unwrap_or(false),
            output: args.output,
            quiet: args.quiet,
        })
    }
}

/// Loads the config named on the command line, or discovers one in `dir`
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<ConfigFile> {
    match explicit {
        Some(path) => load_config_from_path(path),
        None => Ok(discover_config(dir)?.unwrap_or_default()),
    }
}
