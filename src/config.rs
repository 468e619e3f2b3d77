//! Configuration file support for artifact-graph.
//!
//! Provides YAML-based configuration through `artifact-graph.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use artifact_graph::application::dto::OutputFormat;
use artifact_graph::graph_building::domain::DependencyOptions;
use artifact_graph::shared::security::read_checked_file;
use artifact_graph::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "artifact-graph.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub repository: Option<PathBuf>,
    pub reports: Option<String>,
    pub excluded_group_ids: Option<Vec<String>>,
    pub excluded_artifact_ids: Option<Vec<String>>,
    pub include_group_id: Option<String>,
    pub show_version: Option<bool>,
    pub show_edge_labels: Option<bool>,
    pub format: Option<String>,
    pub output_dir: Option<String>,
    pub final_name: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_checked_file(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

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
///
/// Values are checked here so that a broken config file fails before any
/// graph is built.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(reports) = &config.reports {
        DependencyOptions::parse_report_definitions(reports)
            .context("Invalid config: reports")?;
    }

    if let Some(format) = &config.format {
        if let Err(reason) = format.parse::<OutputFormat>() {
            bail!("Invalid config: format. {}", reason);
        }
    }

    let pattern_lists = [
        ("excluded_group_ids", &config.excluded_group_ids),
        ("excluded_artifact_ids", &config.excluded_artifact_ids),
    ];
    for (field, patterns) in pattern_lists {
        for (i, pattern) in patterns.iter().flatten().enumerate() {
            if pattern.trim().is_empty() {
                bail!(
                    "Invalid config: {}[{}] must not be empty.\n\n\
                     💡 Hint: Remove the empty entry or give a pattern such as \"org.apache.*\".",
                    field,
                    i
                );
            }
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
