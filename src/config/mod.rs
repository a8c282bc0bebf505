//! Wizard configuration helpers.
//!
//! The config file is optional; a missing file means defaults. A present file
//! must match the current schema version and pass validation.
mod paths;

pub use paths::{resolve_data_dir, DataPaths};

use anyhow::{anyhow, Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_SCHEMA_VERSION: u32 = 1;
pub const DEFAULT_FORM_ID: &str = "default";
pub const DEFAULT_OUTPUT_DIR: &str = "output";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardConfig {
    pub schema_version: u32,
    #[serde(default = "default_form_id")]
    pub default_form_id: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_form_id() -> String {
    DEFAULT_FORM_ID.to_string()
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

pub fn default_config() -> WizardConfig {
    WizardConfig {
        schema_version: CONFIG_SCHEMA_VERSION,
        default_form_id: default_form_id(),
        output_dir: default_output_dir(),
    }
}

/// Render a pretty JSON config stub for new data directories.
pub fn config_stub() -> Result<String> {
    serde_json::to_string_pretty(&default_config()).context("serialize config stub")
}

/// Load `config.json`, falling back to defaults when it does not exist.
pub fn load_config(paths: &DataPaths) -> Result<WizardConfig> {
    let path = paths.config_path();
    if !path.is_file() {
        return Ok(default_config());
    }
    let bytes = fs::read(&path).with_context(|| format!("read config {}", path.display()))?;
    let config: WizardConfig =
        serde_json::from_slice(&bytes).context("parse wizard config JSON")?;
    validate_config(&config)?;
    Ok(config)
}

/// Persist a config to disk in a stable JSON format.
pub fn write_config(paths: &DataPaths, config: &WizardConfig) -> Result<()> {
    let path = paths.config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create data dir")?;
    }
    let text = serde_json::to_string_pretty(config).context("serialize wizard config")?;
    fs::write(&path, text.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn validate_config(config: &WizardConfig) -> Result<()> {
    if config.schema_version != CONFIG_SCHEMA_VERSION {
        return Err(anyhow!(
            "unsupported wizard config schema_version {}",
            config.schema_version
        ));
    }
    validate_form_id(&config.default_form_id)?;
    if config.output_dir.trim().is_empty() {
        return Err(anyhow!("output_dir must be non-empty"));
    }
    validate_relative_path(&config.output_dir, "output_dir")?;
    Ok(())
}

/// Form ids become file names, so keep them to a safe alphabet.
pub fn validate_form_id(form_id: &str) -> Result<()> {
    let pattern = Regex::new(r"^[A-Za-z0-9_-]+$").context("compile form id pattern")?;
    if !pattern.is_match(form_id) {
        return Err(anyhow!(
            "form id must use letters, digits, '-' or '_' (got {form_id:?})"
        ));
    }
    Ok(())
}

fn validate_relative_path(rel: &str, label: &str) -> Result<()> {
    let path = Path::new(rel);
    if path.is_absolute() || has_parent_components(path) {
        return Err(anyhow!(
            "{label} must be a relative path without '..' (got {rel:?})"
        ));
    }
    Ok(())
}

fn has_parent_components(path: &Path) -> bool {
    path.components()
        .any(|component| matches!(component, std::path::Component::ParentDir))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
