//! Typed paths into the bc20 data directory.
use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the default data directory.
pub const DATA_DIR_ENV: &str = "BC20_DATA_DIR";

/// Locate config, drafts, and generated output under one root.
#[derive(Debug, Clone)]
pub struct DataPaths {
    root: PathBuf,
}

impl DataPaths {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Return the `config.json` path.
    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.json")
    }

    /// Return the `drafts/` directory path.
    pub fn drafts_dir(&self) -> PathBuf {
        self.root.join("drafts")
    }

    /// Return the `drafts/form_<id>.json` path.
    pub fn draft_path(&self, form_id: &str) -> PathBuf {
        self.drafts_dir().join(format!("form_{form_id}.json"))
    }

    /// Directory generated declarations are written to.
    pub fn output_dir(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    pub fn output_path(&self, rel: &str, form_id: &str) -> PathBuf {
        self.output_dir(rel).join(format!("{form_id}.json"))
    }
}

/// Pick the data root: explicit flag, then `BC20_DATA_DIR`, then the
/// platform local data directory.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = std::env::var_os(DATA_DIR_ENV).filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    // Default to ~/.local/share/bc20
    let data_dir = dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| anyhow!("cannot determine home directory"))?;
    Ok(data_dir.join("bc20"))
}
