//! JSON-file draft store: one `form_<id>.json` per form under `drafts/`.
use super::DraftStore;
use crate::config::DataPaths;
use crate::document::Document;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileDraftStore {
    paths: DataPaths,
}

impl FileDraftStore {
    pub fn new(paths: DataPaths) -> Self {
        Self { paths }
    }

    pub fn draft_path(&self, form_id: &str) -> PathBuf {
        self.paths.draft_path(form_id)
    }

    /// Read the stored draft; `Ok(None)` when no draft exists.
    pub fn read(&self, form_id: &str) -> Result<Option<Document>> {
        let path = self.draft_path(form_id);
        if !path.is_file() {
            return Ok(None);
        }
        let bytes = fs::read(&path).with_context(|| format!("read draft {}", path.display()))?;
        let value: serde_json::Value =
            serde_json::from_slice(&bytes).with_context(|| format!("parse draft {}", path.display()))?;
        match value {
            serde_json::Value::Object(document) => Ok(Some(document)),
            _ => Err(anyhow!("draft {} is not a JSON object", path.display())),
        }
    }

    /// Write the draft through a temp file so a crash never leaves it torn.
    pub fn write(&self, form_id: &str, document: &Document) -> Result<()> {
        let dir = self.paths.drafts_dir();
        fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
        let text = serde_json::to_string_pretty(document).context("serialize draft")?;
        let mut temp = tempfile::NamedTempFile::new_in(&dir)
            .with_context(|| format!("create temp draft in {}", dir.display()))?;
        temp.write_all(text.as_bytes()).context("write temp draft")?;
        let path = self.draft_path(form_id);
        temp.persist(&path)
            .map_err(|err| anyhow!("persist draft {}: {}", path.display(), err.error))?;
        Ok(())
    }

    pub fn remove(&self, form_id: &str) -> Result<()> {
        let path = self.draft_path(form_id);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).with_context(|| format!("remove draft {}", path.display())),
        }
    }
}

impl DraftStore for FileDraftStore {
    fn load(&self, form_id: &str, fallback: Document) -> Document {
        match self.read(form_id) {
            Ok(Some(document)) => {
                tracing::debug!(form_id, "restored draft");
                document
            }
            Ok(None) => fallback,
            Err(err) => {
                tracing::warn!(form_id, error = %format!("{err:#}"), "ignoring unreadable draft");
                fallback
            }
        }
    }

    fn save(&mut self, form_id: &str, document: &Document) {
        if let Err(err) = self.write(form_id, document) {
            tracing::warn!(form_id, error = %format!("{err:#}"), "failed to save draft");
        }
    }

    fn clear(&mut self, form_id: &str) {
        if let Err(err) = self.remove(form_id) {
            tracing::warn!(form_id, error = %format!("{err:#}"), "failed to clear draft");
        }
    }
}
