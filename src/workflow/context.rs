use crate::config::{self, DataPaths, WizardConfig};
use anyhow::Result;
use std::path::Path;

/// Resolved data directory plus its (possibly default) config.
pub(crate) struct WorkflowContext {
    pub(crate) paths: DataPaths,
    pub(crate) config: WizardConfig,
}

impl WorkflowContext {
    pub(crate) fn load(data_dir: Option<&Path>) -> Result<Self> {
        let paths = DataPaths::new(config::resolve_data_dir(data_dir)?);
        let config = config::load_config(&paths)?;
        tracing::debug!(root = %paths.root().display(), form_id = %config.default_form_id, "loaded context");
        Ok(Self { paths, config })
    }

    /// The explicit form id, else the configured default; validated either way.
    pub(crate) fn form_id(&self, explicit: Option<&str>) -> Result<String> {
        let form_id = explicit.unwrap_or(&self.config.default_form_id);
        config::validate_form_id(form_id)?;
        Ok(form_id.to_string())
    }
}
