//! Workflow draft step: show, clear, or seed a stored draft.
use super::WorkflowContext;
use crate::cli::{DraftAction, DraftArgs};
use crate::declaration::sample_document;
use crate::draft::FileDraftStore;
use anyhow::{anyhow, Context, Result};
use std::path::Path;

pub fn run_draft(data_dir: Option<&Path>, args: &DraftArgs) -> Result<()> {
    let ctx = WorkflowContext::load(data_dir)?;
    let store = FileDraftStore::new(ctx.paths.clone());
    match &args.action {
        DraftAction::Show(target) => {
            let form_id = ctx.form_id(target.form_id.as_deref())?;
            let document = store
                .read(&form_id)?
                .ok_or_else(|| anyhow!("no draft stored for form {form_id:?}"))?;
            let text = serde_json::to_string_pretty(&document).context("serialize draft")?;
            println!("{text}");
        }
        DraftAction::Clear(target) => {
            let form_id = ctx.form_id(target.form_id.as_deref())?;
            store.remove(&form_id)?;
            println!("cleared draft {form_id}");
        }
        DraftAction::Sample(target) => {
            let form_id = ctx.form_id(target.form_id.as_deref())?;
            store.write(&form_id, &sample_document())?;
            tracing::info!(form_id = %form_id, "seeded sample draft");
            println!("wrote {}", store.draft_path(&form_id).display());
        }
    }
    Ok(())
}
