//! Workflow wizard step: interactive entry on stdin/stdout.
use super::session::{Session, SessionEnd};
use super::WorkflowContext;
use crate::cli::WizardArgs;
use crate::declaration::initial_document;
use crate::draft::{DraftStore, FileDraftStore, MemoryDraftStore};
use crate::util::display_path;
use anyhow::Result;
use std::io;
use std::path::Path;

pub fn run_wizard(data_dir: Option<&Path>, args: &WizardArgs) -> Result<()> {
    let ctx = WorkflowContext::load(data_dir)?;
    let form_id = ctx.form_id(args.form_id.as_deref())?;
    let output = args
        .out
        .clone()
        .unwrap_or_else(|| ctx.paths.output_path(&ctx.config.output_dir, &form_id));

    let mut store: Box<dyn DraftStore> = if args.no_draft {
        Box::new(MemoryDraftStore::new())
    } else {
        Box::new(FileDraftStore::new(ctx.paths.clone()))
    };
    if args.fresh {
        store.clear(&form_id);
    }

    tracing::debug!(
        form_id = %form_id,
        output = %display_path(&output, Some(ctx.paths.root())),
        "starting wizard"
    );
    let mut session = Session::start(store.as_mut(), form_id.clone(), initial_document(), output)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let end = session.run(stdin.lock(), &mut stdout.lock())?;
    if end == SessionEnd::Quit {
        tracing::info!(
            form_id = %form_id,
            step = session.engine().current() + 1,
            "wizard left before completion"
        );
    }
    Ok(())
}
