//! CLI argument parsing for the declaration entry tool.
//!
//! Commands stay thin: each one resolves paths and config, then hands off to
//! the matching `run_*` function in the workflow module.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "bc20",
    version,
    about = "Step-by-step BC 2.0 import declaration entry",
    after_help = "Commands:\n  init                      Write a default config.json to the data dir\n  wizard [--form-id ID]     Fill in a declaration step by step (draft is auto-saved)\n  draft show|clear|sample   Inspect, discard, or seed a stored draft\n  generate --input <path>   Convert form or spreadsheet JSON into BC 2.0 JSON\n  fields [NAME]             Describe declaration fields\n\nExamples:\n  bc20 draft sample --form-id demo\n  bc20 wizard --form-id demo --out /tmp/demo.json\n  bc20 generate --input sheet.json --out bc20.json\n  bc20 fields nomorAju",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    /// Data directory holding config.json, drafts/ and output/
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Log navigation and persistence decisions to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Init(InitArgs),
    Wizard(WizardArgs),
    Draft(DraftArgs),
    Generate(GenerateArgs),
    Fields(FieldsArgs),
}

/// Init command inputs.
#[derive(Parser, Debug)]
#[command(about = "Write a default config.json into the data directory")]
pub struct InitArgs {
    /// Overwrite an existing config.json
    #[arg(long)]
    pub force: bool,

    /// Print the default config instead of writing it
    #[arg(long, conflicts_with = "force")]
    pub print: bool,
}

/// Wizard command inputs.
#[derive(Parser, Debug)]
#[command(about = "Run the interactive declaration wizard on stdin/stdout")]
pub struct WizardArgs {
    /// Draft key (defaults to the configured default_form_id)
    #[arg(long, value_name = "ID")]
    pub form_id: Option<String>,

    /// Where to write the generated BC 2.0 JSON on completion
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Ignore any stored draft and start from defaults
    #[arg(long)]
    pub fresh: bool,

    /// Keep the draft in memory only
    #[arg(long)]
    pub no_draft: bool,
}

/// Draft command inputs.
#[derive(Parser, Debug)]
#[command(about = "Inspect or modify the stored draft for a form")]
pub struct DraftArgs {
    #[command(subcommand)]
    pub action: DraftAction,
}

#[derive(Subcommand, Debug)]
pub enum DraftAction {
    /// Print the stored draft as JSON
    Show(DraftTarget),
    /// Delete the stored draft
    Clear(DraftTarget),
    /// Replace the stored draft with the built-in sample declaration
    Sample(DraftTarget),
}

#[derive(Parser, Debug)]
pub struct DraftTarget {
    /// Draft key (defaults to the configured default_form_id)
    #[arg(long, value_name = "ID")]
    pub form_id: Option<String>,
}

/// Generate command inputs.
#[derive(Parser, Debug)]
#[command(about = "Convert form- or spreadsheet-shaped JSON into BC 2.0 JSON")]
pub struct GenerateArgs {
    /// Input JSON document
    #[arg(long, value_name = "PATH")]
    pub input: PathBuf,

    /// Output path (stdout when omitted)
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

/// Fields command inputs.
#[derive(Parser, Debug)]
#[command(about = "Describe declaration fields")]
pub struct FieldsArgs {
    /// Field name to describe (lists every field when omitted)
    pub name: Option<String>,

    /// Restrict to one record: main, barang, entitas, kemasan, dokumen, pengangkut
    #[arg(long, value_name = "CONTEXT")]
    pub context: Option<String>,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}
