#![recursion_limit = "256"]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod declaration;
mod document;
mod draft;
mod fields;
mod util;
mod wizard;
mod workflow;

use cli::{Command, RootArgs};

fn main() -> Result<()> {
    let args = RootArgs::parse();
    init_tracing(args.verbose);
    let data_dir = args.data_dir.as_deref();
    match &args.command {
        Command::Init(init) => workflow::run_init(data_dir, init),
        Command::Wizard(wizard) => workflow::run_wizard(data_dir, wizard),
        Command::Draft(draft) => workflow::run_draft(data_dir, draft),
        Command::Generate(generate) => workflow::run_generate(generate),
        Command::Fields(fields) => workflow::run_fields(fields),
    }
}

/// Log to stderr; `RUST_LOG` overrides the default level.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
