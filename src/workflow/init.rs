//! Workflow init step: write a default config.json.
use crate::cli::InitArgs;
use crate::config::{self, DataPaths};
use anyhow::{anyhow, Result};
use std::path::Path;

pub fn run_init(data_dir: Option<&Path>, args: &InitArgs) -> Result<()> {
    if args.print {
        println!("{}", config::config_stub()?);
        return Ok(());
    }
    let paths = DataPaths::new(config::resolve_data_dir(data_dir)?);
    let config_path = paths.config_path();
    if config_path.is_file() && !args.force {
        return Err(anyhow!(
            "config already exists at {} (use --force to overwrite)",
            config_path.display()
        ));
    }
    config::write_config(&paths, &config::default_config())?;
    println!("wrote {}", config_path.display());
    Ok(())
}
