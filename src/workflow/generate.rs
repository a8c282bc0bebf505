//! Workflow generate step: one-shot conversion of a JSON file.
use crate::cli::GenerateArgs;
use crate::declaration::generate_json;
use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

pub fn run_generate(args: &GenerateArgs) -> Result<()> {
    let bytes = fs::read(&args.input)
        .with_context(|| format!("read input {}", args.input.display()))?;
    let input: Value = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse input JSON {}", args.input.display()))?;
    match args.out.as_deref() {
        Some(out) => {
            write_declaration(out, &input)?;
            println!("wrote {}", out.display());
        }
        None => println!("{}", generate_json(&input)?),
    }
    Ok(())
}

/// Generate BC 2.0 JSON for `input` and write it to `path`.
pub fn write_declaration(path: &Path, input: &Value) -> Result<()> {
    let text = generate_json(input)?;
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(path, text.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
