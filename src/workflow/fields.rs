//! Workflow fields step: print the field dictionary.
use crate::cli::FieldsArgs;
use crate::fields::{self, FieldContext, FieldMetadata};
use anyhow::{anyhow, Context, Result};
use std::io::Write;

pub fn run_fields(args: &FieldsArgs) -> Result<()> {
    let context = args
        .context
        .as_deref()
        .map(|name| FieldContext::parse(name).ok_or_else(|| anyhow!("unknown field context {name:?}")))
        .transpose()?;
    let selected: Vec<&FieldMetadata> = match (args.name.as_deref(), context) {
        (Some(name), Some(context)) => fields::lookup(context, name)
            .into_iter()
            .collect(),
        (Some(name), None) => fields::lookup_any(name),
        (None, Some(context)) => fields::all_fields()
            .iter()
            .filter(|meta| meta.context == context)
            .collect(),
        (None, None) => fields::all_fields().iter().collect(),
    };
    if let (Some(name), true) = (args.name.as_deref(), selected.is_empty()) {
        return Err(anyhow!("unknown field {name:?}"));
    }
    if args.json {
        let text = serde_json::to_string_pretty(&selected).context("serialize fields")?;
        println!("{text}");
        return Ok(());
    }
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.name.is_some() {
        for meta in selected {
            describe_field(meta, &mut out).context("write field description")?;
        }
    } else {
        for meta in selected {
            writeln!(out, "{:<11} {:<22} {:?}", meta.context.as_str(), meta.name, fields::value_kind(meta.name))
                .context("write field list")?;
        }
    }
    Ok(())
}

fn describe_field(meta: &FieldMetadata, out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "{} ({})", meta.name, meta.context.as_str())?;
    writeln!(out, "  {}", meta.description)?;
    if let Some(message) = meta.message {
        writeln!(out, "  hint: {message}")?;
    }
    if !meta.examples.is_empty() {
        writeln!(out, "  examples: {}", meta.examples.join(", "))?;
    }
    if !meta.allowed.is_empty() {
        writeln!(out, "  allowed: {}", meta.allowed.join(", "))?;
    }
    if let Some(max_length) = meta.max_length {
        writeln!(out, "  max length: {max_length}")?;
    }
    if let Some(step) = meta.multiple_of {
        writeln!(out, "  multiple of: {step}")?;
    }
    if let Some(format) = meta.format {
        writeln!(out, "  format: {format}")?;
    }
    if let Some(pattern) = meta.pattern {
        writeln!(out, "  pattern: {pattern}")?;
    }
    writeln!(out, "  kind: {:?}", fields::value_kind(meta.name))?;
    Ok(())
}
