//! Line-oriented wizard session.
//!
//! Reads one command per line, routes input through the active step's
//! renderer, and auto-saves the document after every accepted fragment.
use super::generate::write_declaration;
use crate::declaration::Collection;
use crate::document::Document;
use crate::draft::DraftStore;
use crate::util::parse_assignments;
use crate::wizard::{
    declaration_steps, CompletionHandler, NextOutcome, StepInput, StepRenderer, WizardEngine,
};
use anyhow::{anyhow, bail, Context, Result};
use serde_json::Value;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

const HELP: &str = "\
Commands:
  show                                  Show the current step
  status                                List steps and their state
  set field=value ...                   Set main-data fields
  add <collection> field=value ...      Append an item (barang, entitas, kemasan, ...)
  edit <collection> <n> field=value ... Change fields of item n
  remove <collection> <n>               Remove item n
  next                                  Validate this step and continue
  prev                                  Go back one step
  goto <n>                              Jump to step n (completed steps and the next one)
  help                                  Show this help
  quit                                  Leave; the draft is kept";

/// Completion handler that writes BC 2.0 JSON and keeps the outcome for the host.
#[derive(Debug)]
pub struct OutputWriter {
    path: PathBuf,
    last_result: Option<Result<()>>,
}

impl OutputWriter {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            last_result: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Outcome of the most recent completion, consumed on read.
    pub fn take_result(&mut self) -> Option<Result<()>> {
        self.last_result.take()
    }
}

impl CompletionHandler for OutputWriter {
    fn on_complete(&mut self, document: &Document) {
        let result = write_declaration(&self.path, &Value::Object(document.clone()));
        match &result {
            Ok(()) => tracing::info!(path = %self.path.display(), "declaration written"),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %format!("{err:#}"), "declaration not written")
            }
        }
        self.last_result = Some(result);
    }
}

pub type DeclarationEngine = WizardEngine<StepRenderer, OutputWriter>;

/// One parsed session line.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Show,
    Status,
    Input(StepInput),
    Next,
    Prev,
    /// 1-based step number as typed.
    Goto(usize),
    Help,
    Quit,
}

/// Parse one input line; blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<SessionCommand>> {
    let words = shell_words::split(line).context("parse command line")?;
    let Some((head, rest)) = words.split_first() else {
        return Ok(None);
    };
    let command = match head.as_str() {
        "show" => SessionCommand::Show,
        "status" => SessionCommand::Status,
        "set" => {
            if rest.is_empty() {
                bail!("usage: set field=value ...");
            }
            SessionCommand::Input(StepInput::Set(parse_assignments(rest)?))
        }
        "add" => {
            let (name, fields) = rest
                .split_first()
                .ok_or_else(|| anyhow!("usage: add <collection> field=value ..."))?;
            SessionCommand::Input(StepInput::Add {
                collection: parse_collection(name)?,
                fields: parse_assignments(fields)?,
            })
        }
        "edit" => {
            let [name, position, fields @ ..] = rest else {
                bail!("usage: edit <collection> <n> field=value ...");
            };
            SessionCommand::Input(StepInput::Edit {
                collection: parse_collection(name)?,
                position: parse_position(position)?,
                fields: parse_assignments(fields)?,
            })
        }
        "remove" => {
            let [name, position] = rest else {
                bail!("usage: remove <collection> <n>");
            };
            SessionCommand::Input(StepInput::Remove {
                collection: parse_collection(name)?,
                position: parse_position(position)?,
            })
        }
        "next" => SessionCommand::Next,
        "prev" | "back" => SessionCommand::Prev,
        "goto" => {
            let [position] = rest else {
                bail!("usage: goto <n>");
            };
            SessionCommand::Goto(parse_position(position)?)
        }
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        other => bail!("unknown command {other:?} (try help)"),
    };
    Ok(Some(command))
}

fn parse_collection(name: &str) -> Result<Collection> {
    Collection::from_key(name).ok_or_else(|| {
        let known: Vec<_> = Collection::ALL.iter().map(Collection::key).collect();
        anyhow!("unknown collection {name:?} (expected one of {})", known.join(", "))
    })
}

fn parse_position(raw: &str) -> Result<usize> {
    raw.parse::<usize>()
        .map_err(|_| anyhow!("expected a number, got {raw:?}"))
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The declaration was generated and written.
    Completed,
    /// The user quit or input ended; the draft is kept.
    Quit,
}

pub struct Session<'a> {
    engine: DeclarationEngine,
    store: &'a mut dyn DraftStore,
    form_id: String,
}

impl<'a> Session<'a> {
    /// Restore the draft for `form_id` (or `fallback`) and start at step 1.
    pub fn start(
        store: &'a mut dyn DraftStore,
        form_id: String,
        fallback: Document,
        output: PathBuf,
    ) -> Result<Self> {
        let initial = store.load(&form_id, fallback);
        let engine = WizardEngine::new(declaration_steps(), initial, OutputWriter::new(output))?;
        Ok(Self {
            engine,
            store,
            form_id,
        })
    }

    pub fn engine(&self) -> &DeclarationEngine {
        &self.engine
    }

    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<SessionEnd> {
        writeln!(out, "form {} (type help for commands)", self.form_id)?;
        self.show(out)?;
        loop {
            write!(out, "bc20> ")?;
            out.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line).context("read command")? == 0 {
                writeln!(out)?;
                return Ok(SessionEnd::Quit);
            }
            match parse_command(&line) {
                Ok(None) => {}
                Ok(Some(command)) => {
                    if let Some(end) = self.execute(command, out)? {
                        return Ok(end);
                    }
                }
                Err(err) => writeln!(out, "error: {err:#}")?,
            }
        }
    }

    fn execute<W: Write>(&mut self, command: SessionCommand, out: &mut W) -> Result<Option<SessionEnd>> {
        match command {
            SessionCommand::Show => self.show(out)?,
            SessionCommand::Status => self.status(out)?,
            SessionCommand::Help => writeln!(out, "{HELP}")?,
            SessionCommand::Input(input) => {
                let renderer = self.engine.current_step().renderer;
                match renderer.apply(self.engine.document(), &input) {
                    Ok(fragment) => {
                        self.engine.update_fragment(fragment);
                        self.store.save(&self.form_id, self.engine.document());
                        writeln!(out, "ok")?;
                    }
                    Err(err) => writeln!(out, "error: {err:#}")?,
                }
            }
            SessionCommand::Next => return self.next(out),
            SessionCommand::Prev => {
                if self.engine.previous() {
                    self.show(out)?;
                } else {
                    writeln!(out, "already at the first step")?;
                }
            }
            SessionCommand::Goto(number) => {
                let moved = number
                    .checked_sub(1)
                    .is_some_and(|index| self.engine.go_to_step(index));
                if moved {
                    self.show(out)?;
                } else {
                    writeln!(out, "step {number} is not reachable yet")?;
                }
            }
            SessionCommand::Quit => {
                writeln!(out, "draft kept for form {}", self.form_id)?;
                return Ok(Some(SessionEnd::Quit));
            }
        }
        Ok(None)
    }

    fn next<W: Write>(&mut self, out: &mut W) -> Result<Option<SessionEnd>> {
        match self.engine.next() {
            NextOutcome::Blocked => {
                writeln!(out, "cannot continue:")?;
                for error in self.engine.errors() {
                    writeln!(out, "  - {error}")?;
                }
            }
            NextOutcome::Advanced(_) => self.show(out)?,
            NextOutcome::Completed => {
                let path = self.engine.handler().path().to_path_buf();
                match self.engine.handler_mut().take_result() {
                    Some(Ok(())) => {
                        writeln!(out, "wrote {}", path.display())?;
                        return Ok(Some(SessionEnd::Completed));
                    }
                    Some(Err(err)) => writeln!(out, "error: {err:#}")?,
                    None => {}
                }
            }
        }
        Ok(None)
    }

    fn show<W: Write>(&self, out: &mut W) -> Result<()> {
        let step = self.engine.current_step();
        writeln!(
            out,
            "Step {}/{}: {} - {}",
            self.engine.current() + 1,
            self.engine.steps().len(),
            step.title,
            step.description
        )?;
        step.renderer
            .render(self.engine.document(), self.engine.errors(), out)
            .context("render step")?;
        Ok(())
    }

    fn status<W: Write>(&self, out: &mut W) -> Result<()> {
        let completed = self.engine.completed_steps();
        for (index, step) in self.engine.steps().iter().enumerate() {
            let pointer = if index == self.engine.current() { ">" } else { " " };
            let state = if completed.contains(&index) {
                "done"
            } else if self.engine.is_step_accessible(index) {
                "open"
            } else {
                "locked"
            };
            writeln!(out, "{pointer} {}. {:<20} {state}", index + 1, step.title)?;
        }
        if self.engine.is_finished() {
            writeln!(out, "declaration already generated; next on the last step writes it again")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
