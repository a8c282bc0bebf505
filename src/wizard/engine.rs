//! Wizard engine: a linear, partially gated walk over one growing document.
//!
//! The engine is the single owner of the accumulated document. Renderers only
//! ever see `&Document` and hand fragments back; every mutation goes through
//! [`WizardEngine::update_fragment`]. Public operations are total: expected
//! failures surface as observable state (`errors`, [`NextOutcome`]).
use super::validators::Validator;
use crate::document::{merge_fragment, Document, Fragment};
use anyhow::{ensure, Result};
use std::collections::BTreeSet;

/// Immutable description of one wizard step.
#[derive(Debug, Clone)]
pub struct StepDescriptor<R> {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub renderer: R,
    pub validator: Option<Validator>,
}

/// Receives the fully assembled document when the last step is confirmed.
pub trait CompletionHandler {
    fn on_complete(&mut self, document: &Document);
}

impl<F> CompletionHandler for F
where
    F: FnMut(&Document),
{
    fn on_complete(&mut self, document: &Document) {
        self(document)
    }
}

/// Result of a `next()` attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextOutcome {
    /// The current step's validator reported errors; nothing moved.
    Blocked,
    /// The step passed and the engine moved to the contained index.
    Advanced(usize),
    /// The last step passed and the completion handler was invoked.
    Completed,
}

/// Run state for one wizard session.
pub struct WizardEngine<R, H> {
    steps: Vec<StepDescriptor<R>>,
    document: Document,
    current: usize,
    completed: BTreeSet<usize>,
    errors: Vec<String>,
    finished: bool,
    handler: H,
}

impl<R, H: CompletionHandler> WizardEngine<R, H> {
    /// Start a run at step 0 over `initial` (typically a restored draft).
    pub fn new(steps: Vec<StepDescriptor<R>>, initial: Document, handler: H) -> Result<Self> {
        ensure!(!steps.is_empty(), "wizard requires at least one step");
        Ok(Self {
            steps,
            document: initial,
            current: 0,
            completed: BTreeSet::new(),
            errors: Vec::new(),
            finished: false,
            handler,
        })
    }

    /// Shallow-merge a fragment into the accumulated document.
    pub fn update_fragment(&mut self, fragment: Fragment) {
        merge_fragment(&mut self.document, fragment);
    }

    /// Jump to `index` if it is reachable; otherwise leave the state untouched.
    ///
    /// Returns whether the move happened.
    pub fn go_to_step(&mut self, index: usize) -> bool {
        if !self.is_step_accessible(index) {
            tracing::debug!(
                target_step = index,
                current_step = self.current,
                "navigation rejected"
            );
            return false;
        }
        self.current = index;
        self.errors.clear();
        true
    }

    /// Validate the current step and advance, or complete on the last step.
    pub fn next(&mut self) -> NextOutcome {
        let step = &self.steps[self.current];
        let errors = step
            .validator
            .map(|validate| validate(&self.document))
            .unwrap_or_default();
        if !errors.is_empty() {
            tracing::debug!(
                step = step.id,
                error_count = errors.len(),
                "step validation failed"
            );
            self.errors = errors;
            return NextOutcome::Blocked;
        }

        self.completed.insert(self.current);
        self.errors.clear();
        if self.current + 1 == self.steps.len() {
            tracing::info!(step = step.id, "wizard completed");
            self.finished = true;
            self.handler.on_complete(&self.document);
            return NextOutcome::Completed;
        }
        self.current += 1;
        NextOutcome::Advanced(self.current)
    }

    /// Step back one position; no-op at the first step.
    pub fn previous(&mut self) -> bool {
        match self.current.checked_sub(1) {
            Some(index) => self.go_to_step(index),
            None => false,
        }
    }

    /// Whether `index` can be reached from the current state.
    ///
    /// Step 0 and every step up to the current one are always reachable;
    /// a later step is reachable once its predecessor has been completed.
    pub fn is_step_accessible(&self, index: usize) -> bool {
        if index >= self.steps.len() {
            return false;
        }
        index == 0 || index <= self.current || self.completed.contains(&(index - 1))
    }

    pub fn steps(&self) -> &[StepDescriptor<R>] {
        &self.steps
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> &StepDescriptor<R> {
        &self.steps[self.current]
    }

    pub fn completed_steps(&self) -> &BTreeSet<usize> {
        &self.completed
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Whether the completion handler has fired at least once.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
