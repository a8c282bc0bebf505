//! Per-form draft persistence.
//!
//! Draft storage is best effort: a broken store must never stop data entry, so
//! the [`DraftStore`] operations return nothing and log failures instead.
mod file;

pub use file::FileDraftStore;

use crate::document::Document;
use std::collections::HashMap;

/// Durable key-value storage of in-progress documents, keyed by form id.
pub trait DraftStore {
    /// The stored draft for `form_id`, or `fallback` when none is usable.
    fn load(&self, form_id: &str, fallback: Document) -> Document;
    /// Replace the stored draft for `form_id`.
    fn save(&mut self, form_id: &str, document: &Document);
    /// Remove the stored draft for `form_id`, if any.
    fn clear(&mut self, form_id: &str);
}

/// In-memory store backing `wizard --no-draft` sessions.
#[derive(Debug, Default)]
pub struct MemoryDraftStore {
    drafts: HashMap<String, Document>,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DraftStore for MemoryDraftStore {
    fn load(&self, form_id: &str, fallback: Document) -> Document {
        self.drafts.get(form_id).cloned().unwrap_or(fallback)
    }

    fn save(&mut self, form_id: &str, document: &Document) {
        self.drafts.insert(form_id.to_string(), document.clone());
    }

    fn clear(&mut self, form_id: &str) {
        self.drafts.remove(form_id);
    }
}

#[cfg(test)]
#[path = "draft_tests.rs"]
mod tests;
