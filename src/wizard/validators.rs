//! Building blocks for per-step validators.
//!
//! A validator is a pure, total function over the accumulated document that
//! returns human-readable messages in display order. An empty list means the
//! step may be left.
use crate::document::{collection, is_blank, Document};
use serde_json::{Map, Value};

/// Signature shared by every step validator.
pub type Validator = fn(&Document) -> Vec<String>;

/// Names of `required` fields that are missing or blank in `record`.
pub fn missing_fields(record: &Map<String, Value>, required: &[&str]) -> Vec<String> {
    required
        .iter()
        .filter(|field| is_blank(record.get(**field)))
        .map(|field| field.to_string())
        .collect()
}

/// One `"<field> is required"` message per missing or blank field.
pub fn require_fields(document: &Document, required: &[&str]) -> Vec<String> {
    missing_fields(document, required)
        .into_iter()
        .map(|field| format!("{field} is required"))
        .collect()
}

/// Shape rule for a collection-valued field.
#[derive(Debug, Clone, Copy)]
pub struct CollectionRule {
    /// Document key holding the array.
    pub key: &'static str,
    /// Noun used when the collection is empty ("At least one {noun} is required").
    pub noun: &'static str,
    /// Prefix used for per-item messages ("{label} {n}: ...").
    pub item_label: &'static str,
    /// Fields every item must carry.
    pub required: &'static [&'static str],
}

/// Check that a collection is non-empty and that each item carries its
/// required fields, aggregating one message per invalid item.
pub fn require_collection(document: &Document, rule: &CollectionRule) -> Vec<String> {
    let items = match collection(document, rule.key) {
        Some(items) if !items.is_empty() => items,
        _ => return vec![format!("At least one {} is required", rule.noun)],
    };
    let empty = Map::new();
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let record = item.as_object().unwrap_or(&empty);
            let missing = missing_fields(record, rule.required);
            if missing.is_empty() {
                None
            } else {
                Some(format!(
                    "{} {}: {}",
                    rule.item_label,
                    index + 1,
                    missing.join(", ")
                ))
            }
        })
        .collect()
}
