//! Accumulated declaration document and fragment helpers.
//!
//! The document is a flat JSON object whose values are scalars or arrays of
//! record objects. Steps contribute fragments; merging is a shallow key
//! overwrite so a step never disturbs keys it did not emit.
use serde_json::{Map, Value};

/// The growing record built across all wizard steps.
pub type Document = Map<String, Value>;

/// A partial update emitted by the active step's renderer.
pub type Fragment = Map<String, Value>;

/// Merge `fragment` into `document`, replacing every key it carries.
pub fn merge_fragment(document: &mut Document, fragment: Fragment) {
    for (key, value) in fragment {
        document.insert(key, value);
    }
}

/// Build a single-key fragment.
pub fn fragment_of(key: &str, value: Value) -> Fragment {
    let mut fragment = Fragment::new();
    fragment.insert(key.to_string(), value);
    fragment
}

/// Whether a field value counts as "not filled in".
///
/// Mirrors form semantics: missing, null, false, numeric zero, and empty or
/// whitespace-only strings are all blank. Arrays and objects are never blank.
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(flag)) => !flag,
        Some(Value::Number(number)) => match number.as_f64() {
            Some(n) => n == 0.0,
            None => true,
        },
        Some(Value::String(text)) => text.trim().is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => false,
    }
}

/// Borrow the record items of a collection field, if it is an array.
pub fn collection<'a>(document: &'a Document, key: &str) -> Option<&'a Vec<Value>> {
    document.get(key).and_then(Value::as_array)
}

/// Number of items in a collection field (0 when absent or not an array).
pub fn collection_len(document: &Document, key: &str) -> usize {
    collection(document, key).map_or(0, Vec::len)
}

/// Render a scalar for display; collections render as an item count.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Array(items) => format!("[{} item(s)]", items.len()),
        other => other.to_string(),
    }
}
