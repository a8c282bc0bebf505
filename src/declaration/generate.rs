//! Conversion of accumulated documents into the BC 2.0 payload.
//!
//! Two input shapes are accepted: the flat form document the wizard builds,
//! and the spreadsheet shape (`MainData` plus one array per sheet).
use super::{Collection, Declaration};
use anyhow::{anyhow, Context, Result};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Top-level key that marks spreadsheet-shaped input.
pub const SPREADSHEET_MAIN_KEY: &str = "MainData";

/// Build a typed declaration from either supported input shape.
pub fn declaration_from_value(input: &Value) -> Result<Declaration> {
    let object = input
        .as_object()
        .ok_or_else(|| anyhow!("declaration input must be a JSON object"))?;
    if object.contains_key(SPREADSHEET_MAIN_KEY) {
        from_spreadsheet(object)
    } else {
        from_form(object)
    }
}

/// Render a declaration as pretty JSON (two-space indent).
pub fn to_json_string(declaration: &Declaration) -> Result<String> {
    serde_json::to_string_pretty(declaration).context("serialize declaration JSON")
}

/// Convert input to a declaration and render it in one step.
pub fn generate_json(input: &Value) -> Result<String> {
    let declaration = declaration_from_value(input)?;
    tracing::info!(
        barang = declaration.barang.len(),
        entitas = declaration.entitas.len(),
        "declaration generated"
    );
    to_json_string(&declaration)
}

fn from_form(object: &Map<String, Value>) -> Result<Declaration> {
    serde_json::from_value(Value::Object(object.clone()))
        .context("convert form data to declaration")
}

fn from_spreadsheet(object: &Map<String, Value>) -> Result<Declaration> {
    let main = object
        .get(SPREADSHEET_MAIN_KEY)
        .and_then(Value::as_object)
        .ok_or_else(|| anyhow!("{SPREADSHEET_MAIN_KEY} is not a valid object"))?;

    let mut scalars = main.clone();
    for collection in Collection::ALL {
        scalars.remove(collection.key());
    }
    let mut declaration: Declaration = serde_json::from_value(Value::Object(scalars))
        .context("map main data fields")?;

    declaration.barang = sheet_items(object, Collection::Barang);
    declaration.entitas = sheet_items(object, Collection::Entitas);
    declaration.kemasan = sheet_items(object, Collection::Kemasan);
    declaration.kontainer = sheet_items(object, Collection::Kontainer);
    declaration.dokumen = sheet_items(object, Collection::Dokumen);
    declaration.pengangkut = sheet_items(object, Collection::Pengangkut);
    Ok(declaration)
}

/// Convert one sheet's rows, skipping rows that do not fit the schema.
fn sheet_items<T: DeserializeOwned>(object: &Map<String, Value>, collection: Collection) -> Vec<T> {
    let Some(rows) = object.get(collection.sheet()).and_then(Value::as_array) else {
        return Vec::new();
    };
    rows.iter()
        .enumerate()
        .filter(|(_, row)| row.is_object())
        .filter_map(|(index, row)| match serde_json::from_value(row.clone()) {
            Ok(item) => Some(item),
            Err(err) => {
                tracing::warn!(
                    sheet = collection.sheet(),
                    row = index + 1,
                    error = %err,
                    "skipping row that does not match the schema"
                );
                None
            }
        })
        .collect()
}
