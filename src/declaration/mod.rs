//! BC 2.0 declaration schema, collections, and JSON generation.
//!
//! The wizard works on a loosely typed document; this module owns the typed
//! view of that document and the conversion into the customs payload.
mod generate;
mod model;
mod sample;

pub use generate::generate_json;
pub use model::{Barang, Declaration, Dokumen, Entitas, Kemasan, Kontainer, Pengangkut};
pub use sample::{initial_document, sample_document};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Record-valued fields of the declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Barang,
    Entitas,
    Kemasan,
    Kontainer,
    Dokumen,
    Pengangkut,
}

impl Collection {
    pub const ALL: [Collection; 6] = [
        Collection::Barang,
        Collection::Entitas,
        Collection::Kemasan,
        Collection::Kontainer,
        Collection::Dokumen,
        Collection::Pengangkut,
    ];

    /// Key of the collection in the form document.
    pub fn key(&self) -> &'static str {
        match self {
            Collection::Barang => "barang",
            Collection::Entitas => "entitas",
            Collection::Kemasan => "kemasan",
            Collection::Kontainer => "kontainer",
            Collection::Dokumen => "dokumen",
            Collection::Pengangkut => "pengangkut",
        }
    }

    /// Sheet name used by spreadsheet-shaped input.
    pub fn sheet(&self) -> &'static str {
        match self {
            Collection::Barang => "Barang",
            Collection::Entitas => "Entitas",
            Collection::Kemasan => "Kemasan",
            Collection::Kontainer => "Kontainer",
            Collection::Dokumen => "Dokumen",
            Collection::Pengangkut => "Pengangkut",
        }
    }

    /// Field carrying the 1-based serial of each item.
    pub fn serial_field(&self) -> &'static str {
        match self {
            Collection::Barang => "seriBarang",
            Collection::Entitas => "seriEntitas",
            Collection::Kemasan => "seriKemasan",
            Collection::Kontainer => "seriKontainer",
            Collection::Dokumen => "seriDokumen",
            Collection::Pengangkut => "seriPengangkut",
        }
    }

    pub fn from_key(key: &str) -> Option<Collection> {
        Collection::ALL
            .into_iter()
            .find(|collection| collection.key() == key)
    }

    /// Blank record for a new item with its serial already assigned.
    pub fn template(&self, serial: usize) -> Result<Value> {
        let mut value = match self {
            Collection::Barang => to_template(Barang::default()),
            Collection::Entitas => to_template(Entitas {
                kode_jenis_api: Some(String::new()),
                kode_jenis_identitas: Some(String::new()),
                kode_status: Some(String::new()),
                nib_entitas: Some(String::new()),
                nomor_identitas: Some(String::new()),
                kode_negara: Some(String::new()),
                ..Entitas::default()
            }),
            Collection::Kemasan => to_template(Kemasan::default()),
            Collection::Kontainer => to_template(Kontainer::default()),
            Collection::Dokumen => to_template(Dokumen {
                nama_fasilitas: Some(String::new()),
                ..Dokumen::default()
            }),
            Collection::Pengangkut => to_template(Pengangkut::default()),
        }
        .with_context(|| format!("build {} template", self.key()))?;
        if let Some(record) = value.as_object_mut() {
            record.insert(self.serial_field().to_string(), Value::from(serial));
        }
        Ok(value)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.key())
    }
}

fn to_template<T: Serialize>(record: T) -> Result<Value> {
    Ok(serde_json::to_value(record)?)
}

#[cfg(test)]
#[path = "declaration_tests.rs"]
mod tests;
