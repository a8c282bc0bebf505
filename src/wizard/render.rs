//! Step renderers: how each step displays the document and turns user input
//! into fragments.
//!
//! Renderers never mutate the document. [`StepRenderer::apply`] reads the
//! current document and returns the fragment the engine should merge.
use super::steps::validate_main_data;
use crate::declaration::{generate_json, Collection};
use crate::document::{collection, collection_len, display_value, fragment_of, Document, Fragment};
use crate::fields::parse_value;
use crate::util::truncate_string;
use anyhow::{anyhow, bail, Result};
use serde_json::{Map, Value};
use std::io::{self, Write};

const PREVIEW_MAX_BYTES: usize = 1200;

/// Scalar fields edited on the main-data step, in display order.
pub const MAIN_FIELDS: &[&str] = &[
    "asalData",
    "disclaimer",
    "idPengguna",
    "kodeDokumen",
    "kodeKantor",
    "kodeJenisImpor",
    "kodeJenisProsedur",
    "kodeCaraBayar",
    "nomorAju",
    "tanggalAju",
    "nomorBc11",
    "tanggalBc11",
    "posBc11",
    "subPosBc11",
    "kodePelMuat",
    "kodePelTransit",
    "kodePelTujuan",
    "kodeTps",
    "kodeTutupPu",
    "tanggalTiba",
    "kodeValuta",
    "ndpbm",
    "kodeIncoterm",
    "kodeJenisNilai",
    "kodeAsuransi",
    "fob",
    "freight",
    "asuransi",
    "biayaTambahan",
    "biayaPengurang",
    "cif",
    "hargaPenyerahan",
    "nilaiBarang",
    "nilaiIncoterm",
    "nilaiMaklon",
    "totalDanaSawit",
    "flagVd",
    "vd",
    "bruto",
    "netto",
    "volume",
    "jumlahKontainer",
    "jumlahTandaPengaman",
    "seri",
    "namaTtd",
    "jabatanTtd",
    "kotaTtd",
    "tanggalTtd",
];

/// User intent for the active step, already split into field assignments.
#[derive(Debug, Clone, PartialEq)]
pub enum StepInput {
    /// Assign scalar fields on the main record.
    Set(Vec<(String, String)>),
    /// Append an item built from the collection template.
    Add {
        collection: Collection,
        fields: Vec<(String, String)>,
    },
    /// Overwrite fields of an existing item (1-based position).
    Edit {
        collection: Collection,
        position: usize,
        fields: Vec<(String, String)>,
    },
    /// Drop an item (1-based position).
    Remove {
        collection: Collection,
        position: usize,
    },
}

/// The closed set of step renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepRenderer {
    MainData,
    Barang,
    Entitas,
    OtherData,
    Review,
}

impl StepRenderer {
    /// Collections this step owns.
    pub fn collections(&self) -> &'static [Collection] {
        match self {
            StepRenderer::MainData | StepRenderer::Review => &[],
            StepRenderer::Barang => &[Collection::Barang],
            StepRenderer::Entitas => &[Collection::Entitas],
            StepRenderer::OtherData => &[
                Collection::Kemasan,
                Collection::Kontainer,
                Collection::Dokumen,
                Collection::Pengangkut,
            ],
        }
    }

    /// Scalar fields this step owns.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            StepRenderer::MainData => MAIN_FIELDS,
            _ => &[],
        }
    }

    pub fn render(&self, document: &Document, errors: &[String], out: &mut dyn Write) -> io::Result<()> {
        for name in self.fields() {
            let value = document.get(*name).map(display_value).unwrap_or_default();
            writeln!(out, "  {name:<22} {value}")?;
        }
        for owned in self.collections() {
            render_collection(*owned, document, out)?;
        }
        if *self == StepRenderer::Review {
            render_review(document, out)?;
        }
        if !errors.is_empty() {
            writeln!(out, "errors:")?;
            for error in errors {
                writeln!(out, "  - {error}")?;
            }
        }
        Ok(())
    }

    /// Turn `input` into the fragment for this step.
    pub fn apply(&self, document: &Document, input: &StepInput) -> Result<Fragment> {
        match input {
            StepInput::Set(assignments) => {
                if self.fields().is_empty() {
                    bail!("this step has no fields to set; use add/edit/remove");
                }
                let mut fragment = Fragment::new();
                for (name, raw) in assignments {
                    if !self.fields().contains(&name.as_str()) {
                        bail!("unknown field {name}");
                    }
                    fragment.insert(name.clone(), parse_value(name, raw)?);
                }
                Ok(fragment)
            }
            StepInput::Add { collection: target, fields } => {
                self.ensure_owns(*target)?;
                let mut items = items_of(document, *target);
                let mut item = target.template(items.len() + 1)?;
                assign_item_fields(*target, &mut item, fields)?;
                items.push(item);
                Ok(collection_fragment(*target, items))
            }
            StepInput::Edit {
                collection: target,
                position,
                fields,
            } => {
                self.ensure_owns(*target)?;
                let mut items = items_of(document, *target);
                let index = item_index(*target, *position, items.len())?;
                assign_item_fields(*target, &mut items[index], fields)?;
                Ok(collection_fragment(*target, items))
            }
            StepInput::Remove {
                collection: target,
                position,
            } => {
                self.ensure_owns(*target)?;
                let mut items = items_of(document, *target);
                let index = item_index(*target, *position, items.len())?;
                items.remove(index);
                Ok(collection_fragment(*target, items))
            }
        }
    }

    fn ensure_owns(&self, target: Collection) -> Result<()> {
        if self.collections().contains(&target) {
            Ok(())
        } else {
            Err(anyhow!("{target} is not edited on this step"))
        }
    }
}

/// Fields shown in one-line item summaries.
fn summary_fields(target: Collection) -> &'static [&'static str] {
    match target {
        Collection::Barang => &["uraian", "merk", "tipe", "cif", "bruto", "netto", "jumlahSatuan"],
        Collection::Entitas => &["namaEntitas", "kodeEntitas", "alamatEntitas"],
        Collection::Kemasan => &["jumlahKemasan", "kodeJenisKemasan", "merkKemasan"],
        Collection::Kontainer => &[
            "nomorKontainer",
            "kodeUkuranKontainer",
            "kodeJenisKontainer",
            "kodeTipeKontainer",
        ],
        Collection::Dokumen => &["kodeDokumen", "nomorDokumen", "tanggalDokumen"],
        Collection::Pengangkut => &["namaPengangkut", "nomorPengangkut", "kodeBendera", "kodeCaraAngkut"],
    }
}

fn render_collection(target: Collection, document: &Document, out: &mut dyn Write) -> io::Result<()> {
    let items = collection(document, target.key()).map(Vec::as_slice).unwrap_or(&[]);
    writeln!(out, "  {target} ({} item(s))", items.len())?;
    for (index, item) in items.iter().enumerate() {
        let summary = summary_fields(target)
            .iter()
            .map(|name| {
                let value = item.get(*name).map(display_value).unwrap_or_default();
                format!("{name}={value}")
            })
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "    #{} {summary}", index + 1)?;
    }
    Ok(())
}

/// Counts per collection plus a main-data completeness flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSummary {
    pub main_data_complete: bool,
    pub counts: Vec<(Collection, usize)>,
    pub total_items: usize,
}

pub fn review_summary(document: &Document) -> ReviewSummary {
    let counts: Vec<_> = Collection::ALL
        .into_iter()
        .map(|target| (target, collection_len(document, target.key())))
        .collect();
    ReviewSummary {
        main_data_complete: validate_main_data(document).is_empty(),
        total_items: counts.iter().map(|(_, count)| count).sum(),
        counts,
    }
}

fn render_review(document: &Document, out: &mut dyn Write) -> io::Result<()> {
    let summary = review_summary(document);
    writeln!(
        out,
        "  main data: {}",
        if summary.main_data_complete { "complete" } else { "incomplete" }
    )?;
    for (target, count) in &summary.counts {
        writeln!(out, "  {target:<12} {count}")?;
    }
    writeln!(out, "  total items  {}", summary.total_items)?;
    match generate_json(&Value::Object(document.clone())) {
        Ok(json) => {
            writeln!(out, "preview:")?;
            let preview = truncate_string(&json, PREVIEW_MAX_BYTES);
            writeln!(out, "{preview}")?;
            if preview.len() < json.len() {
                writeln!(out, "... ({} bytes total)", json.len())?;
            }
        }
        Err(err) => writeln!(out, "preview unavailable: {err:#}")?,
    }
    Ok(())
}

fn items_of(document: &Document, target: Collection) -> Vec<Value> {
    collection(document, target.key()).cloned().unwrap_or_default()
}

fn item_index(target: Collection, position: usize, len: usize) -> Result<usize> {
    match position.checked_sub(1) {
        Some(index) if index < len => Ok(index),
        _ => Err(anyhow!("{target} has no item {position} ({len} item(s))")),
    }
}

fn assign_item_fields(target: Collection, item: &mut Value, fields: &[(String, String)]) -> Result<()> {
    let record: &mut Map<String, Value> = item
        .as_object_mut()
        .ok_or_else(|| anyhow!("{target} item is not a record"))?;
    for (name, raw) in fields {
        if !record.contains_key(name) {
            bail!("unknown field {name} for {target}");
        }
        if record.get(name).is_some_and(|value| value.is_array() || value.is_object()) {
            bail!("{name} is a list and cannot be set from the prompt");
        }
        record.insert(name.clone(), parse_value(name, raw)?);
    }
    Ok(())
}

fn collection_fragment(target: Collection, items: Vec<Value>) -> Fragment {
    fragment_of(target.key(), Value::Array(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::{initial_document, sample_document};
    use serde_json::json;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn set_parses_numeric_main_fields() {
        let fragment = StepRenderer::MainData
            .apply(
                &initial_document(),
                &StepInput::Set(pairs(&[("cif", "12.5"), ("nomorBc11", "000001")])),
            )
            .expect("set");
        assert_eq!(fragment.get("cif"), Some(&json!(12.5)));
        assert_eq!(fragment.get("nomorBc11"), Some(&json!("000001")));
        assert_eq!(fragment.len(), 2);
    }

    #[test]
    fn set_rejects_unknown_fields_and_other_steps() {
        let document = initial_document();
        let input = StepInput::Set(pairs(&[("nope", "1")]));
        assert!(StepRenderer::MainData.apply(&document, &input).is_err());
        let input = StepInput::Set(pairs(&[("cif", "1")]));
        assert!(StepRenderer::Barang.apply(&document, &input).is_err());
    }

    #[test]
    fn add_assigns_next_serial_and_defaults() {
        let document = sample_document();
        let fragment = StepRenderer::Barang
            .apply(
                &document,
                &StepInput::Add {
                    collection: Collection::Barang,
                    fields: pairs(&[("uraian", "BOLTS"), ("netto", "4")]),
                },
            )
            .expect("add");
        let items = fragment["barang"].as_array().expect("array");
        assert_eq!(items.len(), 2);
        assert_eq!(items[1]["seriBarang"], json!(2));
        assert_eq!(items[1]["uraian"], json!("BOLTS"));
        assert_eq!(items[1]["netto"], json!(4));
        assert_eq!(items[1]["pernyataanLartas"], json!("Y"));
    }

    #[test]
    fn add_rejects_collections_owned_by_other_steps() {
        let input = StepInput::Add {
            collection: Collection::Entitas,
            fields: Vec::new(),
        };
        assert!(StepRenderer::Barang.apply(&initial_document(), &input).is_err());
        let input = StepInput::Add {
            collection: Collection::Kontainer,
            fields: Vec::new(),
        };
        assert!(StepRenderer::OtherData.apply(&initial_document(), &input).is_ok());
    }

    #[test]
    fn edit_and_remove_use_one_based_positions() {
        let document = sample_document();
        let edit = StepInput::Edit {
            collection: Collection::Entitas,
            position: 1,
            fields: pairs(&[("namaEntitas", "PT BARU")]),
        };
        let fragment = StepRenderer::Entitas.apply(&document, &edit).expect("edit");
        assert_eq!(fragment["entitas"][0]["namaEntitas"], json!("PT BARU"));

        let remove = StepInput::Remove {
            collection: Collection::Entitas,
            position: 0,
        };
        assert!(StepRenderer::Entitas.apply(&document, &remove).is_err());
        let remove = StepInput::Remove {
            collection: Collection::Entitas,
            position: 1,
        };
        let fragment = StepRenderer::Entitas.apply(&document, &remove).expect("remove");
        assert_eq!(fragment["entitas"], json!([]));
    }

    #[test]
    fn edit_rejects_nested_item_fields() {
        let document = sample_document();
        let edit = StepInput::Edit {
            collection: Collection::Barang,
            position: 1,
            fields: pairs(&[("uraian", "NEW"), ("barangTarif", "x")]),
        };
        let err = StepRenderer::Barang.apply(&document, &edit).expect_err("nested field");
        assert!(err.to_string().contains("barangTarif is a list"));
        let add = StepInput::Add {
            collection: Collection::Barang,
            fields: pairs(&[("barangDokumen", "")]),
        };
        assert!(StepRenderer::Barang.apply(&document, &add).is_err());
    }

    #[test]
    fn review_summary_counts_items() {
        let summary = review_summary(&sample_document());
        assert!(summary.main_data_complete);
        assert_eq!(summary.total_items, 2);
        assert!(!review_summary(&initial_document()).main_data_complete);
    }

    #[test]
    fn review_render_includes_preview() {
        let mut out = Vec::new();
        StepRenderer::Review
            .render(&sample_document(), &[], &mut out)
            .expect("render");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("main data: complete"));
        assert!(text.contains("preview:"));
        assert!(text.contains("\"asalData\": \"S\""));
    }

    #[test]
    fn render_lists_errors() {
        let mut out = Vec::new();
        StepRenderer::Barang
            .render(&initial_document(), &["At least one barang item is required".to_string()], &mut out)
            .expect("render");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("barang (0 item(s))"));
        assert!(text.contains("  - At least one barang item is required"));
    }
}
