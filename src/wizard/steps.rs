//! The five-step BC 2.0 declaration wizard.
use super::engine::StepDescriptor;
use super::render::StepRenderer;
use super::validators::{require_collection, require_fields, CollectionRule};
use crate::document::Document;

pub const MAIN_DATA_REQUIRED: &[&str] = &[
    "asalData",
    "cif",
    "bruto",
    "netto",
    "ndpbm",
    "vd",
    "idPengguna",
    "nomorAju",
    "nomorBc11",
    "namaTtd",
    "jabatanTtd",
    "kotaTtd",
];

pub const BARANG_RULE: CollectionRule = CollectionRule {
    key: "barang",
    noun: "barang item",
    item_label: "Barang item",
    required: &["uraian", "merk", "tipe", "cif", "bruto", "netto", "jumlahSatuan"],
};

pub const ENTITAS_RULE: CollectionRule = CollectionRule {
    key: "entitas",
    noun: "entitas",
    item_label: "Entitas",
    required: &["namaEntitas", "kodeEntitas", "alamatEntitas"],
};

pub fn validate_main_data(document: &Document) -> Vec<String> {
    require_fields(document, MAIN_DATA_REQUIRED)
}

pub fn validate_barang(document: &Document) -> Vec<String> {
    require_collection(document, &BARANG_RULE)
}

pub fn validate_entitas(document: &Document) -> Vec<String> {
    require_collection(document, &ENTITAS_RULE)
}

/// Ordered step list for one declaration run.
pub fn declaration_steps() -> Vec<StepDescriptor<StepRenderer>> {
    vec![
        StepDescriptor {
            id: "main-data",
            title: "Main Data",
            description: "Document information and financial data",
            renderer: StepRenderer::MainData,
            validator: Some(validate_main_data),
        },
        StepDescriptor {
            id: "barang",
            title: "Barang",
            description: "Goods and items information",
            renderer: StepRenderer::Barang,
            validator: Some(validate_barang),
        },
        StepDescriptor {
            id: "entitas",
            title: "Entitas",
            description: "Entities (importers, exporters, etc.)",
            renderer: StepRenderer::Entitas,
            validator: Some(validate_entitas),
        },
        StepDescriptor {
            id: "other-data",
            title: "Additional Data",
            description: "Packaging, containers, documents",
            renderer: StepRenderer::OtherData,
            validator: None,
        },
        StepDescriptor {
            id: "review",
            title: "Review & Generate",
            description: "Review data and generate JSON",
            renderer: StepRenderer::Review,
            validator: None,
        },
    ]
}
