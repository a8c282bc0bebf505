//! Starting documents for the declaration wizard.
use crate::document::Document;
use serde_json::{json, Value};

/// Defaults used when no draft exists for a form.
pub fn initial_document() -> Document {
    into_document(json!({
        "asalData": "S",
        "disclaimer": "1",
        "flagVd": "Y",
        "asuransi": 0,
        "biayaPengurang": 0,
        "biayaTambahan": 0,
        "bruto": 0,
        "cif": 0,
        "fob": 0,
        "freight": 0,
        "hargaPenyerahan": 0,
        "idPengguna": "",
        "jabatanTtd": "",
        "jumlahKontainer": 1,
        "jumlahTandaPengaman": 0,
        "kodeAsuransi": "LN",
        "kodeCaraBayar": "2",
        "kodeDokumen": "20",
        "kodeIncoterm": "CIF",
        "kodeJenisImpor": "1",
        "kodeJenisNilai": "KMD",
        "kodeJenisProsedur": "1",
        "kodeKantor": "051000",
        "kodePelMuat": "",
        "kodePelTransit": "",
        "kodePelTujuan": "",
        "kodeTps": "",
        "kodeTutupPu": "11",
        "kodeValuta": "CNY",
        "kotaTtd": "",
        "namaTtd": "",
        "ndpbm": 0,
        "netto": 0,
        "nilaiBarang": 0,
        "nilaiIncoterm": 0,
        "nilaiMaklon": 0,
        "nomorAju": "",
        "nomorBc11": "",
        "posBc11": "",
        "seri": 0,
        "subPosBc11": "",
        "tanggalAju": "",
        "tanggalBc11": "",
        "tanggalTiba": "",
        "tanggalTtd": "",
        "totalDanaSawit": 0,
        "volume": 0,
        "vd": 0,
        "barang": [],
        "entitas": [],
        "kemasan": [],
        "kontainer": [],
        "dokumen": [],
        "pengangkut": []
    }))
}

/// A complete declaration that passes every step validator.
pub fn sample_document() -> Document {
    let mut document = initial_document();
    let overrides = into_document(json!({
        "idPengguna": "SAMPLE_USER",
        "cif": 1234567.89,
        "bruto": 350.71,
        "netto": 342.71,
        "ndpbm": 1234.56,
        "vd": 123,
        "nomorAju": "301017INA9G220220525000025",
        "nomorBc11": "000001",
        "posBc11": "0001",
        "subPosBc11": "00000000",
        "tanggalAju": "2021-12-25",
        "tanggalBc11": "2021-12-24",
        "tanggalTiba": "2021-12-25",
        "tanggalTtd": "2021-12-25",
        "namaTtd": "AGUS",
        "jabatanTtd": "MANAGER",
        "kotaTtd": "JAKARTA",
        "kodePelMuat": "CNHSK",
        "kodePelTransit": "CNHSK",
        "kodePelTujuan": "IDJBK",
        "kodeTps": "TPS1",
        "barang": [{
            "seriBarang": 1,
            "uraian": "SAMPLE GOODS",
            "merk": "SAMPLE BRAND",
            "tipe": "SAMPLE TYPE",
            "cif": 1234000.89,
            "cifRupiah": 18510013.35,
            "bruto": 12,
            "netto": 340.71,
            "jumlahSatuan": 30,
            "hargaSatuan": 345.67,
            "kodeJenisKemasan": "CT",
            "kodeKondisiBarang": "8",
            "kodeNegaraAsal": "CN",
            "kodeSatuanBarang": "PCE",
            "posTarif": "84212990",
            "pernyataanLartas": "Y",
            "jumlahKemasan": 1,
            "ndpbm": 1200.56,
            "barangDokumen": [],
            "barangTarif": [],
            "barangVd": [],
            "barangSpekKhusus": [],
            "barangPemilik": []
        }],
        "entitas": [{
            "seriEntitas": 1,
            "namaEntitas": "SAMPLE IMPORTER",
            "kodeEntitas": "1",
            "alamatEntitas": "JAKARTA, INDONESIA",
            "nomorIdentitas": "123456789012345",
            "kodeJenisApi": "01",
            "kodeJenisIdentitas": "3",
            "kodeStatus": "AEO",
            "nibEntitas": "1234567890123",
            "kodeNegara": ""
        }]
    }));
    for (key, value) in overrides {
        document.insert(key, value);
    }
    document
}

fn into_document(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        _ => Document::new(),
    }
}
