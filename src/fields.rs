//! Read-only BC 2.0 field dictionary.
//!
//! Descriptions and hints come from the customs schema; value kinds decide how
//! raw text typed at the prompt becomes a JSON value.
use anyhow::{anyhow, Result};
use serde::Serialize;
use serde_json::Value;

/// Which record a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldContext {
    Main,
    Barang,
    Entitas,
    Kemasan,
    Dokumen,
    Pengangkut,
}

impl FieldContext {
    pub const ALL: [FieldContext; 6] = [
        FieldContext::Main,
        FieldContext::Barang,
        FieldContext::Entitas,
        FieldContext::Kemasan,
        FieldContext::Dokumen,
        FieldContext::Pengangkut,
    ];

    pub fn parse(name: &str) -> Option<FieldContext> {
        FieldContext::ALL
            .into_iter()
            .find(|context| context.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldContext::Main => "main",
            FieldContext::Barang => "barang",
            FieldContext::Entitas => "entitas",
            FieldContext::Kemasan => "kemasan",
            FieldContext::Dokumen => "dokumen",
            FieldContext::Pengangkut => "pengangkut",
        }
    }
}

/// JSON type a field's value must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Text,
    Decimal,
    Integer,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldMetadata {
    pub context: FieldContext,
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    #[serde(skip_serializing_if = "is_empty_list")]
    pub examples: &'static [&'static str],
    #[serde(skip_serializing_if = "is_empty_list")]
    pub allowed: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<&'static str>,
}

fn is_empty_list(list: &&'static [&'static str]) -> bool {
    list.is_empty()
}

const fn field(
    context: FieldContext,
    name: &'static str,
    description: &'static str,
    examples: &'static [&'static str],
) -> FieldMetadata {
    FieldMetadata {
        context,
        name,
        description,
        message: None,
        examples,
        allowed: &[],
        max_length: None,
        multiple_of: None,
        format: None,
        pattern: None,
    }
}

const fn amount(
    name: &'static str,
    description: &'static str,
    message: &'static str,
    multiple_of: f64,
    examples: &'static [&'static str],
) -> FieldMetadata {
    FieldMetadata {
        message: Some(message),
        max_length: Some(24),
        multiple_of: Some(multiple_of),
        ..field(FieldContext::Main, name, description, examples)
    }
}

const fn coded(
    name: &'static str,
    description: &'static str,
    message: &'static str,
    allowed: &'static [&'static str],
    examples: &'static [&'static str],
) -> FieldMetadata {
    FieldMetadata {
        message: Some(message),
        allowed,
        ..field(FieldContext::Main, name, description, examples)
    }
}

const fn date(
    context: FieldContext,
    name: &'static str,
    description: &'static str,
    examples: &'static [&'static str],
) -> FieldMetadata {
    FieldMetadata {
        format: Some("date"),
        ..field(context, name, description, examples)
    }
}

use FieldContext::{Barang, Dokumen, Entitas, Kemasan, Main, Pengangkut};

static FIELDS: &[FieldMetadata] = &[
    coded(
        "asalData",
        "Asal pengiriman data secara Host to Host. Selalu gunakan nilai 'S'",
        "Asal pengiriman data secara Host to Host: S",
        &["S"],
        &["S"],
    ),
    amount(
        "asuransi",
        "Nilai asuransi yang dibayarkan untuk pengiriman barang. Sesuai kolom formulir BC 2.0 - D.24 Asuransi LN/DN",
        "Nilai asuransi maksimal 24 digit dengan dua angka dibelakang koma",
        0.01,
        &["1500.00", "2750.50"],
    ),
    amount(
        "bruto",
        "Berat kotor barang dalam kilogram (kg). Sesuai kolom formulir BC 2.0 - D.29 Berat Kotor (kg)",
        "Nilai bruto maksimal 24 digit dengan empat angka dibelakang koma",
        0.0001,
        &["1000.5000", "2500.7500"],
    ),
    amount(
        "cif",
        "Cost, Insurance, and Freight - Nilai pabean barang impor. Sesuai kolom formulir BC 2.0 - D.26 Nilai Pabean",
        "Nilai cif maksimal 24 digit dengan dua angka dibelakang koma",
        0.01,
        &["5000.00", "12500.75"],
    ),
    coded(
        "disclaimer",
        "Persetujuan pengguna dalam kirim dokumen pabean: '1' untuk Ya atau '0' untuk Tidak",
        "Persetujuan pengguna dalam kirim dokumen pabean: 1 untuk Ya atau 0 untuk Tidak",
        &["0", "1"],
        &["1"],
    ),
    coded(
        "kodeJenisImpor",
        "Kode yang menunjukkan jenis impor yang dilakukan. Lihat Referensi Jenis Impor",
        "Format kode sesuai Referensi Jenis Impor",
        &[],
        &["1", "2", "3"],
    ),
    coded(
        "flagVd",
        "Flag Voluntary Declaration: 'Y' jika ada voluntary declaration atau 'T' jika tidak ada",
        "Flag Voluntary Declaration: Y untuk Ya atau T untuk Tidak",
        &["Y", "T"],
        &["Y", "T"],
    ),
    amount(
        "fob",
        "Free On Board - Nilai barang tidak termasuk biaya pengiriman dan asuransi. Sesuai kolom formulir BC 2.0 - D.23 Nilai",
        "Nilai fob maksimal 24 digit dengan dua angka dibelakang koma",
        0.01,
        &["4500.00", "10000.50"],
    ),
    amount(
        "freight",
        "Biaya pengangkutan/pengiriman barang. Sesuai kolom formulir BC 2.0 - D.25 Freight",
        "Nilai freight maksimal 24 digit dengan dua angka dibelakang koma",
        0.01,
        &["500.00", "1500.25"],
    ),
    coded(
        "jabatanTtd",
        "Jabatan pengguna yang menandatangani dokumen impor. Sesuai kolom formulir BC 2.0 - F",
        "Jabatan pengguna yang mengajukan dokumen impor",
        &[],
        &["Direktur", "Manager Impor"],
    ),
    coded(
        "jumlahKontainer",
        "Jumlah peti kemas/kontainer yang digunakan untuk mengangkut barang",
        "Jumlah kontainer atau peti kemas",
        &[],
        &["1", "5", "10"],
    ),
    coded(
        "kodeCaraBayar",
        "Kode cara pembayaran. Sesuai kolom formulir BC 2.0 - C. Cara Pembayaran. Lihat Referensi Cara Bayar",
        "Format kode sesuai Referensi Cara Bayar",
        &[],
        &["1", "2", "3"],
    ),
    coded(
        "kodeKantor",
        "Kode kantor pabean tempat pengajuan dokumen. Lihat Referensi Kantor",
        "Format kode sesuai Referensi Kantor",
        &[],
        &["040100", "050100"],
    ),
    coded(
        "kodePelMuat",
        "Kode pelabuhan tempat barang dimuat. Sesuai kolom formulir BC 2.0 - D.12 Pelabuhan Muat",
        "Format kode pelabuhan muat sesuai Referensi Pelabuhan",
        &[],
        &["IDTPP", "SGSIN"],
    ),
    coded(
        "kodePelTujuan",
        "Kode pelabuhan tujuan pengiriman barang. Sesuai kolom formulir BC 2.0 - D.14 Pelabuhan Tujuan",
        "Format kode pelabuhan tujuan sesuai Referensi Pelabuhan",
        &[],
        &["IDJKT", "IDBLW"],
    ),
    coded(
        "kodeTps",
        "Kode Tempat Penimbunan Sementara. Sesuai kolom formulir BC 2.0 - D.20 Tempat Penimbunan",
        "Format kode tps sesuai dengan yang dibuat oleh Kantor Pabean masing-masing",
        &[],
        &["TPSJKT01", "TPSBLW02"],
    ),
    coded(
        "kodeTutupPu",
        "Kode dokumen penutup Pemberitahuan Umum: '11' BC 1.1, '12' BC 1.2, '14' BC 1.4",
        "Format kode sesuai Referensi TutupPu",
        &["11", "12", "14"],
        &["11", "12", "14"],
    ),
    coded(
        "kodeValuta",
        "Kode mata uang transaksi. Sesuai kolom formulir BC 2.0 - D.21 Valuta",
        "Format kode sesuai Referensi Valuta",
        &[],
        &["USD", "IDR", "EUR"],
    ),
    coded(
        "kotaTtd",
        "Kota tempat dokumen ditandatangani. Sesuai kolom formulir BC 2.0 - F",
        "Kota tempat pengguna membuat dokumen impor",
        &[],
        &["Jakarta", "Surabaya"],
    ),
    coded(
        "namaTtd",
        "Nama lengkap penandatangan dokumen. Sesuai kolom formulir BC 2.0 - F",
        "Nama pengguna yang membuat dokumen impor",
        &[],
        &["Budi Santoso"],
    ),
    amount(
        "ndpbm",
        "Nilai Dasar Penghitungan Bea Masuk (kurs). Sesuai kolom formulir BC 2.0 - D.22 NDPBM",
        "Ndpbm maksimal 24 digit dengan empat angka dibelakang koma",
        0.0001,
        &["15500.0000", "14250.7500"],
    ),
    amount(
        "netto",
        "Berat bersih barang dalam kilogram (kg). Sesuai kolom formulir BC 2.0 - D.30 Berat Bersih (Kg)",
        "Nilai netto/berat bersih maksimal 24 digit dengan empat angka dibelakang koma",
        0.0001,
        &["950.5000", "2400.7500"],
    ),
    FieldMetadata {
        message: Some("Nomor pengajuan 26 digit: kode kantor, kode dokumen, kode perusahaan, tanggal YYYYMMDD, nomor urut"),
        pattern: Some("^[A-Za-z0-9]{26}$"),
        ..field(
            Main,
            "nomorAju",
            "Nomor pengajuan dokumen pabean yang terdiri dari 26 digit",
            &["0401002012345202307010001"],
        )
    },
    date(
        Main,
        "tanggalTiba",
        "Perkiraan tanggal kedatangan barang (YYYY-MM-DD). Sesuai kolom formulir BC 2.0 - D.11",
        &["2023-07-10"],
    ),
    date(
        Main,
        "tanggalTtd",
        "Tanggal penandatanganan dokumen pabean (YYYY-MM-DD)",
        &["2023-07-01"],
    ),
    amount(
        "biayaTambahan",
        "Biaya tambahan yang dikenakan selain nilai barang, freight, dan asuransi",
        "Biaya tambahan maksimal 24 digit dengan dua angka dibelakang koma",
        0.01,
        &["200.00", "500.50"],
    ),
    amount(
        "biayaPengurang",
        "Biaya pengurang yang mengurangi nilai pabean",
        "Biaya pengurang maksimal 24 digit dengan dua angka dibelakang koma",
        0.01,
        &["100.00", "250.50"],
    ),
    field(Barang, "asuransi", "Nilai asuransi untuk barang ini", &["100.00", "250.50"]),
    field(Barang, "cif", "Nilai Cost, Insurance, and Freight untuk barang ini", &["1000.00"]),
    field(Barang, "fob", "Nilai Free On Board untuk barang ini", &["900.00"]),
    field(Barang, "freight", "Biaya pengangkutan untuk barang ini", &["100.00"]),
    field(Barang, "hargaSatuan", "Harga per satuan barang", &["10.00", "25.50"]),
    field(
        Barang,
        "jumlahKemasan",
        "Jumlah kemasan untuk barang ini. Sesuai kolom formulir BC 2.0 - D.35",
        &["10", "25"],
    ),
    field(
        Barang,
        "jumlahSatuan",
        "Jumlah barang dalam satuan yang ditentukan. Sesuai kolom formulir BC 2.0 - D.35",
        &["100.0000"],
    ),
    field(Barang, "kodeJenisKemasan", "Kode jenis kemasan. Lihat Referensi Jenis Kemasan", &["BX", "CT", "PK"]),
    field(Barang, "kodeSatuanBarang", "Kode satuan barang. Lihat Referensi Satuan Barang", &["PCE", "KGM", "MTR"]),
    field(Barang, "merk", "Merek barang. Sesuai kolom formulir BC 2.0 - D.32", &["Sony", "Samsung"]),
    field(Barang, "posTarif", "Pos tarif HS barang. Sesuai kolom formulir BC 2.0 - D.32", &["8471.30.10.00"]),
    field(Barang, "seriBarang", "Nomor urut/seri barang dalam dokumen", &["1", "2", "3"]),
    field(Barang, "tipe", "Tipe barang. Sesuai kolom formulir BC 2.0 - D.32", &["X100"]),
    field(Barang, "uraian", "Uraian/deskripsi barang. Sesuai kolom formulir BC 2.0 - D.32", &["Laptop 14 inch Core i7"]),
    field(Entitas, "alamatEntitas", "Alamat lengkap entitas", &["Jl. Sudirman No. 123, Jakarta Pusat"]),
    field(Entitas, "kodeEntitas", "Kode jenis entitas", &["1", "4", "7", "9", "10", "11"]),
    field(Entitas, "namaEntitas", "Nama lengkap entitas", &["PT. Importir Jaya"]),
    field(Entitas, "nomorIdentitas", "Nomor identitas entitas (NPWP, KTP, Paspor, dll)", &["01.234.567.8-123.000"]),
    field(Entitas, "seriEntitas", "Nomor urut/seri entitas dalam dokumen", &["1", "2", "3"]),
    field(Kemasan, "jumlahKemasan", "Jumlah kemasan", &["10", "25", "50"]),
    field(Kemasan, "kodeJenisKemasan", "Kode jenis kemasan", &["BX", "CT", "PK"]),
    field(Kemasan, "merkKemasan", "Merek kemasan", &["Sony"]),
    field(Kemasan, "seriKemasan", "Nomor urut/seri kemasan dalam dokumen", &["1", "2", "3"]),
    field(Dokumen, "kodeDokumen", "Kode dokumen pelengkap", &["380", "705", "740"]),
    field(Dokumen, "nomorDokumen", "Nomor dokumen pelengkap", &["INV-001/2023"]),
    field(Dokumen, "seriDokumen", "Nomor urut/seri dokumen pelengkap", &["1", "2", "3"]),
    date(Dokumen, "tanggalDokumen", "Tanggal dokumen pelengkap (YYYY-MM-DD)", &["2023-06-15"]),
    field(Pengangkut, "kodeBendera", "Kode bendera kapal/pesawat", &["ID", "SG", "MY"]),
    field(Pengangkut, "namaPengangkut", "Nama sarana pengangkut", &["MV. MERATUS"]),
    field(Pengangkut, "nomorPengangkut", "Nomor voyage/flight", &["VOY-001", "GA-123"]),
    field(Pengangkut, "kodeCaraAngkut", "Kode cara pengangkutan", &["1", "4"]),
    field(Pengangkut, "seriPengangkut", "Nomor urut/seri pengangkut dalam dokumen", &["1", "2", "3"]),
];

const INTEGER_FIELDS: &[&str] = &[
    "jumlahKontainer",
    "jumlahTandaPengaman",
    "seri",
    "jumlahKemasan",
    "jumlahPitaCukai",
    "seriBarang",
    "seriBarangDokAsal",
    "seriIjin",
    "tahunPembuatan",
    "seriEntitas",
    "seriKemasan",
    "seriKontainer",
    "seriDokumen",
    "seriPengangkut",
];

const DECIMAL_FIELDS: &[&str] = &[
    "asuransi",
    "biayaPengurang",
    "biayaTambahan",
    "bruto",
    "cif",
    "cifRupiah",
    "diskon",
    "fob",
    "freight",
    "hargaEkspor",
    "hargaPatokan",
    "hargaPenyerahan",
    "hargaPerolehan",
    "hargaSatuan",
    "hjeCukai",
    "isiPerKemasan",
    "jumlahBahanBaku",
    "jumlahDilekatkan",
    "jumlahRealisasi",
    "jumlahSatuan",
    "kapasitasSilinder",
    "ndpbm",
    "netto",
    "nilaiBarang",
    "nilaiDanaSawit",
    "nilaiDevisa",
    "nilaiIncoterm",
    "nilaiMaklon",
    "nilaiTambah",
    "persentaseImpor",
    "saldoAkhir",
    "saldoAwal",
    "tarifCukai",
    "totalDanaSawit",
    "volume",
    "vd",
];

/// Every known field entry, in dictionary order.
pub fn all_fields() -> &'static [FieldMetadata] {
    FIELDS
}

/// Look up a field in one context.
pub fn lookup(context: FieldContext, name: &str) -> Option<&'static FieldMetadata> {
    FIELDS
        .iter()
        .find(|meta| meta.context == context && meta.name == name)
}

/// All entries sharing a field name, across contexts.
pub fn lookup_any(name: &str) -> Vec<&'static FieldMetadata> {
    FIELDS.iter().filter(|meta| meta.name == name).collect()
}

/// JSON type expected for `name`; unknown names are text.
pub fn value_kind(name: &str) -> ValueKind {
    if INTEGER_FIELDS.contains(&name) {
        ValueKind::Integer
    } else if DECIMAL_FIELDS.contains(&name) {
        ValueKind::Decimal
    } else {
        ValueKind::Text
    }
}

/// Convert raw prompt text into the JSON value `name` expects.
///
/// Empty input on a numeric field becomes zero, matching an untouched form
/// input.
pub fn parse_value(name: &str, raw: &str) -> Result<Value> {
    let trimmed = raw.trim();
    match value_kind(name) {
        ValueKind::Text => Ok(Value::String(raw.to_string())),
        ValueKind::Integer if trimmed.is_empty() => Ok(Value::from(0)),
        ValueKind::Decimal if trimmed.is_empty() => Ok(Value::from(0)),
        ValueKind::Integer => trimmed
            .parse::<i64>()
            .map(Value::from)
            .map_err(|_| anyhow!("{name} expects a whole number (got {raw:?})")),
        ValueKind::Decimal => {
            if let Ok(whole) = trimmed.parse::<i64>() {
                return Ok(Value::from(whole));
            }
            let number = trimmed
                .parse::<f64>()
                .map_err(|_| anyhow!("{name} expects a number (got {raw:?})"))?;
            serde_json::Number::from_f64(number)
                .map(Value::Number)
                .ok_or_else(|| anyhow!("{name} expects a finite number (got {raw:?})"))
        }
    }
}
