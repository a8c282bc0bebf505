//! Typed BC 2.0 import declaration schema.
//!
//! Field order follows the customs schema so generated JSON reads the same as
//! the reference payloads. Every struct tolerates missing keys (zero values).
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Document reference attached to a goods item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BarangDokumen {
    pub seri_dokumen: String,
}

/// Tariff line attached to a goods item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BarangTarif {
    pub jumlah_satuan: f64,
    pub kode_fasilitas_tarif: String,
    pub kode_jenis_pungutan: String,
    pub kode_jenis_tarif: String,
    pub nilai_bayar: f64,
    pub nilai_fasilitas: f64,
    pub seri_barang: i64,
    pub tarif: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tarif_fasilitas: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jumlah_kemasan: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kode_kemasan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kode_komoditi_cukai: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kode_satuan_barang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kode_sub_komoditi_cukai: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nilai_sudah_dilunasi: Option<f64>,
}

/// Voluntary declaration line attached to a goods item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BarangVd {
    pub jenis_tarif: String,
    pub tarif: f64,
    pub nilai_barang: f64,
    pub nilai_bayar: f64,
    pub kode_fasilitas: String,
    pub nilai_fasilitas: f64,
}

/// Goods item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Barang {
    pub asuransi: f64,
    pub bruto: f64,
    pub cif: f64,
    pub cif_rupiah: f64,
    pub diskon: f64,
    pub fob: f64,
    pub freight: f64,
    pub harga_ekspor: f64,
    pub harga_patokan: f64,
    pub harga_penyerahan: f64,
    pub harga_perolehan: f64,
    pub harga_satuan: f64,
    pub hje_cukai: f64,
    pub isi_per_kemasan: f64,
    pub jumlah_bahan_baku: f64,
    pub jumlah_dilekatkan: f64,
    pub jumlah_kemasan: i64,
    pub jumlah_pita_cukai: i64,
    pub jumlah_realisasi: f64,
    pub jumlah_satuan: f64,
    pub kapasitas_silinder: f64,
    pub kode_jenis_kemasan: String,
    pub kode_kondisi_barang: String,
    pub kode_negara_asal: String,
    pub kode_satuan_barang: String,
    pub merk: String,
    pub ndpbm: f64,
    pub netto: f64,
    pub nilai_barang: f64,
    pub nilai_dana_sawit: f64,
    pub nilai_devisa: f64,
    pub nilai_tambah: f64,
    pub pernyataan_lartas: String,
    pub persentase_impor: f64,
    pub pos_tarif: String,
    pub saldo_akhir: f64,
    pub saldo_awal: f64,
    pub seri_barang: i64,
    pub seri_barang_dok_asal: i64,
    pub seri_ijin: i64,
    pub tahun_pembuatan: i64,
    pub tarif_cukai: f64,
    pub tipe: String,
    pub uraian: String,
    pub volume: f64,
    pub barang_dokumen: Vec<BarangDokumen>,
    pub barang_tarif: Vec<BarangTarif>,
    pub barang_vd: Vec<BarangVd>,
    pub barang_spek_khusus: Vec<Value>,
    pub barang_pemilik: Vec<Value>,
}

impl Default for Barang {
    fn default() -> Self {
        Self {
            asuransi: 0.0,
            bruto: 0.0,
            cif: 0.0,
            cif_rupiah: 0.0,
            diskon: 0.0,
            fob: 0.0,
            freight: 0.0,
            harga_ekspor: 0.0,
            harga_patokan: 0.0,
            harga_penyerahan: 0.0,
            harga_perolehan: 0.0,
            harga_satuan: 0.0,
            hje_cukai: 0.0,
            isi_per_kemasan: 0.0,
            jumlah_bahan_baku: 0.0,
            jumlah_dilekatkan: 0.0,
            jumlah_kemasan: 1,
            jumlah_pita_cukai: 0,
            jumlah_realisasi: 0.0,
            jumlah_satuan: 0.0,
            kapasitas_silinder: 0.0,
            kode_jenis_kemasan: String::new(),
            kode_kondisi_barang: String::new(),
            kode_negara_asal: String::new(),
            kode_satuan_barang: String::new(),
            merk: String::new(),
            ndpbm: 0.0,
            netto: 0.0,
            nilai_barang: 0.0,
            nilai_dana_sawit: 0.0,
            nilai_devisa: 0.0,
            nilai_tambah: 0.0,
            pernyataan_lartas: "Y".to_string(),
            persentase_impor: 0.0,
            pos_tarif: String::new(),
            saldo_akhir: 0.0,
            saldo_awal: 0.0,
            seri_barang: 0,
            seri_barang_dok_asal: 0,
            seri_ijin: 0,
            tahun_pembuatan: 0,
            tarif_cukai: 0.0,
            tipe: String::new(),
            uraian: String::new(),
            volume: 0.0,
            barang_dokumen: Vec::new(),
            barang_tarif: Vec::new(),
            barang_vd: Vec::new(),
            barang_spek_khusus: Vec::new(),
            barang_pemilik: Vec::new(),
        }
    }
}

/// Party to the declaration (importer, owner, seller, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Entitas {
    pub alamat_entitas: String,
    pub kode_entitas: String,
    pub nama_entitas: String,
    pub seri_entitas: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kode_jenis_api: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kode_jenis_identitas: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kode_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nib_entitas: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nomor_identitas: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kode_negara: Option<String>,
}

/// Package line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Kemasan {
    pub jumlah_kemasan: i64,
    pub kode_jenis_kemasan: String,
    pub merk_kemasan: String,
    pub seri_kemasan: i64,
}

impl Default for Kemasan {
    fn default() -> Self {
        Self {
            jumlah_kemasan: 1,
            kode_jenis_kemasan: String::new(),
            merk_kemasan: String::new(),
            seri_kemasan: 0,
        }
    }
}

/// Container line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Kontainer {
    pub kode_jenis_kontainer: String,
    pub kode_tipe_kontainer: String,
    pub kode_ukuran_kontainer: String,
    pub nomor_kontainer: String,
    pub seri_kontainer: i64,
}

/// Supporting document line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dokumen {
    pub id_dokumen: String,
    pub kode_dokumen: String,
    pub kode_fasilitas: String,
    pub nomor_dokumen: String,
    pub seri_dokumen: i64,
    pub tanggal_dokumen: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nama_fasilitas: Option<String>,
}

/// Carrier line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pengangkut {
    pub kode_bendera: String,
    pub nama_pengangkut: String,
    pub nomor_pengangkut: String,
    pub kode_cara_angkut: String,
    pub seri_pengangkut: i64,
}

/// Complete BC 2.0 declaration payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Declaration {
    pub asal_data: String,
    pub asuransi: f64,
    pub biaya_pengurang: f64,
    pub biaya_tambahan: f64,
    pub bruto: f64,
    pub cif: f64,
    pub disclaimer: String,
    pub flag_vd: String,
    pub fob: f64,
    pub freight: f64,
    pub harga_penyerahan: f64,
    pub id_pengguna: String,
    pub jabatan_ttd: String,
    pub jumlah_kontainer: i64,
    pub jumlah_tanda_pengaman: i64,
    pub kode_asuransi: String,
    pub kode_cara_bayar: String,
    pub kode_dokumen: String,
    pub kode_incoterm: String,
    pub kode_jenis_impor: String,
    pub kode_jenis_nilai: String,
    pub kode_jenis_prosedur: String,
    pub kode_kantor: String,
    pub kode_pel_muat: String,
    pub kode_pel_transit: String,
    pub kode_pel_tujuan: String,
    pub kode_tps: String,
    pub kode_tutup_pu: String,
    pub kode_valuta: String,
    pub kota_ttd: String,
    pub nama_ttd: String,
    pub ndpbm: f64,
    pub netto: f64,
    pub nilai_barang: f64,
    pub nilai_incoterm: f64,
    pub nilai_maklon: f64,
    pub nomor_aju: String,
    pub nomor_bc11: String,
    pub pos_bc11: String,
    pub seri: i64,
    pub sub_pos_bc11: String,
    pub tanggal_aju: String,
    pub tanggal_bc11: String,
    pub tanggal_tiba: String,
    pub tanggal_ttd: String,
    pub total_dana_sawit: f64,
    pub volume: f64,
    pub vd: f64,
    pub barang: Vec<Barang>,
    pub entitas: Vec<Entitas>,
    pub kemasan: Vec<Kemasan>,
    pub kontainer: Vec<Kontainer>,
    pub dokumen: Vec<Dokumen>,
    pub pengangkut: Vec<Pengangkut>,
}
