//! Domain report catalog - every renderer shape as data.
//!
//! Each record shape the retrieval layer can hand over maps to one
//! `Report` variant. A variant carries a fixed `Shape` (title,
//! empty-state message, rendering mode) and delegates to the generic
//! primitives in `blocks`; `Report::render` is the single dispatch
//! point. No entry calls another entry and no state is shared between
//! calls.

use crate::blocks;
use crate::record::Payload;
use lazy_static::lazy_static;
use log::debug;
use std::collections::HashMap;

/// How a report's payload is turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Generic key/value dump of a single record.
    Record,
    /// Numbered projection of the declared fields over a record list.
    List(&'static [&'static str]),
    /// Hand-labeled single-record block: (label, field) pairs in
    /// display order.
    Labeled(&'static [(&'static str, &'static str)]),
    /// Length/preview line for an undecoded base64 payload; the shape
    /// title is the noun spliced into that line.
    Blob,
    /// Accepts either a single record (key/value dump) or a record
    /// list (numbered section dumps). Only the prodi ratio counter
    /// legitimately arrives in both shapes.
    Flexible,
}

/// Fixed descriptor binding one catalog entry to the generic
/// primitives. Descriptors are baked-in data: no lifecycle, no runtime
/// parameters beyond the payload.
#[derive(Debug, Clone, Copy)]
pub struct Shape {
    pub title: &'static str,
    pub empty: &'static str,
    pub mode: Mode,
}

const fn record_shape(title: &'static str, empty: &'static str) -> Shape {
    Shape { title, empty, mode: Mode::Record }
}

const fn list_shape(title: &'static str, empty: &'static str, fields: &'static [&'static str]) -> Shape {
    Shape { title, empty, mode: Mode::List(fields) }
}

const fn labeled_shape(
    title: &'static str,
    empty: &'static str,
    labels: &'static [(&'static str, &'static str)],
) -> Shape {
    Shape { title, empty, mode: Mode::Labeled(labels) }
}

const fn blob_shape(title: &'static str, empty: &'static str) -> Shape {
    Shape { title, empty, mode: Mode::Blob }
}

const fn flexible_shape(title: &'static str, empty: &'static str) -> Shape {
    Shape { title, empty, mode: Mode::Flexible }
}

//
// Hand-authored label tables for the profile reports
//

const PT_DETAIL_LABELS: &[(&str, &str)] = &[
    ("Nama PT", "nama_pt"),
    ("Singkatan PT", "nm_singkat"),
    ("Kode PT", "kode_pt"),
    ("Alamat", "alamat"),
    ("Kota/Kab", "kab_kota_pt"),
    ("Provinsi", "provinsi_pt"),
    ("Website", "website"),
    ("Email", "email"),
    ("Telepon", "no_tel"),
    ("Status", "status_pt"),
    ("Akreditasi", "akreditasi_pt"),
];

const DOSEN_PROFILE_LABELS: &[(&str, &str)] = &[
    ("Nama Dosen", "nama_dosen"),
    ("NIDN", "nidn"),
    ("Jenis Kelamin", "jenis_kelamin"),
    ("Jabatan Akademik", "jabatan_akademik"),
    ("Pendidikan Tertinggi", "pendidikan_tertinggi"),
    ("Status Ikatan Kerja", "status_ikatan_kerja"),
    ("Status Aktivitas", "status_aktivitas"),
    ("Nama PT", "nama_pt"),
    ("Nama Prodi", "nama_prodi"),
];

const MAHASISWA_DETAIL_LABELS: &[(&str, &str)] = &[
    ("Nama", "nama"),
    ("NIM", "nim"),
    ("Jenis Kelamin", "jenis_kelamin"),
    ("Tempat Lahir", "tempat_lahir"),
    ("Tgl. Lahir", "tanggal_lahir"),
    ("Universitas", "nama_pt"),
    ("Program Studi", "prodi"),
    ("Jenjang", "jenjang"),
    ("Tgl. Masuk", "tanggal_masuk"),
    ("Status", "status_saat_ini"),
    ("Nama Ibu", "nama_ibu"),
];

const PRODI_DETAIL_LABELS: &[(&str, &str)] = &[
    ("Nama Prodi", "nama_prodi"),
    ("Jenjang", "jenj_didik"),
    ("Kode Prodi", "kode_prodi"),
    ("Akreditasi", "akreditasi"),
    ("Nama PT", "nama_pt"),
    ("Tanggal Berdiri", "tgl_berdiri"),
    ("Status", "status"),
    ("Email", "email"),
    ("Website", "website"),
];

const PRODI_DESCRIPTION_LABELS: &[(&str, &str)] = &[
    ("Deskripsi Singkat", "deskripsi_singkat"),
    ("Visi", "visi"),
    ("Misi", "misi"),
    ("Kompetensi", "kompetensi"),
    ("Capaian Belajar", "capaian_belajar"),
];

/// Identifier for every report in the catalog.
///
/// Serializes to the snake_case id used in dispatch tables and logs
/// (`"pt_detail"`, `"viz_dosen_keaktifan"`, ...); see
/// [`Report::lookup`] for the reverse direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Report {
    // Perguruan Tinggi
    PtDetail,
    PtProdiList,
    PtLogo,
    PtRasio,
    PtMahasiswaStats,
    PtWaktuStudi,
    PtNameHistories,
    PtCostRange,
    PtGraduationRate,
    PtJumlahProdi,
    PtJumlahMahasiswa,
    PtJumlahDosen,
    PtSarprasFileNames,
    PtSarprasBlob,
    // Dosen
    DosenProfile,
    DosenPenelitian,
    DosenPengabdian,
    DosenKarya,
    DosenPaten,
    DosenStudyHistory,
    DosenTeachingHistory,
    // Mahasiswa
    MahasiswaDetail,
    // Program Studi
    ProdiDetail,
    ProdiDescription,
    ProdiNameHistories,
    ProdiJumlahMahasiswaDosen,
    ProdiCostRange,
    ProdiDayaTampung,
    ProdiRasioDosenMahasiswa,
    ProdiGraduationRate,
    ProdiLogo,
    ProdiHomebase,
    ProdiPenghitungRasio,
    // Statistik nasional
    DosenCountActive,
    MahasiswaCountActive,
    ProdiCount,
    PtCount,
    // Visualisasi
    VizDosenKeaktifan,
    VizDosenBidang,
    VizDosenJenisKelamin,
    VizDosenJenjang,
    VizDosenIkatan,
    VizMahasiswaBidang,
    VizMahasiswaJenisKelamin,
    VizMahasiswaJenjang,
    VizMahasiswaKelompokLembaga,
    VizMahasiswaStatus,
    VizPtBentuk,
    VizPtAkreditasi,
    VizPtKelompokPembina,
    VizPtProvinsi,
    VizProdiJenjang,
    VizProdiAkreditasi,
    VizProdiBidangIlmu,
    VizProdiKelompokPembina,
    // Pencarian
    SearchDosen,
    SearchMahasiswa,
    SearchPt,
    SearchProdi,
    // Data umum
    ContributorList,
    NewsList,
    BidangIlmuProdi,
}

impl Report {
    /// Every catalog entry, in catalog order.
    pub const ALL: &'static [Report] = &[
        Report::PtDetail,
        Report::PtProdiList,
        Report::PtLogo,
        Report::PtRasio,
        Report::PtMahasiswaStats,
        Report::PtWaktuStudi,
        Report::PtNameHistories,
        Report::PtCostRange,
        Report::PtGraduationRate,
        Report::PtJumlahProdi,
        Report::PtJumlahMahasiswa,
        Report::PtJumlahDosen,
        Report::PtSarprasFileNames,
        Report::PtSarprasBlob,
        Report::DosenProfile,
        Report::DosenPenelitian,
        Report::DosenPengabdian,
        Report::DosenKarya,
        Report::DosenPaten,
        Report::DosenStudyHistory,
        Report::DosenTeachingHistory,
        Report::MahasiswaDetail,
        Report::ProdiDetail,
        Report::ProdiDescription,
        Report::ProdiNameHistories,
        Report::ProdiJumlahMahasiswaDosen,
        Report::ProdiCostRange,
        Report::ProdiDayaTampung,
        Report::ProdiRasioDosenMahasiswa,
        Report::ProdiGraduationRate,
        Report::ProdiLogo,
        Report::ProdiHomebase,
        Report::ProdiPenghitungRasio,
        Report::DosenCountActive,
        Report::MahasiswaCountActive,
        Report::ProdiCount,
        Report::PtCount,
        Report::VizDosenKeaktifan,
        Report::VizDosenBidang,
        Report::VizDosenJenisKelamin,
        Report::VizDosenJenjang,
        Report::VizDosenIkatan,
        Report::VizMahasiswaBidang,
        Report::VizMahasiswaJenisKelamin,
        Report::VizMahasiswaJenjang,
        Report::VizMahasiswaKelompokLembaga,
        Report::VizMahasiswaStatus,
        Report::VizPtBentuk,
        Report::VizPtAkreditasi,
        Report::VizPtKelompokPembina,
        Report::VizPtProvinsi,
        Report::VizProdiJenjang,
        Report::VizProdiAkreditasi,
        Report::VizProdiBidangIlmu,
        Report::VizProdiKelompokPembina,
        Report::SearchDosen,
        Report::SearchMahasiswa,
        Report::SearchPt,
        Report::SearchProdi,
        Report::ContributorList,
        Report::NewsList,
        Report::BidangIlmuProdi,
    ];

    /// The fixed shape descriptor for this report.
    pub fn shape(self) -> Shape {
        match self {
            // Perguruan Tinggi
            Report::PtDetail => labeled_shape(
                "Detail Perguruan Tinggi",
                "Detail Perguruan Tinggi tidak ditemukan.",
                PT_DETAIL_LABELS,
            ),
            Report::PtProdiList => list_shape(
                "Daftar Program Studi di PT",
                "Program Studi tidak ditemukan untuk PT ini.",
                &["nama_prodi", "jenjang_prodi", "akreditasi", "jumlah_mahasiswa", "jumlah_dosen"],
            ),
            Report::PtLogo => blob_shape("Logo", "Logo tidak ditemukan."),
            Report::PtRasio => record_shape("Rasio Mahasiswa & Dosen", "Rasio Mahasiswa & Dosen tidak ditemukan."),
            Report::PtMahasiswaStats => {
                record_shape("Statistik Mahasiswa", "Statistik Mahasiswa tidak ditemukan.")
            }
            Report::PtWaktuStudi => list_shape(
                "Rata-rata Waktu Studi PT",
                "Data Waktu Studi tidak ditemukan.",
                &["jenjang", "mean_masa_studi"],
            ),
            Report::PtNameHistories => list_shape(
                "Sejarah Nama Perguruan Tinggi",
                "Sejarah Nama PT tidak ditemukan.",
                &["nama_lama", "tanggal_perubahan"],
            ),
            Report::PtCostRange => {
                record_shape("Kisaran Biaya Kuliah PT", "Kisaran Biaya Kuliah PT tidak ditemukan.")
            }
            Report::PtGraduationRate => {
                record_shape("Tingkat Kelulusan PT", "Tingkat Kelulusan PT tidak ditemukan.")
            }
            Report::PtJumlahProdi => {
                record_shape("Jumlah Program Studi PT", "Jumlah Program Studi PT tidak ditemukan.")
            }
            Report::PtJumlahMahasiswa => {
                record_shape("Jumlah Mahasiswa PT", "Jumlah Mahasiswa PT tidak ditemukan.")
            }
            Report::PtJumlahDosen => record_shape("Jumlah Dosen PT", "Jumlah Dosen PT tidak ditemukan."),
            Report::PtSarprasFileNames => list_shape(
                "Nama File Sarpras PT",
                "Nama File Sarpras tidak ditemukan.",
                &["id_blob", "file_name"],
            ),
            Report::PtSarprasBlob => blob_shape("Blob Sarpras", "Blob Sarpras tidak ditemukan."),

            // Dosen
            Report::DosenProfile => {
                labeled_shape("Profil Dosen", "Profil Dosen tidak ditemukan.", DOSEN_PROFILE_LABELS)
            }
            Report::DosenPenelitian => list_shape(
                "Penelitian Dosen",
                "Penelitian Dosen tidak ditemukan.",
                &["judul_kegiatan", "tahun_kegiatan", "jenis_kegiatan"],
            ),
            Report::DosenPengabdian => list_shape(
                "Pengabdian Dosen",
                "Pengabdian Dosen tidak ditemukan.",
                &["judul_kegiatan", "tahun_kegiatan", "jenis_kegiatan"],
            ),
            Report::DosenKarya => list_shape(
                "Karya Ilmiah Dosen",
                "Karya Ilmiah Dosen tidak ditemukan.",
                &["judul_kegiatan", "tahun_kegiatan", "jenis_kegiatan"],
            ),
            Report::DosenPaten => list_shape(
                "Paten Dosen",
                "Paten Dosen tidak ditemukan.",
                &["judul_kegiatan", "tahun_kegiatan", "jenis_kegiatan"],
            ),
            Report::DosenStudyHistory => list_shape(
                "Riwayat Studi Dosen",
                "Riwayat Studi Dosen tidak ditemukan.",
                &["jenjang", "bidang_studi", "nama_pt", "tahun_lulus"],
            ),
            Report::DosenTeachingHistory => list_shape(
                "Riwayat Mengajar Dosen",
                "Riwayat Mengajar Dosen tidak ditemukan.",
                &["nama_semester", "nama_matkul", "nama_kelas", "nama_pt"],
            ),

            // Mahasiswa
            Report::MahasiswaDetail => labeled_shape(
                "Detail Mahasiswa",
                "Detail Mahasiswa tidak ditemukan.",
                MAHASISWA_DETAIL_LABELS,
            ),

            // Program Studi
            Report::ProdiDetail => labeled_shape(
                "Detail Program Studi",
                "Detail Program Studi tidak ditemukan.",
                PRODI_DETAIL_LABELS,
            ),
            Report::ProdiDescription => labeled_shape(
                "Deskripsi Program Studi",
                "Deskripsi Program Studi tidak ditemukan.",
                PRODI_DESCRIPTION_LABELS,
            ),
            Report::ProdiNameHistories => list_shape(
                "Sejarah Nama Program Studi",
                "Sejarah Nama Program Studi tidak ditemukan.",
                &["nama_lama", "tanggal_perubahan"],
            ),
            Report::ProdiJumlahMahasiswaDosen => record_shape(
                "Jumlah Mahasiswa & Dosen Prodi",
                "Jumlah Mahasiswa & Dosen Prodi tidak ditemukan.",
            ),
            Report::ProdiCostRange => {
                record_shape("Kisaran Biaya Kuliah Prodi", "Kisaran Biaya Kuliah Prodi tidak ditemukan.")
            }
            Report::ProdiDayaTampung => {
                record_shape("Daya Tampung Prodi", "Daya Tampung Prodi tidak ditemukan.")
            }
            Report::ProdiRasioDosenMahasiswa => record_shape(
                "Rasio Dosen Mahasiswa Prodi",
                "Rasio Dosen Mahasiswa Prodi tidak ditemukan.",
            ),
            Report::ProdiGraduationRate => {
                record_shape("Tingkat Kelulusan Prodi", "Tingkat Kelulusan Prodi tidak ditemukan.")
            }
            Report::ProdiLogo => blob_shape("Logo Prodi", "Logo Prodi tidak ditemukan."),
            Report::ProdiHomebase => record_shape("Homebase Prodi", "Homebase Prodi tidak ditemukan."),
            Report::ProdiPenghitungRasio => {
                flexible_shape("Penghitung Rasio Prodi", "Penghitung Rasio Prodi tidak ditemukan.")
            }

            // Statistik nasional
            Report::DosenCountActive => {
                record_shape("Jumlah Dosen Aktif", "Jumlah Dosen Aktif tidak ditemukan.")
            }
            Report::MahasiswaCountActive => {
                record_shape("Jumlah Mahasiswa Aktif", "Jumlah Mahasiswa Aktif tidak ditemukan.")
            }
            Report::ProdiCount => record_shape("Jumlah Program Studi", "Jumlah Program Studi tidak ditemukan."),
            Report::PtCount => {
                record_shape("Jumlah Perguruan Tinggi", "Jumlah Perguruan Tinggi tidak ditemukan.")
            }

            // Visualisasi
            Report::VizDosenKeaktifan => list_shape(
                "Visualisasi Keaktifan Dosen",
                "Data Keaktifan Dosen tidak ditemukan.",
                &["status_keaktifan", "jumlah_dosen"],
            ),
            Report::VizDosenBidang => list_shape(
                "Visualisasi Dosen Berdasarkan Bidang",
                "Data Dosen Berdasarkan Bidang tidak ditemukan.",
                &["bidang", "jumlah_dosen"],
            ),
            Report::VizDosenJenisKelamin => list_shape(
                "Visualisasi Dosen Berdasarkan Jenis Kelamin",
                "Data Dosen Berdasarkan Jenis Kelamin tidak ditemukan.",
                &["jenis_kelamin", "jumlah"],
            ),
            Report::VizDosenJenjang => list_shape(
                "Visualisasi Dosen Berdasarkan Jenjang",
                "Data Dosen Berdasarkan Jenjang tidak ditemukan.",
                &["jenjang_dosen", "jumlah_dosen"],
            ),
            Report::VizDosenIkatan => list_shape(
                "Visualisasi Dosen Berdasarkan Ikatan",
                "Data Dosen Berdasarkan Ikatan tidak ditemukan.",
                &["ikatan_dosen", "jumlah"],
            ),
            Report::VizMahasiswaBidang => list_shape(
                "Visualisasi Mahasiswa Berdasarkan Bidang",
                "Data Mahasiswa Berdasarkan Bidang tidak ditemukan.",
                &["bidang", "jumlah_mhs"],
            ),
            Report::VizMahasiswaJenisKelamin => list_shape(
                "Visualisasi Mahasiswa Berdasarkan Jenis Kelamin",
                "Data Mahasiswa Berdasarkan Jenis Kelamin tidak ditemukan.",
                &["jenis_kelamin", "jumlah_mhs"],
            ),
            Report::VizMahasiswaJenjang => list_shape(
                "Visualisasi Mahasiswa Berdasarkan Jenjang",
                "Data Mahasiswa Berdasarkan Jenjang tidak ditemukan.",
                &["nama_jenjang", "jumlah_mhs"],
            ),
            Report::VizMahasiswaKelompokLembaga => list_shape(
                "Visualisasi Mahasiswa Berdasarkan Kelompok Lembaga",
                "Data Mahasiswa Berdasarkan Kelompok Lembaga tidak ditemukan.",
                &["kelompok_lembaga", "jumlah_mhs"],
            ),
            Report::VizMahasiswaStatus => list_shape(
                "Visualisasi Mahasiswa Berdasarkan Status",
                "Data Mahasiswa Berdasarkan Status tidak ditemukan.",
                &["status_mahasiswa", "jumlah"],
            ),
            Report::VizPtBentuk => list_shape(
                "Visualisasi Perguruan Tinggi Berdasarkan Bentuk",
                "Data Perguruan Tinggi Berdasarkan Bentuk tidak ditemukan.",
                &["bentuk_pt", "jumlah_pt"],
            ),
            Report::VizPtAkreditasi => list_shape(
                "Visualisasi Perguruan Tinggi Berdasarkan Akreditasi",
                "Data Perguruan Tinggi Berdasarkan Akreditasi tidak ditemukan.",
                &["akreditasi", "jumlah_pt"],
            ),
            Report::VizPtKelompokPembina => list_shape(
                "Visualisasi Perguruan Tinggi Berdasarkan Kelompok Pembina",
                "Data Perguruan Tinggi Berdasarkan Kelompok Pembina tidak ditemukan.",
                &["kelompok_pembina", "jumlah_pt"],
            ),
            Report::VizPtProvinsi => list_shape(
                "Visualisasi Perguruan Tinggi Berdasarkan Provinsi",
                "Data Perguruan Tinggi Berdasarkan Provinsi tidak ditemukan.",
                &["provinsi", "jumlah_pt"],
            ),
            Report::VizProdiJenjang => list_shape(
                "Visualisasi Program Studi Berdasarkan Jenjang",
                "Data Program Studi Berdasarkan Jenjang tidak ditemukan.",
                &["jenjang_prodi", "jumlah_prodi"],
            ),
            Report::VizProdiAkreditasi => list_shape(
                "Visualisasi Program Studi Berdasarkan Akreditasi",
                "Data Program Studi Berdasarkan Akreditasi tidak ditemukan.",
                &["akreditasi_prodi", "jumlah_prodi"],
            ),
            Report::VizProdiBidangIlmu => list_shape(
                "Visualisasi Program Studi Berdasarkan Bidang Ilmu",
                "Data Program Studi Berdasarkan Bidang Ilmu tidak ditemukan.",
                &["bidang_ilmu", "jumlah_prodi"],
            ),
            Report::VizProdiKelompokPembina => list_shape(
                "Visualisasi Program Studi Berdasarkan Kelompok Pembina",
                "Data Program Studi Berdasarkan Kelompok Pembina tidak ditemukan.",
                &["kelompok_pembina", "jumlah_prodi"],
            ),

            // Pencarian
            Report::SearchDosen => list_shape(
                "Dosen",
                "Tidak ada Dosen yang ditemukan.",
                &["nama", "nidn", "nama_pt", "nama_prodi"],
            ),
            Report::SearchMahasiswa => list_shape(
                "Mahasiswa",
                "Tidak ada Mahasiswa yang ditemukan.",
                &["nama", "nim", "nama_pt", "nama_prodi"],
            ),
            Report::SearchPt => list_shape(
                "Perguruan Tinggi",
                "Tidak ada Perguruan Tinggi yang ditemukan.",
                &["nama", "kode", "nama_singkat"],
            ),
            Report::SearchProdi => list_shape(
                "Program Studi",
                "Tidak ada Program Studi yang ditemukan.",
                &["nama", "jenjang", "pt"],
            ),

            // Data umum
            Report::ContributorList => list_shape(
                "Daftar Kontributor",
                "Daftar Kontributor tidak ditemukan.",
                &["name", "role", "universitas", "linkedin"],
            ),
            Report::NewsList => list_shape(
                "Daftar Berita",
                "Daftar Berita tidak ditemukan.",
                &["title", "date", "url"],
            ),
            Report::BidangIlmuProdi => list_shape(
                "Daftar Bidang Ilmu Program Studi",
                "Daftar Bidang Ilmu Prodi tidak ditemukan.",
                &["nama"],
            ),
        }
    }

    /// Render a payload through this report's shape.
    ///
    /// Absent or empty input yields the shape's empty-state message and
    /// nothing else. A payload whose shape does not fit the report's
    /// mode is treated the same way; no input can make this fail.
    pub fn render(self, payload: &Payload) -> String {
        let shape = self.shape();
        if payload.is_empty() {
            return shape.empty.to_string();
        }

        match (shape.mode, payload) {
            (Mode::Record, Payload::Record(record)) => blocks::record_block(shape.title, shape.empty, Some(record)),
            (Mode::Labeled(labels), Payload::Record(record)) => {
                blocks::labeled_block(shape.title, shape.empty, labels, Some(record))
            }
            (Mode::List(fields), Payload::List(items)) => blocks::list_block(shape.title, fields, items),
            (Mode::Blob, Payload::Text(text)) => blocks::blob_block(shape.title, shape.empty, Some(text)),
            (Mode::Flexible, Payload::Record(record)) => {
                blocks::record_block(shape.title, shape.empty, Some(record))
            }
            (Mode::Flexible, Payload::List(items)) => blocks::record_sections_block(shape.title, items),
            _ => {
                debug!("{:?}: payload does not fit {:?}, rendering as missing", self, shape.mode);
                shape.empty.to_string()
            }
        }
    }

    /// Snake_case id for this report (e.g. `"pt_detail"`), the inverse
    /// of [`Report::lookup`].
    pub fn id(self) -> String {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::String(id)) => id,
            // A fieldless enum always serializes to its rename string
            _ => String::new(),
        }
    }

    /// Resolve a snake_case renderer id back to its report.
    pub fn lookup(id: &str) -> Option<Report> {
        REPORT_INDEX.get(id).copied()
    }
}

lazy_static! {
    /// Index from snake_case id to report, built once from `Report::ALL`.
    static ref REPORT_INDEX: HashMap<String, Report> =
        Report::ALL.iter().map(|&report| (report.id(), report)).collect();
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;
