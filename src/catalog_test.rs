/// Tests for the report catalog
///
/// These cover the catalog-wide invariants (uniform empty-state
/// handling, id round-trips) and spot-check one renderer of each mode.

#[cfg(test)]
mod tests {
    use crate::catalog::{Mode, Report};
    use crate::record::Payload;
    use serde_json::json;

    #[test]
    fn test_every_report_renders_empty_message_on_missing_input() {
        for &report in Report::ALL {
            let out = report.render(&Payload::Missing);
            assert_eq!(out, report.shape().empty, "{:?}", report);
            assert!(!out.contains("---"), "{:?} framed its empty state", report);
        }
    }

    #[test]
    fn test_every_report_renders_empty_message_on_empty_shapes() {
        let empties =
            [Payload::from(json!({})), Payload::from(json!([])), Payload::from(json!(""))];
        for &report in Report::ALL {
            for payload in &empties {
                assert_eq!(report.render(payload), report.shape().empty, "{:?}", report);
            }
        }
    }

    #[test]
    fn test_ids_round_trip_through_lookup() {
        for &report in Report::ALL {
            let id = report.id();
            assert!(!id.is_empty(), "{:?}", report);
            assert_eq!(Report::lookup(&id), Some(report), "{}", id);
        }
        assert_eq!(Report::lookup("tidak_dikenal"), None);
    }

    #[test]
    fn test_report_id_serialization() {
        assert_eq!(Report::PtDetail.id(), "pt_detail");
        assert_eq!(Report::ProdiPenghitungRasio.id(), "prodi_penghitung_rasio");
        assert_eq!(Report::VizMahasiswaKelompokLembaga.id(), "viz_mahasiswa_kelompok_lembaga");

        // serde is the id mechanism, so the JSON form matches
        let json = serde_json::to_string(&Report::SearchPt).unwrap();
        assert_eq!(json, "\"search_pt\"");
        let back: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Report::SearchPt);
    }

    #[test]
    fn test_catalog_covers_all_modes() {
        let mut record = 0;
        let mut list = 0;
        let mut labeled = 0;
        let mut blob = 0;
        let mut flexible = 0;
        for &report in Report::ALL {
            match report.shape().mode {
                Mode::Record => record += 1,
                Mode::List(_) => list += 1,
                Mode::Labeled(_) => labeled += 1,
                Mode::Blob => blob += 1,
                Mode::Flexible => flexible += 1,
            }
        }
        assert_eq!(Report::ALL.len(), 62);
        assert_eq!(labeled, 5);
        assert_eq!(blob, 3);
        assert_eq!(flexible, 1);
        assert_eq!(record, 17);
        assert_eq!(list, 36);
    }

    #[test]
    fn test_labeled_report_keeps_domain_labels() {
        let payload = Payload::from(json!({
            "nama_dosen": "Dr. Siti Rahma",
            "nidn": "0012098901",
        }));
        let out = Report::DosenProfile.render(&payload);

        assert!(out.starts_with("--- Profil Dosen ---"));
        // Hand-authored label, not the humanized "Nidn"
        assert!(out.contains("NIDN"));
        assert!(!out.contains("Nidn"));
        // Declared fields missing from the record fall back per line
        assert!(out.contains("Jabatan Akademik"));
        assert!(out.contains("N/A"));
    }

    #[test]
    fn test_record_report_dumps_keys_generically() {
        let payload = Payload::from(json!({
            "jumlah_dosen": 80,
            "jumlah_mahasiswa": 1600,
        }));
        let out = Report::PtRasio.render(&payload);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "--- Rasio Mahasiswa & Dosen ---");
        assert_eq!(lines[1], "Jumlah Dosen: 80");
        assert_eq!(lines[2], "Jumlah Mahasiswa: 1600");
    }

    #[test]
    fn test_list_report_projects_declared_fields() {
        let payload = Payload::from(json!([
            {"status_keaktifan": "Aktif", "jumlah_dosen": 120, "diabaikan": true},
            {"status_keaktifan": "Cuti"},
        ]));
        let out = Report::VizDosenKeaktifan.render(&payload);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[1], "1. Status Keaktifan: Aktif, Jumlah Dosen: 120");
        assert_eq!(lines[2], "2. Status Keaktifan: Cuti, Jumlah Dosen: N/A");
    }

    #[test]
    fn test_blob_reports_use_their_own_label() {
        let payload = Payload::from(json!("c2FtcGxl"));

        let logo = Report::PtLogo.render(&payload);
        assert!(logo.starts_with("Data Logo (base64) diterima."));

        let sarpras = Report::PtSarprasBlob.render(&payload);
        assert!(sarpras.starts_with("Data Blob Sarpras (base64) diterima."));

        let prodi = Report::ProdiLogo.render(&payload);
        assert!(prodi.starts_with("Data Logo Prodi (base64) diterima."));
    }

    #[test]
    fn test_flexible_report_accepts_both_shapes() {
        let as_list = Payload::from(json!([
            {"rasio": "1:20"},
            {"rasio": "1:25"},
        ]));
        let out = Report::ProdiPenghitungRasio.render(&as_list);
        assert!(out.contains("1. Data:"));
        assert!(out.contains("2. Data:"));
        assert!(out.contains("   Rasio: 1:20"));

        let as_record = Payload::from(json!({"rasio": "1:20"}));
        let out = Report::ProdiPenghitungRasio.render(&as_record);
        assert!(out.starts_with("--- Penghitung Rasio Prodi ---"));
        assert!(out.contains("Rasio: 1:20"));
        assert!(!out.contains("Data:"));
    }

    #[test]
    fn test_mismatched_payload_is_treated_as_missing() {
        // A list where a single record is expected, and vice versa
        let list = Payload::from(json!([{"a": 1}]));
        assert_eq!(Report::PtRasio.render(&list), Report::PtRasio.shape().empty);
        assert_eq!(Report::DosenProfile.render(&list), Report::DosenProfile.shape().empty);

        let record = Payload::from(json!({"a": 1}));
        assert_eq!(Report::SearchDosen.render(&record), Report::SearchDosen.shape().empty);

        let text = Payload::from(json!("bukan daftar"));
        assert_eq!(Report::PtProdiList.render(&text), Report::PtProdiList.shape().empty);
    }
}
