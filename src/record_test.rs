/// Tests for the record data model
///
/// Covers payload normalization, field lookup fallbacks, and key
/// humanization.

#[cfg(test)]
mod tests {
    use crate::record::*;
    use serde_json::{Value, json};

    #[test]
    fn test_humanize_key() {
        assert_eq!(humanize_key("jumlah_mahasiswa"), "Jumlah Mahasiswa");
        assert_eq!(humanize_key("nama_prodi"), "Nama Prodi");
        assert_eq!(humanize_key("kab_kota_pt"), "Kab Kota Pt");
        assert_eq!(humanize_key("nidn"), "Nidn");
    }

    #[test]
    fn test_humanize_key_is_idempotent() {
        let once = humanize_key("jumlah_mahasiswa");
        assert_eq!(humanize_key(&once), once);

        // No underscores left, so a second pass has nothing to do
        assert_eq!(humanize_key("Jenjang Prodi"), "Jenjang Prodi");
    }

    #[test]
    fn test_payload_from_value() {
        assert_eq!(
            Payload::from(json!({"nama": "ITB"})),
            Payload::Record(json!({"nama": "ITB"}).as_object().cloned().unwrap())
        );
        assert_eq!(Payload::from(json!([1, 2])), Payload::List(vec![json!(1), json!(2)]));
        assert_eq!(Payload::from(json!("aGVsbG8=")), Payload::Text("aGVsbG8=".to_string()));
    }

    #[test]
    fn test_payload_from_scalar_is_missing() {
        // Anything the retrieval layer hands over that is not an
        // object, array, or string is normalized to absence
        assert_eq!(Payload::from(Value::Null), Payload::Missing);
        assert_eq!(Payload::from(json!(42)), Payload::Missing);
        assert_eq!(Payload::from(json!(true)), Payload::Missing);
        assert_eq!(Payload::from(None::<Value>), Payload::Missing);
    }

    #[test]
    fn test_payload_is_empty() {
        assert!(Payload::Missing.is_empty());
        assert!(Payload::Record(Record::new()).is_empty());
        assert!(Payload::List(Vec::new()).is_empty());
        assert!(Payload::Text(String::new()).is_empty());

        assert!(!Payload::from(json!({"a": 1})).is_empty());
        assert!(!Payload::from(json!([1])).is_empty());
        assert!(!Payload::from(json!("x")).is_empty());
    }

    #[test]
    fn test_field_or_na() {
        let record = json!({
            "nama": "Informatika",
            "jumlah": 120,
            "akreditasi": null,
        });
        let record = record.as_object().unwrap();

        assert_eq!(field_or_na(record, "nama"), "Informatika");
        assert_eq!(field_or_na(record, "jumlah"), "120");
        // Null and missing degrade to the same marker
        assert_eq!(field_or_na(record, "akreditasi"), NOT_AVAILABLE);
        assert_eq!(field_or_na(record, "tidak_ada"), NOT_AVAILABLE);
    }

    #[test]
    fn test_item_field_on_non_object() {
        assert_eq!(item_field(&json!("just a string"), "nama"), NOT_AVAILABLE);
        assert_eq!(item_field(&json!(7), "nama"), NOT_AVAILABLE);
        assert_eq!(item_field(&json!({"nama": "UI"}), "nama"), "UI");
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&json!("teks")), "teks");
        assert_eq!(display_value(&json!(3.5)), "3.5");
        assert_eq!(display_value(&json!(false)), "false");
        assert_eq!(display_value(&Value::Null), NOT_AVAILABLE);
        // Structured values stringify as compact JSON
        assert_eq!(display_value(&json!({"a": 1})), "{\"a\":1}");
        assert_eq!(display_value(&json!([1, 2])), "[1,2]");
    }
}
