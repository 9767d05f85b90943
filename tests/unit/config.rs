use super::*;

#[test]
fn defaults_point_at_bundled_layout() {
    let cfg = NotecardConfig::default();
    assert_eq!(cfg.input, PathBuf::from("data-teachers_2025.csv"));
    assert_eq!(cfg.response_column, "Response");
    assert_eq!(cfg.output_dir, PathBuf::from("images/out"));
    assert_eq!(cfg.file_prefix, "notecards_");
    assert_eq!(cfg.text.caption, "Thank you");
    assert_eq!(cfg.text.handle, "@wrhs_smileproject");
    cfg.validate().unwrap();
}

#[test]
fn partial_json_keeps_defaults() {
    let cfg: NotecardConfig = serde_json::from_str(
        r#"{ "response_column": "Message", "text": { "handle": "@someone" } }"#,
    )
    .unwrap();
    assert_eq!(cfg.response_column, "Message");
    assert_eq!(cfg.text.handle, "@someone");
    assert_eq!(cfg.text.caption, "Thank you");
    assert_eq!(cfg.assets, AssetPaths::default());
}

#[test]
fn unknown_keys_are_rejected() {
    let res: Result<NotecardConfig, _> = serde_json::from_str(r#"{ "columns": 3 }"#);
    assert!(res.is_err());
}

#[test]
fn validate_rejects_bad_values() {
    let cfg = NotecardConfig {
        response_column: "  ".to_string(),
        ..NotecardConfig::default()
    };
    assert!(cfg.validate().is_err());

    let cfg = NotecardConfig {
        file_prefix: "../escape".to_string(),
        ..NotecardConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn from_json_file_reads_and_validates() {
    let dir = PathBuf::from("target").join("config_unit");
    std::fs::create_dir_all(&dir).unwrap();

    let good = dir.join("good.json");
    std::fs::write(&good, r#"{ "output_dir": "sheets" }"#).unwrap();
    let cfg = NotecardConfig::from_json_file(&good).unwrap();
    assert_eq!(cfg.output_dir, PathBuf::from("sheets"));

    let bad = dir.join("bad.json");
    std::fs::write(&bad, r#"{ "response_column": "" }"#).unwrap();
    assert!(NotecardConfig::from_json_file(&bad).is_err());

    assert!(NotecardConfig::from_json_file(&dir.join("missing.json")).is_err());
}
