use std::fs;
use valet::config::Config;

#[test]
fn save_and_load_yaml_roundtrip() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = tmp_dir.path().join("config.yaml");

    let mut cfg = Config::default();
    cfg.report.sort_by_name = true;
    cfg.journal.file = "movements.yaml".to_string();
    cfg.logging.file = path.with_extension("log").to_string_lossy().to_string();

    cfg.save_to_file(&path).unwrap();
    let loaded = Config::from_file(&path).unwrap();

    assert!(loaded.report.sort_by_name);
    assert_eq!(loaded.journal.file, "movements.yaml");
    assert_eq!(loaded.logging.file, cfg.logging.file);
}

#[test]
fn config_validation_errors() {
    let mut cfg = Config::default();

    // Unknown log level
    cfg.logging.level = "LOUD".to_string();
    assert!(cfg.validate().is_err());

    // Zero rotation backups
    cfg = Config::default();
    cfg.logging.backup_count = 0;
    assert!(cfg.validate().is_err());

    // Blank journal path
    cfg = Config::default();
    cfg.journal.file = "  ".to_string();
    assert!(cfg.validate().is_err());

    assert!(Config::default().validate().is_ok());
}

#[test]
fn partial_yaml_falls_back_to_defaults() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    fs::write(tmp.path(), b"report:\n  sort_by_name: true\n").unwrap();

    let cfg = Config::from_file(tmp.path()).unwrap();
    assert!(cfg.report.sort_by_name);
    assert_eq!(cfg.logging.level, "INFO");
    assert_eq!(cfg.report.indent, "\t");
}

#[test]
fn from_file_with_invalid_yaml_fails() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    fs::write(tmp.path(), b"bad: [unclosed").unwrap();
    let err = Config::from_file(tmp.path()).unwrap_err();
    let msg = format!("{}", err);
    assert!(msg.contains("Serialization error"));
}
