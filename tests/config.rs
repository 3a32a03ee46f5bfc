//! Integration tests for `NpConfig` and its use in rendering.

use std::fs;

use nplite::{Array, NpConfig, PrintOptions, RandomConfig, Stack};

#[test]
fn config_default_values() {
    let cfg = NpConfig::default();
    assert_eq!(cfg.print.precision, 8);
    assert_eq!(cfg.random.seed, None);
}

#[test]
fn config_serializes_to_json() {
    let cfg = NpConfig::new(PrintOptions::new(3), RandomConfig::seeded(9));
    let json = serde_json::to_string(&cfg).unwrap();
    assert!(json.contains("precision"));
    assert!(json.contains("seed"));
    let back = NpConfig::from_json_str(&json).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn config_rejects_malformed_json() {
    assert!(NpConfig::from_json_str("{\"print\": {\"precision\": -1}}").is_err());
    assert!(NpConfig::from_json_str("not json").is_err());
}

#[test]
fn config_loads_from_file() {
    let path = std::env::temp_dir().join(format!("nplite_config_{}.json", std::process::id()));
    fs::write(&path, r#"{"print": {"precision": 2}, "random": {"seed": 42}}"#).unwrap();
    let cfg = NpConfig::from_json_file(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(cfg.print.precision, 2);
    assert_eq!(cfg.random.seed, Some(42));
}

#[test]
fn config_missing_file_reports_path() {
    let err = NpConfig::from_json_file("/nonexistent/nplite.json").unwrap_err();
    assert!(format!("{:#}", err).contains("/nonexistent/nplite.json"));
}

#[test]
fn print_options_drive_rendering() {
    let opts = PrintOptions::new(1);
    let a = Array::from_vec(vec![1.26, 2.0]);
    assert_eq!(a.render(&opts), "[1.3 2.0 ]");
    let s = Stack::from_vecs(vec![vec![1.0], vec![2.0]]).unwrap();
    assert_eq!(s.render(&opts), "[[1.0 ]\n[2.0 ]\n]");
}
