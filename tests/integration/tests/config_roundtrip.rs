//! Config and catalog save/load roundtrip tests.

use codeteacher_core::config::{CheckConfig, Config};
use codeteacher_core::LanguageCatalog;
use codeteacher_integration_tests::SAMPLE_CATALOG;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_config_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("codeteacher.json5");

    let mut config = Config::default();
    config.harness.base_url = "http://proxy.test:4000".to_string();
    config
        .harness
        .checks
        .push(CheckConfig::new("ruby", "puts 'hi'", "hi").with_label("RB"));
    config.save(&path).unwrap();

    let loaded = Config::load(&path).unwrap();
    assert_eq!(loaded.harness.base_url, "http://proxy.test:4000");
    assert_eq!(loaded.harness.checks.len(), 3);
    assert_eq!(loaded.harness.checks[2].display_label(), "RB");
    assert_eq!(
        loaded.terminal.supported_languages,
        config.terminal.supported_languages
    );
}

#[test]
fn test_config_load_nonexistent() {
    let result = Config::load(Path::new("/nonexistent/codeteacher.json5"));
    assert!(result.is_err());
}

#[test]
fn test_catalog_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lessons.json5");
    std::fs::write(&path, SAMPLE_CATALOG).unwrap();

    let catalog = LanguageCatalog::load(&path).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(
        catalog.topic("python", "Functions").unwrap().prompt,
        "Explain def and return."
    );
}

#[test]
fn test_catalog_parse_invalid() {
    assert!(LanguageCatalog::parse("not valid json").is_err());
}
