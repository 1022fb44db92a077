use sqlmaker::commands::init;
use sqlmaker::config::CONFIG_FILE_NAME;
use sqlmaker::{Config, Locale};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_init_writes_default_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let path = init::handle_init(temp_dir.path(), Locale::Ko, false).unwrap();
    assert_eq!(path, temp_dir.path().join(CONFIG_FILE_NAME));

    let config_content = fs::read_to_string(&path).expect("Failed to read config");
    assert!(config_content.contains("locale = \"ko\""));
    assert!(config_content.contains("[layout]"));
    assert!(config_content.contains("[defaults]"));

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config, Config::new(Locale::Ko));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "locale = \"en\"\n").unwrap();

    let result = init::handle_init(temp_dir.path(), Locale::Ko, false);
    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), "locale = \"en\"\n");

    init::handle_init(temp_dir.path(), Locale::Ko, true).unwrap();
    assert_eq!(Config::from_file(&path).unwrap().locale, Locale::Ko);
}

#[test]
fn test_init_missing_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let result = init::handle_init(&temp_dir.path().join("nope"), Locale::En, false);
    assert!(result.is_err());
}
