use sqlmaker::config::{Locale, CONFIG_FILE_NAME};
use sqlmaker::{Config, FragmentBuilder, GenerateRequest, Operation, RequestValidator};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_loading() {
    let config = Config::from_file("tests/fixtures/sqlmaker.toml").unwrap();
    assert_eq!(config.locale, Locale::Ko);
    assert_eq!(config.layout.indent, 4);
    assert_eq!(config.defaults.result_type, "hashmap");
    assert!(config.defaults.require_statement_id);
    assert_eq!(config.messages().missing_set, "Nothing to update.");
    assert_eq!(config.messages().missing_columns, "칼럼 명을 입력해주세요.");
}

#[test]
fn test_config_missing_file() {
    let result = Config::from_file("nonexistent.toml");
    assert!(result.is_err());
}

#[test]
fn test_config_invalid_toml() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "[layout]\nindent = \"wide\"\n").unwrap();
    assert!(Config::from_file(&path).is_err());
}

#[test]
fn test_discover_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::discover(None, temp_dir.path()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_discover_prefers_file_in_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(CONFIG_FILE_NAME),
        "[layout]\nindent = 3\n",
    )
    .unwrap();
    let config = Config::discover(None, temp_dir.path()).unwrap();
    assert_eq!(config.layout.indent, 3);
    assert_eq!(config.locale, Locale::En);
}

#[test]
fn test_discover_explicit_path_must_exist() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.toml");
    assert!(Config::discover(Some(missing.as_path()), temp_dir.path()).is_err());
}

#[test]
fn test_fixture_config_drives_builder_and_validator() {
    let config = Config::from_file("tests/fixtures/sqlmaker.toml").unwrap();
    let request = GenerateRequest::new(Operation::Select, "user").columns(["id"]);

    let err = RequestValidator::new(&config).validate(&request).unwrap_err();
    assert_eq!(err.to_string(), "MyBatis Statement ID를 입력해주세요.");

    let sql = FragmentBuilder::new(&config).build(&request.id("findAll"));
    assert_eq!(
        sql,
        "<select id=\"findAll\" resultType=\"hashmap\">\n    SELECT id\n    FROM user\n</select>"
    );
}
