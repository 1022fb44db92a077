use assert_cmd::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn sqlmaker(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sqlmaker").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn test_help_text_is_comprehensive() {
    let mut cmd = Command::cargo_bin("sqlmaker").unwrap();
    let result = cmd.arg("--help").output().unwrap();

    let output_str = String::from_utf8(result.stdout).unwrap();
    assert!(output_str.contains("MyBatis"), "Should mention MyBatis");
    assert!(output_str.contains("generate"), "Should list generate command");
    assert!(output_str.contains("init"), "Should list init command");
    assert!(result.status.success(), "Help should succeed");
}

#[test]
fn test_cli_version_command() {
    let mut cmd = Command::cargo_bin("sqlmaker").unwrap();
    let result = cmd.arg("--version").output().unwrap();

    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("sqlmaker"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_generate_select_prints_statement() {
    let temp_dir = TempDir::new().unwrap();
    let result = sqlmaker(&temp_dir)
        .args(["generate", "select", "--table", "user", "--columns", "id, name"])
        .output()
        .unwrap();

    assert!(result.status.success());
    assert_eq!(
        String::from_utf8(result.stdout).unwrap(),
        "<select id=\"selectuser\" resultType=\"map\">\n  SELECT id, name\n  FROM user\n</select>\n"
    );
}

#[test]
fn test_generate_reads_config_from_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("sqlmaker.toml"), "[layout]\nindent = 4\n").unwrap();

    let result = sqlmaker(&temp_dir)
        .args(["generate", "delete", "-t", "user", "-w", "id = #{id}"])
        .output()
        .unwrap();

    assert!(result.status.success());
    let stdout = String::from_utf8(result.stdout).unwrap();
    assert!(stdout.contains("        <if test=\"id != null and id != ''\">\n"));
    assert!(stdout.contains("            id = #{id}\n"));
}

#[test]
fn test_generate_without_table_fails() {
    let temp_dir = TempDir::new().unwrap();
    let result = sqlmaker(&temp_dir).args(["generate", "select"]).output().unwrap();

    assert!(!result.status.success());
    assert!(result.stdout.is_empty(), "No SQL should be printed");
    let stderr = String::from_utf8(result.stderr).unwrap();
    assert!(stderr.contains("Enter a table name to generate MyBatis SQL."));
}

#[test]
fn test_generate_unsupported_operation_with_korean_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("ko.toml");
    fs::write(&config, "locale = \"ko\"\n").unwrap();

    let result = sqlmaker(&temp_dir)
        .args(["--config", config.to_str().unwrap()])
        .args(["generate", "merge", "--table", "user"])
        .output()
        .unwrap();

    assert!(!result.status.success());
    let stderr = String::from_utf8(result.stderr).unwrap();
    assert!(stderr.contains("지원하지 않는 타입입니다."));
}

#[test]
fn test_init_then_generate() {
    let temp_dir = TempDir::new().unwrap();
    let result = sqlmaker(&temp_dir).args(["init", "--locale", "ko"]).output().unwrap();
    assert!(result.status.success());
    assert!(temp_dir.path().join("sqlmaker.toml").exists());

    let result = sqlmaker(&temp_dir)
        .args(["generate", "update", "--table", "user"])
        .output()
        .unwrap();
    assert!(!result.status.success());
    let stderr = String::from_utf8(result.stderr).unwrap();
    assert!(stderr.contains("SET 값을 입력해주세요."));
}

#[test]
fn test_error_messages_are_helpful() {
    let mut cmd = Command::cargo_bin("sqlmaker").unwrap();
    let result = cmd.arg("invalid-command").output().unwrap();

    let error_str = String::from_utf8(result.stderr).unwrap();
    assert!(error_str.contains("error"), "Should have error indicator");
    assert!(!result.status.success(), "Invalid command should fail");
}
