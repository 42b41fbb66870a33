//! Integration tests for the listfmt CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn listfmt() -> Command {
    let mut cmd = Command::cargo_bin("listfmt").unwrap();
    cmd.env_remove("LISTFMT_FORMAT")
        .env_remove("LISTFMT_BINDING")
        .env_remove("LISTFMT_CONFIG");
    cmd
}

#[test]
fn test_render_markdown_default() {
    listfmt()
        .args(["render", "Omar", "Ahmed"])
        .assert()
        .success()
        .stdout("* Omar\n* Ahmed\n");
}

#[test]
fn test_render_html() {
    listfmt()
        .args(["render", "-f", "html", "Omar", "Ahmed"])
        .assert()
        .success()
        .stdout("<ul>\n <li>Omar</li>\n <li>Ahmed</li>\n</ul>\n");
}

#[test]
fn test_render_empty_list() {
    listfmt()
        .args(["render", "--format", "html"])
        .assert()
        .success()
        .stdout("<ul>\n</ul>\n");

    listfmt()
        .args(["render", "--format", "markdown"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_render_static_binding() {
    listfmt()
        .args(["render", "-f", "html", "-b", "static", "x"])
        .assert()
        .success()
        .stdout("<ul>\n <li>x</li>\n</ul>\n");
}

#[test]
fn test_render_then_switches_format() {
    listfmt()
        .args(["render", "--then", "html", "x"])
        .assert()
        .success()
        .stdout("* x\n<ul>\n <li>x</li>\n</ul>\n");
}

#[test]
fn test_then_with_static_binding_fails() {
    listfmt()
        .args(["render", "-b", "static", "--then", "html", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--then requires dynamic binding"));
}

#[test]
fn test_format_from_environment() {
    listfmt()
        .env("LISTFMT_FORMAT", "html")
        .args(["render", "x"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<ul>\n"));
}

#[test]
fn test_unknown_format_rejected() {
    listfmt()
        .args(["render", "-f", "rtf", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown output format 'rtf'"));
}

#[test]
fn test_render_from_stdin() {
    listfmt()
        .args(["render", "--stdin", "first", ""])
        .write_stdin("second\n\nthird\n")
        .assert()
        .success()
        .stdout("* first\n* \n* second\n* \n* third\n");
}

#[test]
fn test_config_file_sets_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("listfmt.toml");
    fs::write(&config_path, "[output]\nformat = \"html\"\n").unwrap();

    listfmt()
        .arg("--config")
        .arg(&config_path)
        .args(["render", "x"])
        .assert()
        .success()
        .stdout("<ul>\n <li>x</li>\n</ul>\n");

    // Command-line flag wins over the file
    listfmt()
        .arg("--config")
        .arg(&config_path)
        .args(["render", "-f", "md", "x"])
        .assert()
        .success()
        .stdout("* x\n");
}

#[test]
fn test_missing_config_file() {
    listfmt()
        .args(["--config", "nonexistent.toml", "render", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_missing_config_only_affects_render() {
    listfmt()
        .env("LISTFMT_CONFIG", "nonexistent.toml")
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("markdown"));

    listfmt()
        .env("LISTFMT_CONFIG", "nonexistent.toml")
        .arg("generate-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[output]"));

    listfmt()
        .env("LISTFMT_CONFIG", "nonexistent.toml")
        .args(["render", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_config_values_ignore_case() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("listfmt.toml");
    fs::write(&config_path, "[output]\nformat = \"HTML\"\n").unwrap();

    listfmt()
        .arg("--config")
        .arg(&config_path)
        .args(["render", "x"])
        .assert()
        .success()
        .stdout("<ul>\n <li>x</li>\n</ul>\n");
}

#[test]
fn test_generate_config_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("generated.toml");

    listfmt()
        .args(["generate-config", "-f", "html", "-o"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration template generated"));

    listfmt()
        .arg("--config")
        .arg(&config_path)
        .args(["render", "x"])
        .assert()
        .success()
        .stdout("<ul>\n <li>x</li>\n</ul>\n");
}

#[test]
fn test_list_formats() {
    listfmt()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("markdown"))
        .stdout(predicate::str::contains("html"));
}

#[test]
fn test_help_command() {
    listfmt()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("listfmt"));
}
