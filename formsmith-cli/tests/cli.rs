use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

const SNAPSHOT: &str = r#"{
  "title": "Signup",
  "pages": [
    {
      "title": "Contact",
      "fields": [
        {"label": "Name", "type": "text", "placeholder": "", "options": [], "required": true},
        {"label": "Plan", "type": "select", "placeholder": "", "options": ["A", "B"], "required": false}
      ]
    },
    {"title": "Consent", "fields": []}
  ]
}"#;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn export_writes_default_file_name() {
    let dir = tempdir().unwrap();
    let snapshot = write_file(&dir, "form.json", SNAPSHOT);

    let mut cmd = cargo_bin_cmd!("formsmith");
    cmd.current_dir(dir.path()).arg("export").arg(&snapshot);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("custom-form.html"));

    let html = read(&dir.path().join("custom-form.html"));
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Signup</title>"));
    assert!(html.contains("Name*"));
}

#[test]
fn export_to_stdout() {
    let dir = tempdir().unwrap();
    let snapshot = write_file(&dir, "form.json", SNAPSHOT);

    let mut cmd = cargo_bin_cmd!("formsmith");
    cmd.arg("export").arg(&snapshot).arg("-o").arg("-");
    cmd.assert()
        .success()
        .stdout(
            predicate::str::starts_with("<!DOCTYPE html>")
                .and(predicate::str::contains("const formData = ")),
        );
}

#[test]
fn export_honors_config_file() {
    let dir = tempdir().unwrap();
    let snapshot = write_file(&dir, "form.json", r#"{"pages": []}"#);
    let config = write_file(
        &dir,
        "formsmith.toml",
        "[form]\ndefault_title = \"Untitled Form\"\n",
    );

    let mut cmd = cargo_bin_cmd!("formsmith");
    cmd.arg("--config")
        .arg(&config)
        .arg("export")
        .arg(&snapshot)
        .arg("-o")
        .arg("-");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("<title>Untitled Form</title>"));
}

#[test]
fn preview_prints_requested_page() {
    let dir = tempdir().unwrap();
    let snapshot = write_file(&dir, "form.json", SNAPSHOT);

    let mut cmd = cargo_bin_cmd!("formsmith");
    cmd.arg("preview").arg(&snapshot).arg("--page").arg("2");
    cmd.assert().success().stdout(
        predicate::str::contains(r#"<h2 class="fs-page-title">Consent</h2>"#)
            .and(predicate::str::contains("Page 2 / 2")),
    );
}

#[test]
fn preview_clamps_past_last_page() {
    let dir = tempdir().unwrap();
    let snapshot = write_file(&dir, "form.json", SNAPSHOT);

    let mut cmd = cargo_bin_cmd!("formsmith");
    cmd.arg("preview").arg(&snapshot).arg("--page").arg("9");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Page 2 / 2"));
}

#[test]
fn replay_prints_snapshot_and_exports() {
    let dir = tempdir().unwrap();
    let script = write_file(
        &dir,
        "script.json",
        r#"[
            {"action": "add-page"},
            {"action": "add-field"},
            {"action": "edit-draft", "edit": {"input": "label", "value": "Email"}},
            {"action": "edit-draft", "edit": {"input": "kind", "value": "email"}},
            {"action": "save-field"},
            {"action": "preview-next"}
        ]"#,
    );
    let output = dir.path().join("replayed.html");

    let mut cmd = cargo_bin_cmd!("formsmith");
    cmd.arg("replay").arg(&script).arg("-o").arg(&output);
    cmd.assert()
        .success()
        .stdout(
            predicate::str::contains(r#""label": "Email""#)
                .and(predicate::str::contains(r#""type": "email""#)),
        )
        .stderr(predicate::str::contains("notice: Form submitted! (Preview)"));

    let html = read(&output);
    assert!(html.contains("Email"));
    assert!(html.contains(r#""type":"email""#));
}

#[test]
fn replay_download_lands_in_downloads_dir() {
    let dir = tempdir().unwrap();
    let script = write_file(
        &dir,
        "script.json",
        r#"[{"action": "add-page"}, {"action": "download-export"}]"#,
    );

    let mut cmd = cargo_bin_cmd!("formsmith");
    cmd.arg("replay")
        .arg(&script)
        .arg("--downloads")
        .arg(dir.path());
    cmd.assert().success();

    assert!(read(&dir.path().join("custom-form.html")).contains("Page 1"));
}

#[test]
fn formats_lists_builtin_formats() {
    let mut cmd = cargo_bin_cmd!("formsmith");
    cmd.arg("formats");
    cmd.assert().success().stdout(
        predicate::str::contains("html")
            .and(predicate::str::contains("json"))
            .and(predicate::str::contains("preview")),
    );
}

#[test]
fn invalid_snapshot_fails_with_message() {
    let dir = tempdir().unwrap();
    let snapshot = write_file(&dir, "form.json", "not json");

    let mut cmd = cargo_bin_cmd!("formsmith");
    cmd.arg("export").arg(&snapshot).arg("-o").arg("-");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("is not a form snapshot"));
}

#[test]
fn missing_snapshot_fails_with_message() {
    let mut cmd = cargo_bin_cmd!("formsmith");
    cmd.arg("preview").arg("/definitely/not/here.json");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
