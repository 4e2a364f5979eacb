use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sketchpad_cmd() -> Command {
    Command::cargo_bin("sketchpad").expect("binary exists")
}

#[test]
fn help_prints_description() {
    sketchpad_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Headless freehand sketch pad with undo history and PNG export",
        ));
}

#[test]
fn no_flags_prints_usage() {
    sketchpad_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("--replay <FILE>"));
}

#[test]
fn replay_rejects_malformed_size() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("script.json");
    std::fs::write(&script, "[]").unwrap();

    sketchpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--replay", script.to_str().unwrap()])
        .args(["--size", "huge"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected WIDTHxHEIGHT"));
}

#[test]
fn replay_exports_a_dated_png() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("script.json");
    std::fs::write(
        &script,
        r#"[
            {"op": "set_color", "color": "blue"},
            {"op": "input", "event": {"type": "pointer_down", "x": 50.0, "y": 50.0}},
            {"op": "input", "event": {"type": "pointer_move", "x": 150.0, "y": 120.0}},
            {"op": "input", "event": {"type": "pointer_up"}}
        ]"#,
    )
    .unwrap();
    let out_dir = temp.path().join("exports");

    sketchpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--replay", script.to_str().unwrap()])
        .args(["--output", out_dir.to_str().unwrap()])
        .args(["--size", "400x300"])
        .assert()
        .success();

    let files: Vec<_> = std::fs::read_dir(&out_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("sketch_"));
    assert!(files[0].ends_with(".png"));
}

#[test]
fn notify_flag_still_exports_without_a_session_bus() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("script.json");
    std::fs::write(
        &script,
        r#"[
            {"op": "input", "event": {"type": "pointer_down", "x": 20.0, "y": 20.0}},
            {"op": "input", "event": {"type": "pointer_up"}}
        ]"#,
    )
    .unwrap();
    let out_dir = temp.path().join("exports");

    sketchpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .env_remove("DBUS_SESSION_BUS_ADDRESS")
        .env_remove("XDG_RUNTIME_DIR")
        .args(["--replay", script.to_str().unwrap()])
        .args(["--output", out_dir.to_str().unwrap()])
        .args(["--size", "300x300"])
        .arg("--notify")
        .assert()
        .success();

    // The notification failure is logged, not fatal; the export still lands.
    assert!(out_dir.read_dir().unwrap().next().is_some());
}

#[test]
fn init_config_writes_default_file() {
    let temp = TempDir::new().unwrap();

    sketchpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    let written = temp.path().join("sketchpad").join("config.toml");
    assert!(written.exists());
    let contents = std::fs::read_to_string(written).unwrap();
    assert!(contents.contains("default_brush_size"));
}
