use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SCENARIO: &str = r#"
width = 200
height = 100

[[step]]
action = "zoom"
factor = 2.0

[[step]]
action = "press"
x = 100.0
y = 50.0

[[step]]
action = "drag"
x = 300.0
y = 150.0

[[step]]
action = "drag"
x = 40.0
y = 10.0

[[step]]
action = "release"
"#;

fn stepsketch_cmd(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("stepsketch").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home);
    cmd
}

fn write_script(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("session.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn stepsketch_help_prints_usage() {
    let temp = TempDir::new().unwrap();
    stepsketch_cmd(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Sketch annotation engine for step screenshots",
        ));
}

#[test]
fn replay_prints_summary_in_logical_coordinates() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, SCENARIO);

    stepsketch_cmd(temp.path())
        .arg("replay")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Replayed 5 steps: 1 shapes committed, 0 sessions aborted, 0 steps rejected",
        ))
        .stdout(predicate::str::contains(
            "shape-1 rect (18.5, 3.5)-(51.5, 26.5)",
        ));
}

#[test]
fn replay_json_lists_shapes() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, SCENARIO);

    let output = stepsketch_cmd(temp.path())
        .args(["replay", "--json"])
        .arg(&script)
        .output()
        .unwrap();
    assert!(output.status.success());

    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let first = &records[0];
    assert_eq!(first["type"], "rect");
    assert_eq!(first["x"], 20.0);
    assert_eq!(first["y"], 5.0);
    assert_eq!(first["w"], 30.0);
    assert_eq!(first["h"], 20.0);
    assert_eq!(first["editable"], false);
}

#[test]
fn replay_writes_svg_and_png() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, SCENARIO);
    let svg = temp.path().join("out/sketch.svg");
    let png = temp.path().join("out/sketch.png");

    stepsketch_cmd(temp.path())
        .arg("replay")
        .arg(&script)
        .arg("--svg")
        .arg(&svg)
        .arg("--png")
        .arg(&png)
        .assert()
        .success();

    let document = std::fs::read_to_string(&svg).unwrap();
    assert!(document.contains(r#"viewBox="0 0 200 100""#));
    assert!(document.contains(r#"<rect x="20" y="5" width="30" height="20""#));

    let bytes = std::fs::read(&png).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn config_file_changes_default_tool() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, SCENARIO);
    let config = temp.path().join("custom.toml");
    std::fs::write(&config, "[drawing]\ndefault_tool = \"text\"\n").unwrap();

    stepsketch_cmd(temp.path())
        .arg("--config")
        .arg(&config)
        .arg("replay")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("shape-1 text"))
        .stdout(predicate::str::contains("editable"));
}

#[test]
fn missing_config_file_fails() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, SCENARIO);

    stepsketch_cmd(temp.path())
        .args(["--config", "/nonexistent/stepsketch.toml", "replay"])
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config"));
}

#[test]
fn malformed_script_fails() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "[[step]]\naction = \"teleport\"\n");

    stepsketch_cmd(temp.path())
        .arg("replay")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse replay script"));
}

#[test]
fn rejected_steps_do_not_fail_the_replay() {
    let temp = TempDir::new().unwrap();
    let script = write_script(
        &temp,
        "[[step]]\naction = \"drag\"\nx = 1.0\ny = 1.0\n\n[[step]]\naction = \"release\"\n",
    );

    stepsketch_cmd(temp.path())
        .arg("replay")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 shapes committed"))
        .stdout(predicate::str::contains("2 steps rejected"));
}
