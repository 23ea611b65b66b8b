use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn fingerpaint_cmd() -> Command {
    Command::cargo_bin("fingerpaint").expect("binary exists")
}

#[test]
fn help_prints_usage() {
    fingerpaint_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Webcam virtual painter driven by hand gestures",
        ));
}

#[test]
fn print_config_emits_defaults() {
    fingerpaint_cmd()
        .arg("--print-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("default_thickness"))
        .stdout(predicate::str::contains("[camera]"))
        .stdout(predicate::str::contains("[[palette]]"));
}

#[test]
fn camera_flag_overrides_config() {
    fingerpaint_cmd()
        .args(["--camera", "3", "--print-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("index = 3"));
}

#[test]
fn config_flag_loads_custom_file() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "[brush]\ndefault_thickness = 25").expect("write config");

    fingerpaint_cmd()
        .arg("--config")
        .arg(file.path())
        .arg("--print-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("default_thickness = 25"));
}

#[test]
fn malformed_config_is_rejected() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "not valid toml [[").expect("write config");

    fingerpaint_cmd()
        .arg("--config")
        .arg(file.path())
        .arg("--print-config")
        .assert()
        .failure();
}

#[test]
fn unknown_flag_is_rejected() {
    fingerpaint_cmd()
        .arg("--definitely-not-a-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}
