// SPDX-FileCopyrightText: 2026 Formscan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests that drive the `formscan` binary.
//!
//! Each test writes its own forms file and config into a temp directory, so
//! tests are independent and order-insensitive.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const FORMS: &str = r#"
[[form]]
id = 0x64B3D
editor_id = "FoodSweetRoll"
name = "Sweetroll"
kind = "AlchemyItem"
value = 2
food = true
effects = [{ base_effect = 0x3EB15, magnitude = 2.0, duration = 0 }]

[[form]]
id = 0x3EB15
editor_id = "RestoreHealth"
name = "Restore Health"
kind = "MagicEffect"
school = "Restoration"

[[form]]
id = 0xF4F0
name = "Vegetable Soup"
kind = "AlchemyItem"
value = 5
food = true

[[form]]
id = 0x1
name = "Iron Shield"
kind = "Armor"
value = 6000
armor_rating = 20

[[form]]
id = 0x2
name = "Rag"
kind = "Armor"
value = 1

[[form]]
id = 0x13BBF
name = "Hod"
kind = "Misc"
value = 0

[[form]]
id = 0xFF000001
kind = "Reference"
base_object = 0x13BBF
"#;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("forms.toml"), FORMS).unwrap();
        let config = format!(
            "[log]\ndirectory = {:?}\nlevel = \"info\"\n\n[data]\nforms_path = {:?}\n",
            dir.path().join("logs"),
            dir.path().join("forms.toml"),
        );
        std::fs::write(dir.path().join("formscan.toml"), config).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn formscan(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_formscan"))
            .arg("--config")
            .arg(self.path("formscan.toml"))
            .args(args)
            .current_dir(self.dir.path())
            .env_remove("RUST_LOG")
            .output()
            .unwrap()
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn read_log(dir: &Path) -> String {
    std::fs::read_to_string(dir.join("logs").join("formscan.log")).unwrap()
}

#[test]
fn run_prints_findings_and_writes_log() {
    let fixture = Fixture::new();
    let output = fixture.formscan(&["run"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("form by id: Sweetroll"), "got: {out}");
    assert!(out.contains("form by editor id: Sweetroll (food: true)"), "got: {out}");
    assert!(out.contains("effect Restore Health of magnitude 2"), "got: {out}");
    assert!(out.contains("foods: 1\n  vegetable soup"), "got: {out}");
    assert!(out.contains("expensive armor: 1\n  00000001 Iron Shield (6000 gold)"), "got: {out}");
    assert!(out.contains("references: 1\n  FF000001 -> hod"), "got: {out}");

    let log = read_log(fixture.dir.path());
    assert!(log.contains("Form Name: Sweetroll"), "log: {log}");
    assert!(log.contains("Yum, yum soup! vegetable soup"), "log: {log}");
    assert!(log.contains("Whoa! Iron Shield is expensive! It costs 6000"), "log: {log}");
    assert!(log.contains("hod-related reference: hod ff000001"), "log: {log}");
}

#[test]
fn run_accepts_forms_override() {
    let fixture = Fixture::new();
    std::fs::write(
        fixture.path("other.json"),
        r#"{"form": [{"id": 7, "name": "Ebony Mail", "kind": "Armor", "value": 9000}]}"#,
    )
    .unwrap();

    let other = fixture.path("other.json");
    let output = fixture.formscan(&["run", "--forms", other.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("form by id: not found"), "got: {out}");
    assert!(out.contains("00000007 Ebony Mail (9000 gold)"), "got: {out}");
}

#[test]
fn run_fails_when_log_directory_is_unusable() {
    let fixture = Fixture::new();
    let blocker = fixture.path("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();
    std::fs::write(
        fixture.path("formscan.toml"),
        format!(
            "[log]\ndirectory = {:?}\n\n[data]\nforms_path = {:?}\n",
            blocker.join("logs"),
            fixture.path("forms.toml"),
        ),
    )
    .unwrap();

    let output = fixture.formscan(&["run"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("formscan:"), "stderr: {}", stderr(&output));
    assert!(stdout(&output).is_empty());
}

#[test]
fn lookup_by_hex_id_and_editor_id() {
    let fixture = Fixture::new();

    let output = fixture.formscan(&["lookup", "0x64b3d"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).starts_with("00064B3D AlchemyItem"));

    let output = fixture.formscan(&["lookup", "restorehealth"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Restore Health [RestoreHealth]"));

    let output = fixture.formscan(&["lookup", "NoSuchForm"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "no form matches NoSuchForm");
}

#[test]
fn scan_filters_by_kind_and_value() {
    let fixture = Fixture::new();
    let output = fixture.formscan(&["scan", "--kind", "armor", "--min-value", "5000"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("Iron Shield"));
    assert!(!out.contains("Rag"));
    assert!(out.contains("1 of 7 forms matched"), "got: {out}");
}

#[test]
fn scan_and_lookup_write_matches_to_the_log() {
    let fixture = Fixture::new();

    let output = fixture.formscan(&["scan", "--kind", "armor"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let log = read_log(fixture.dir.path());
    assert!(log.contains("loaded forms file"), "log: {log}");
    assert!(log.contains("matched Iron Shield"), "log: {log}");
    assert!(log.contains("matched Rag"), "log: {log}");

    let output = fixture.formscan(&["lookup", "FoodSweetRoll"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let log = read_log(fixture.dir.path());
    assert!(log.contains("Form Name: Sweetroll"), "log: {log}");
    assert!(!log.contains("matched Iron Shield"), "each run truncates the log: {log}");
}

#[test]
fn env_override_reaches_the_binary() {
    let fixture = Fixture::new();
    let output = Command::new(env!("CARGO_BIN_EXE_formscan"))
        .arg("--config")
        .arg(fixture.path("formscan.toml"))
        .args(["scan", "--kind", "armor"])
        .current_dir(fixture.dir.path())
        .env_remove("RUST_LOG")
        .env("FORMSCAN_LOG_LEVEL", "warn")
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let log = read_log(fixture.dir.path());
    assert!(!log.contains("matched Iron Shield"), "info lines filtered out: {log}");
}

#[test]
fn scan_by_name_is_case_insensitive() {
    let fixture = Fixture::new();
    let output = fixture.formscan(&["scan", "--name-contains", "SOUP"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Vegetable Soup"));
}

#[test]
fn unknown_config_key_is_reported_with_suggestion() {
    let fixture = Fixture::new();
    std::fs::write(fixture.path("formscan.toml"), "[demo]\nfood_neddle = \"stew\"\n").unwrap();

    let output = fixture.formscan(&["scan"]);
    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("food_neddle"), "stderr: {err}");
    assert!(err.contains("food_needle"), "stderr: {err}");
}

#[test]
fn missing_forms_file_is_an_error() {
    let fixture = Fixture::new();
    std::fs::write(
        fixture.path("formscan.toml"),
        format!("[log]\ndirectory = {:?}\n", fixture.path("logs")),
    )
    .unwrap();

    let output = fixture.formscan(&["lookup", "1"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("no forms file given"));

    let output = fixture.formscan(&["lookup", "1", "--forms", "absent.toml"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("absent.toml"), "stderr: {}", stderr(&output));
}

#[test]
fn missing_config_file_is_an_error() {
    let fixture = Fixture::new();
    std::fs::remove_file(fixture.path("formscan.toml")).unwrap();

    let output = fixture.formscan(&["scan"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("not found"), "stderr: {}", stderr(&output));
}
