#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn cli() -> Command {
    Command::cargo_bin("shiftplan-cli").unwrap()
}

fn import(roster: &Path, csv: &Path, count: usize) {
    cli()
        .arg("--roster")
        .arg(roster)
        .args(["import", "--csv"])
        .arg(csv)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Imported {count} employee(s) into {}",
            roster.display()
        )));
}

#[test]
fn generate_reports_understaffing_with_code_2() {
    let dir = tempdir().unwrap();
    let csv = dir.path().join("prefs.csv");
    let roster = dir.path().join("roster.json");
    fs::write(&csv, "name,day,shift\nAlice,mon,m\nBob,mon,m\nCarol,fri,e\n").unwrap();
    import(&roster, &csv, 3);

    cli()
        .arg("--roster")
        .arg(&roster)
        .args(["--seed", "1", "generate"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("MORNING     : Alice, Bob (2 employees)"))
        .stdout(predicate::str::contains("WARNING: The following shifts are still under-staffed:"))
        .stderr(predicate::str::contains("under-staffed"));
}

#[test]
fn generate_full_coverage_exits_cleanly() {
    let dir = tempdir().unwrap();
    let csv = dir.path().join("prefs.csv");
    let roster = dir.path().join("roster.json");
    let out_csv = dir.path().join("week.csv");
    let mut rows = String::from("name,day,shift\n");
    for i in 0..14 {
        rows.push_str(&format!("emp{i},,\n"));
    }
    fs::write(&csv, rows).unwrap();
    import(&roster, &csv, 14);

    cli()
        .arg("--roster")
        .arg(&roster)
        .args(["--seed", "9", "generate", "--quiet", "--out-csv"])
        .arg(&out_csv)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let week = fs::read_to_string(&out_csv).unwrap();
    assert_eq!(week.lines().count(), 22);
    assert!(!week.contains("understaffed"));
}

#[test]
fn menu_exits_with_zero() {
    let dir = tempdir().unwrap();
    cli()
        .arg("--roster")
        .arg(dir.path().join("missing.json"))
        .write_stdin("9\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn menu_can_save_entered_roster() {
    let dir = tempdir().unwrap();
    let roster = dir.path().join("roster.json");
    cli()
        .arg("--roster")
        .arg(&roster)
        .args(["menu", "--save"])
        .write_stdin("1\nAlice\nsun a\ndone\nfinish\n5\n")
        .assert()
        .success();

    let saved = fs::read_to_string(&roster).unwrap();
    assert!(saved.contains("Alice"));
    assert!(saved.contains("Sunday"));
}
