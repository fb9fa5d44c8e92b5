#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn roster_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("roster"));
    cmd.env("ROSTER_HOME", home.as_os_str())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn add_student(home: &Path, last: &str, first: &str, phone: &str, grades: &str) {
    let email = format!("{}.{}@example.com", first, last).to_lowercase();
    roster_cmd(home)
        .args([
            "add",
            "--last-name",
            last,
            "--first-name",
            first,
            "--middle-name",
            "Ivanovych",
            "--phone",
            phone,
            "--email",
            &email,
            "--birth-date",
            "2004-05-17",
            "--group",
            "KN-21",
            "--address",
            "Kyiv",
            "--education-type",
            "budget",
            "--grades",
            grades,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Student added"));
}

#[test]
fn test_naked_invocation_on_empty_roster() {
    let home = TempDir::new().unwrap();
    roster_cmd(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No students found."));
}

#[test]
fn test_add_list_edit_delete_workflow() {
    let home = TempDir::new().unwrap();

    // 1. Add two students
    add_student(home.path(), "Smith", "Bob", "+380501111111", "80 90");
    add_student(home.path(), "Adams", "Zoe", "+380502222222", "95 100");

    // 2. Slot file is written under ROSTER_HOME
    let slot = home.path().join("studentGroup.json");
    assert!(slot.exists());

    // 3. List shows both with their stored-order indexes
    roster_cmd(home.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Smith Bob"))
        .stdout(predicate::str::contains("2. Adams Zoe"))
        .stdout(predicate::str::contains("97.50"));

    // 4. Sorted by last name, indexes stay attached to their records
    let out = roster_cmd(home.path())
        .args(["list", "--sort", "lastName"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(out.stdout).unwrap();
    let adams = stdout.find("2. Adams Zoe").unwrap();
    let smith = stdout.find("1. Smith Bob").unwrap();
    assert!(adams < smith);

    // 5. Edit one field
    roster_cmd(home.path())
        .args(["edit", "1", "--group", "KN-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Student updated"));
    roster_cmd(home.path())
        .args(["list", "--search", "kn-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Smith Bob"))
        .stdout(predicate::str::contains("Adams").not());

    // 6. Delete
    roster_cmd(home.path())
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Student deleted"));
    roster_cmd(home.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Adams Zoe"))
        .stdout(predicate::str::contains("Smith").not());
}

#[test]
fn test_invalid_input_fails_without_writing() {
    let home = TempDir::new().unwrap();

    roster_cmd(home.path())
        .args(["add", "--last-name", "Smith"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: please fill in all fields"));

    assert!(!home.path().join("studentGroup.json").exists());
}

#[test]
fn test_duplicate_contacts_are_rejected() {
    let home = TempDir::new().unwrap();
    add_student(home.path(), "Smith", "Bob", "+380501111111", "80");

    roster_cmd(home.path())
        .args([
            "add",
            "--last-name",
            "Other",
            "--first-name",
            "Person",
            "--middle-name",
            "X",
            "--phone",
            "+380 (50) 111-1111",
            "--email",
            "unique@example.com",
            "--birth-date",
            "2004-05-17",
            "--group",
            "KN-21",
            "--address",
            "Kyiv",
            "--education-type",
            "Contract",
            "--grades",
            "70",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("phone number already exists"));
}

#[test]
fn test_bad_index_is_an_error() {
    let home = TempDir::new().unwrap();
    add_student(home.path(), "Smith", "Bob", "+380501111111", "80");

    roster_cmd(home.path())
        .args(["delete", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Index 5 not found"));

    roster_cmd(home.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Smith Bob"));
}

#[test]
fn test_export_to_stdout_and_file() {
    let home = TempDir::new().unwrap();
    add_student(home.path(), "Smith", "Bob", "+380501111111", "80 90 100");

    roster_cmd(home.path())
        .args(["export", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "==========================1==========================\n",
        ))
        .stdout(predicate::str::contains("Average grade: 90.00"))
        .stdout(predicate::str::contains("Grades: 80, 90, 100"));

    let out_dir = home.path().join("reports");
    roster_cmd(home.path())
        .args(["export", "--output", out_dir.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 record(s)"));

    let files: Vec<_> = fs::read_dir(&out_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("students_") && files[0].ends_with(".txt"));
}

#[test]
fn test_export_of_empty_selection() {
    let home = TempDir::new().unwrap();
    add_student(home.path(), "Smith", "Bob", "+380501111111", "80");

    roster_cmd(home.path())
        .args(["export", "--stdout", "--search", "nobody"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No records to export."));
}

#[test]
fn test_config_slot_redirects_storage() {
    let home = TempDir::new().unwrap();

    roster_cmd(home.path())
        .args(["config", "slot", "kn22"])
        .assert()
        .success()
        .stdout(predicate::str::contains("slot set to kn22"));

    roster_cmd(home.path())
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("slot = kn22"));

    add_student(home.path(), "Smith", "Bob", "+380501111111", "80");
    assert!(home.path().join("kn22.json").exists());
    assert!(!home.path().join("studentGroup.json").exists());
}

#[test]
fn test_unknown_sort_field_is_an_error() {
    let home = TempDir::new().unwrap();
    roster_cmd(home.path())
        .args(["list", "--sort", "shoeSize"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
