use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn groupsplit(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("groupsplit").unwrap();
    cmd.env("GROUPSPLIT_DATA_DIR", dir).env_remove("RUST_LOG");
    cmd
}

/// Initialized data dir with a three-member "Trip" group and one dinner paid by A
fn trip() -> TempDir {
    let dir = TempDir::new().unwrap();

    groupsplit(dir.path()).arg("init").assert().success();
    groupsplit(dir.path())
        .args(["group", "create", "Trip", "--creator", "A", "-m", "B,C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created group: Trip"));
    groupsplit(dir.path())
        .args(["expense", "add", "Trip", "Dinner", "3.00", "--payer", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded Dinner paid by A: $3.00"));

    dir
}

#[test]
fn init_creates_data_dir() {
    let dir = TempDir::new().unwrap();

    groupsplit(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(dir.path().join("data").is_dir());
    assert!(dir.path().join("config.json").is_file());
}

#[test]
fn balances_show_who_is_owed() {
    let dir = trip();

    groupsplit(dir.path())
        .args(["balances", "Trip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Should receive $2.00"))
        .stdout(predicate::str::contains("Owes $1.00"));
}

#[test]
fn settle_as_json() {
    let dir = trip();

    let output = groupsplit(dir.path())
        .args(["settle", "Trip", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let response: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let settlements = response["settlements"].as_array().unwrap();
    assert_eq!(settlements.len(), 2);
    assert_eq!(settlements[0]["from"], "B");
    assert_eq!(settlements[0]["to"], "A");
    assert_eq!(settlements[0]["amount"], 1.0);
    assert_eq!(response["balances"]["A"], 2.0);
}

#[test]
fn settle_as_table() {
    let dir = trip();

    groupsplit(dir.path())
        .args(["settle", "Trip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settlement for Trip"))
        .stdout(predicate::str::contains("2 payment(s)"));
}

#[test]
fn custom_shares_are_recorded() {
    let dir = trip();

    groupsplit(dir.path())
        .args([
            "expense", "add", "Trip", "Taxi", "10", "--payer", "B", "--share", "A=4", "--share",
            "C=6",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("$6.00"));

    groupsplit(dir.path())
        .args(["expense", "list", "Trip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Taxi"))
        .stdout(predicate::str::contains("Dinner"));
}

#[test]
fn repeated_shares_for_one_member_add_up() {
    let dir = trip();

    groupsplit(dir.path())
        .args([
            "expense", "add", "Trip", "Taxi", "3.00", "--payer", "A", "--share", "B=1.00",
            "--share", "B=2.00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("$3.00"))
        .stdout(predicate::str::contains("Warning").not());

    groupsplit(dir.path())
        .args(["balances", "Trip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Should receive $5.00"))
        .stdout(predicate::str::contains("Owes $4.00"));
}

#[test]
fn split_gives_remainder_to_first_members() {
    let dir = TempDir::new().unwrap();

    groupsplit(dir.path())
        .args(["split", "1.00", "A", "B", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$0.34"))
        .stdout(predicate::str::contains("$0.33"));
}

#[test]
fn settle_file_reads_records() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("expenses.json");
    std::fs::write(
        &path,
        r#"[
            {"payerId": "A", "amount": 3.0,
             "splits": [{"userId": "A", "amount": 1.0},
                        {"userId": "B", "amount": 1.0},
                        {"userId": "C", "amount": 1.0}]}
        ]"#,
    )
    .unwrap();

    groupsplit(dir.path())
        .arg("settle-file")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"settlements\""))
        .stdout(predicate::str::contains("\"from\": \"B\""));
}

#[test]
fn settle_file_uses_roster_for_unsplit_records() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("expenses.json");
    std::fs::write(&path, r#"[{"payerId": "A", "amount": 2.0, "splits": []}]"#).unwrap();

    groupsplit(dir.path())
        .arg("settle-file")
        .arg(&path)
        .args(["-m", "A,B", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("From,To,Amount"))
        .stdout(predicate::str::contains("B,A,1.00"));
}

#[test]
fn unknown_group_fails() {
    let dir = trip();

    groupsplit(dir.path())
        .args(["balances", "Nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Group not found: Nowhere"));
}

#[test]
fn payer_outside_group_is_rejected() {
    let dir = trip();

    groupsplit(dir.path())
        .args(["expense", "add", "Trip", "Gift", "5", "--payer", "Zed"])
        .assert()
        .failure();
}

#[test]
fn history_lists_changes() {
    let dir = trip();

    groupsplit(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("Trip"));
}
