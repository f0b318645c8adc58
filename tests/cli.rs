use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tracker(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("expense-tracker").unwrap();
    cmd.env("EXPENSE_TRACKER_DATA_DIR", data_dir)
        .env_remove("EXPENSE_TRACKER_EXPORT_DIR")
        .env_remove("RUST_LOG");
    cmd
}

fn exported_files(dir: &Path) -> Vec<std::path::PathBuf> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect()
}

#[test]
fn full_session_exports_tab_delimited_list() {
    let data = TempDir::new().unwrap();
    let exports = TempDir::new().unwrap();

    tracker(data.path())
        .arg("--export-dir")
        .arg(exports.path())
        .arg("--no-open")
        .write_stdin(concat!(
            "2\n",
            "Coffee\n3.50\nFood\n",
            "Dinner (with friends)\n40\n2\n1\n",
            "2\n3\n4\n",
            "5\nmarch\n"
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Coffee (Food) - $3.50\nDinner (with friends) (Food) - $40.00\n",
        ))
        .stdout(predicate::str::contains("Food - $43.50"))
        .stdout(predicate::str::contains(
            "Total Spending across all categories: $43.50",
        ))
        .stdout(predicate::str::contains("Expenses saved to "))
        .stdout(predicate::str::ends_with("Goodbye!\n"));

    let files = exported_files(exports.path());
    assert_eq!(files.len(), 1);
    assert_eq!(
        fs::read_to_string(&files[0]).unwrap(),
        "Description\tCategory\tAmount\nCoffee\tFood\t3.50\nDinner (with friends)\tFood\t40.00\n"
    );
}

#[test]
fn export_dir_from_environment() {
    let data = TempDir::new().unwrap();
    let exports = TempDir::new().unwrap();
    let target = exports.path().join("Expense Tracker Lists");

    tracker(data.path())
        .env("EXPENSE_TRACKER_EXPORT_DIR", &target)
        .arg("--no-open")
        .write_stdin("1\nBus\n2\nTravel\n5\ncommute\n")
        .assert()
        .success();

    assert_eq!(exported_files(&target).len(), 1);
}

#[test]
fn bad_input_is_recoverable() {
    let data = TempDir::new().unwrap();
    let exports = TempDir::new().unwrap();

    tracker(data.path())
        .arg("--export-dir")
        .arg(exports.path())
        .arg("--no-open")
        .write_stdin("zero\n0\n1\nTea\n-1\n0\nDrinks\nseven\n7\n5\nfree\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid input! Please enter a positive integer.",
        ))
        .stdout(predicate::str::contains("Please enter a positive integer."))
        .stdout(predicate::str::contains(
            "Invalid input! Please enter a number that is zero or greater.",
        ))
        .stdout(predicate::str::contains("Invalid option, please try again."));
}

#[test]
fn closed_input_fails_without_export() {
    let data = TempDir::new().unwrap();
    let exports = TempDir::new().unwrap();

    tracker(data.path())
        .arg("--export-dir")
        .arg(exports.path())
        .arg("--no-open")
        .write_stdin("1\nCoffee\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input closed"));

    assert!(exported_files(exports.path()).is_empty());
}

#[test]
fn session_leaves_no_state_behind_by_default() {
    let data = TempDir::new().unwrap();
    let exports = TempDir::new().unwrap();

    tracker(data.path())
        .arg("--export-dir")
        .arg(exports.path())
        .arg("--no-open")
        .write_stdin("1\nCoffee\n3.50\nFood\n5\nmarch\n")
        .assert()
        .success();

    assert_eq!(fs::read_dir(data.path()).unwrap().count(), 0);
    assert_eq!(exported_files(exports.path()).len(), 1);

    tracker(data.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No history recorded."));
}

#[test]
fn session_is_recorded_in_history_when_enabled() {
    let data = TempDir::new().unwrap();
    let exports = TempDir::new().unwrap();
    fs::write(data.path().join("config.json"), r#"{"audit_enabled": true}"#).unwrap();

    tracker(data.path())
        .arg("--export-dir")
        .arg(exports.path())
        .arg("--no-open")
        .write_stdin("1\nCoffee\n3.50\nFood\n5\nmarch\n")
        .assert()
        .success();

    tracker(data.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Expense"))
        .stdout(predicate::str::contains("Coffee (Food)"))
        .stdout(predicate::str::contains("CREATE Category Food"))
        .stdout(predicate::str::contains("EXPORT ExportFile"));
}

#[test]
fn init_then_config() {
    let data = TempDir::new().unwrap();

    tracker(data.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings written to"));

    assert!(data.path().join("config.json").exists());

    tracker(data.path())
        .args(["config", "--export-dir", "/tmp/lists"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Export directory: /tmp/lists"))
        .stdout(predicate::str::contains("Currency symbol:        $"));
}
