use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

const BIN_NAME: &str = "runway";

fn runway(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("RUNWAY_DATA_DIR", data_dir.path())
        .env_remove("RUNWAY_LOG")
        .env_remove("RUST_LOG")
        .args(["--as-of", "2024-06-01"]);
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    runway(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("account").and(contains("expense")).and(contains("dashboard")));
}

#[test]
fn test_init_then_empty_dashboard() {
    let dir = TempDir::new().unwrap();
    runway(&dir).arg("init").assert().success().stdout(contains("Initialization complete"));
    runway(&dir)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(contains("No accounts yet"));
}

#[test]
fn test_account_and_expense_flow() {
    let dir = TempDir::new().unwrap();

    runway(&dir)
        .args(["account", "create", "Travel", "--start", "2024-01-01", "--initial", "500"])
        .assert()
        .success()
        .stdout(contains("Created account: Travel"));

    runway(&dir)
        .args(["expense", "add", "Hotel", "300", "--due", "2024-07-01", "--account", "Travel"])
        .assert()
        .success();

    runway(&dir)
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(contains("$500.00").and(contains("$300.00")).and(contains("$200.00")));

    runway(&dir)
        .args(["expense", "afford", "Travel", "--due", "2024-08-01"])
        .assert()
        .success()
        .stdout(contains("$200.00"));
}

#[test]
fn test_overdrawing_expense_is_rejected() {
    let dir = TempDir::new().unwrap();

    runway(&dir)
        .args(["account", "create", "Travel", "--start", "2024-01-01", "--initial", "500"])
        .assert()
        .success();

    runway(&dir)
        .args(["expense", "add", "Cruise", "900", "--due", "2024-07-01", "--account", "Travel"])
        .assert()
        .failure()
        .stderr(contains("go negative"));

    runway(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(contains("No expenses found"));
}

#[test]
fn test_bad_as_of_date_fails() {
    let dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("RUNWAY_DATA_DIR", dir.path())
        .args(["--as-of", "June 1st", "dashboard"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_listed_id_selects_one_of_two_same_named_expenses() {
    let dir = TempDir::new().unwrap();

    runway(&dir)
        .args(["account", "create", "Home", "--start", "2024-01-01", "--initial", "5000"])
        .assert()
        .success();
    for due in ["2024-07-01", "2024-08-01"] {
        runway(&dir)
            .args(["expense", "add", "Rent", "900", "--due", due, "--account", "Home"])
            .assert()
            .success();
    }

    runway(&dir)
        .args(["expense", "show", "Rent"])
        .assert()
        .failure()
        .stderr(contains("matches 2 expenses"));

    let listed = runway(&dir).args(["expense", "list"]).output().unwrap();
    let stdout = String::from_utf8(listed.stdout).unwrap();
    let ids: Vec<&str> = stdout
        .lines()
        .filter(|line| line.contains("Rent"))
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.iter().all(|id| id.starts_with("exp-")));

    runway(&dir)
        .args(["expense", "show", ids[0]])
        .assert()
        .success()
        .stdout(contains("Rent").and(contains("2024-07-01")));
}
