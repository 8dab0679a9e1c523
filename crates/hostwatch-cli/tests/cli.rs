use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command with an isolated config path so a developer's own file never
/// leaks into the run.
fn hostwatch(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("hostwatch").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("HOSTWATCH_CONFIG")
        .arg("--config")
        .arg(dir.path().join("config.toml"));
    cmd
}

#[test]
fn help_lists_every_scan() {
    let dir = TempDir::new().unwrap();
    hostwatch(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("accounts"))
        .stdout(predicate::str::contains("processes"))
        .stdout(predicate::str::contains("startup"));
}

#[test]
fn unknown_subcommand_fails() {
    let dir = TempDir::new().unwrap();
    hostwatch(&dir).arg("registry").assert().failure();
}

#[test]
fn config_path_reports_override() {
    let dir = TempDir::new().unwrap();
    hostwatch(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn rules_json_merges_config_over_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[rules.processes]\nduplicate_threshold = 9\n",
    )
    .unwrap();

    let output = hostwatch(&dir)
        .args(["rules", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rules: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rules["processes"]["duplicate_threshold"], 9);
    assert_eq!(rules["processes"]["extra_system_names"][0], "dllhost.exe");
    assert_eq!(rules["startup"]["impersonation_stems"][0], "svchost");
}

#[test]
fn empty_rule_entry_is_rejected() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[rules.startup]\nmalicious_keywords = [\"hack\", \" \"]\n",
    )
    .unwrap();

    hostwatch(&dir)
        .arg("rules")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid rules"));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();

    hostwatch(&dir).args(["config", "init"]).assert().success();
    assert!(dir.path().join("config.toml").exists());

    hostwatch(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    hostwatch(&dir)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn processes_json_is_a_report() {
    let dir = TempDir::new().unwrap();
    let output = hostwatch(&dir)
        .args(["processes", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["scan"], "processes");
    assert!(report["enumerated"].as_u64().unwrap() > 0);
    assert!(report["flagged"].is_array());
}

#[test]
fn processes_csv_starts_with_header() {
    let dir = TempDir::new().unwrap();
    hostwatch(&dir)
        .args(["processes", "--output", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("scan,subject,rule,message"));
}

#[cfg(not(windows))]
#[test]
fn accounts_scan_fails_off_windows() {
    // Either elevation is missing or `net user` is unavailable
    let dir = TempDir::new().unwrap();
    hostwatch(&dir).arg("accounts").assert().failure();
}

#[test]
fn explain_keeps_json_output_parseable() {
    let dir = TempDir::new().unwrap();
    let output = hostwatch(&dir)
        .args(["processes", "--explain", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["scan"], "processes");
}

#[test]
fn explain_precedes_pretty_report() {
    let dir = TempDir::new().unwrap();
    hostwatch(&dir)
        .args(["rules", "--explain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== What This Does ==="));
}
