//! End-to-end checks of the seed binary's exit status and diagnostics.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn run_seed(dir: &Path, vars: &[(&str, String)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_seed"));
    cmd.env_clear().current_dir(dir).env("RUST_LOG", "info");
    for (key, value) in vars {
        cmd.env(key, value);
    }
    cmd.output().unwrap()
}

#[test]
fn test_missing_secret_fails_before_touching_database() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("content.db");
    let uri = format!("sqlite://{}?mode=rwc", db_path.display());

    let output = run_seed(dir.path(), &[("DATABASE_URI", uri)]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("CMS_SECRET must be set before running the seed script."));
    assert!(!db_path.exists());
}

#[test]
fn test_database_failure_is_reported_on_stderr() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("missing").join("content.db");
    let uri = format!("sqlite://{}", db_path.display());

    let output = run_seed(
        dir.path(),
        &[
            ("CMS_SECRET", "seed-test-secret".to_string()),
            ("DATABASE_URI", uri),
        ],
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(!output.status.success());
    assert!(stderr.contains("Failed to seed database"));
    assert!(!stdout.contains("Failed to seed database"));
}
