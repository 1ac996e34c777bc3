mod common;

use common::TestFixture;
use predicates::prelude::*;

// ============================================================================
// Invocation
// ============================================================================

#[test]
fn help_lists_exit_codes() {
    vibe_lint!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exit codes"));
}

#[test]
fn zero_arguments_checks_working_directory() {
    let fixture = TestFixture::new();
    fixture.create_dir("src/MyComponent");

    vibe_lint!()
        .current_dir(fixture.path())
        .arg("--color")
        .arg("never")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("./src/MyComponent"));
}

#[test]
fn path_argument_selects_project_root() {
    let fixture = TestFixture::new();
    fixture.create_file("docs/readme.md");

    vibe_lint!()
        .arg(fixture.path())
        .arg("--color")
        .arg("never")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("./docs/readme.md"));
}

#[test]
fn invalid_format_is_usage_error() {
    vibe_lint!()
        .arg("--format")
        .arg("xml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown output format"));
}

// ============================================================================
// Output modes
// ============================================================================

#[test]
fn color_never_emits_no_escape_codes() {
    let fixture = TestFixture::new();
    fixture.create_dir("src/Bad");

    vibe_lint!()
        .current_dir(fixture.path())
        .args(["--color", "never"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn color_always_emits_escape_codes() {
    let fixture = TestFixture::new();

    vibe_lint!()
        .current_dir(fixture.path())
        .args(["--color", "always"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[32m"));
}

#[test]
fn json_format_reports_violations() {
    let fixture = TestFixture::new();
    fixture.create_file("docs/user-guide.md");
    fixture.create_dir("pages/HomePage");

    let output = vibe_lint!()
        .current_dir(fixture.path())
        .args(["--format", "json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["passed"], false);
    assert_eq!(json["documents"]["violations"][0]["path"], "./docs/user-guide.md");
    assert_eq!(json["documents"]["violations"][0]["suggestion"], "userguide.md");
    assert_eq!(json["code_dirs"]["violations"][0]["path"], "./pages/HomePage");
}

#[test]
fn json_format_clean_project() {
    let fixture = TestFixture::new();

    let output = vibe_lint!()
        .current_dir(fixture.path())
        .args(["--format", "json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["passed"], true);
    assert_eq!(json["documents"]["status"], "skipped");
}
