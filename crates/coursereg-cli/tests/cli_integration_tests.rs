//! CLI integration tests
//!
//! Drive the `coursereg` binary against a temp config directory and check
//! both its output and the data files it leaves behind.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn coursereg(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_coursereg"))
        .arg("--config-dir")
        .arg(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn assert_ok(output: &Output) {
    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        stderr(output)
    );
}

#[test]
fn test_one_shot_commands_persist_between_runs() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    assert_ok(&coursereg(dir, &["add-student", "B001", "Alice", "alice@uca.edu"]));
    assert_ok(&coursereg(dir, &["add-student", "B002", "Brian", "brian@uca.edu"]));
    assert_ok(&coursereg(
        dir,
        &["add-course", "CSCI4490", "Software Engineering", "1"],
    ));

    let first = coursereg(dir, &["enroll", "B001", "CSCI4490"]);
    assert_ok(&first);
    assert_eq!(stdout(&first).trim(), "Enrolled.");

    let second = coursereg(dir, &["enroll", "B002", "CSCI4490"]);
    assert_ok(&second);
    assert_eq!(stdout(&second).trim(), "Course full. Added to WAITLIST.");

    let dropped = coursereg(dir, &["drop", "B001", "CSCI4490"]);
    assert_ok(&dropped);
    assert_eq!(
        stdout(&dropped).trim(),
        "Dropped. Promoted B002 from waitlist."
    );

    assert_eq!(
        fs::read_to_string(dir.join("enrollments.csv")).unwrap(),
        "CSCI4490|B002|ENROLLED\n"
    );
}

#[test]
fn test_domain_error_exits_nonzero_with_message() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    assert_ok(&coursereg(dir, &["add-course", "CSCI4490", "Software Engineering", "2"]));

    let output = coursereg(dir, &["drop", "B001", "CSCI4490"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Error: Student B001 not enrolled or waitlisted in CSCI4490"));
}

#[test]
fn test_add_course_rejects_capacity_out_of_range() {
    let temp_dir = TempDir::new().unwrap();
    let output = coursereg(temp_dir.path(), &["add-course", "BIG1", "Huge", "501"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid data"));
    assert!(!temp_dir.path().join("courses.csv").exists());
}

#[test]
fn test_courses_json_listing() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    assert_ok(&coursereg(dir, &["add-course", "MATH1496", "Calculus I", "50"]));

    let output = coursereg(dir, &["courses", "--json"]);
    assert_ok(&output);

    let infos: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(infos[0]["course"]["code"], "MATH1496");
    assert_eq!(infos[0]["enrolled_count"], 0);
    assert_eq!(infos[0]["waitlist_count"], 0);
}

#[test]
fn test_config_file_relocates_data_files() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    fs::write(
        dir.join("coursereg.toml"),
        "students_file = \"data/students.csv\"\n",
    )
    .unwrap();

    assert_ok(&coursereg(dir, &["add-student", "B001", "Alice", "alice@uca.edu"]));

    assert!(dir.join("data").join("students.csv").exists());
    assert!(!dir.join("students.csv").exists());

    let output = coursereg(dir, &["students"]);
    assert_ok(&output);
    assert_eq!(stdout(&output).trim(), "B001 Alice <alice@uca.edu>");
}

fn run_shell(dir: &Path, args: &[&str], script: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_coursereg"))
        .arg("--config-dir")
        .arg(dir)
        .arg("shell")
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(script.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_shell_demo_session() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    let output = run_shell(dir, &["--demo"], "3\nB001\nCSCI4490\n6\n0\n");
    assert_ok(&output);

    let out = stdout(&output);
    assert!(out.contains("Enrolled."));
    assert!(out.contains("  - CSCI4490 Software Engineering cap=2 enrolled=1 wait=0"));
    assert!(out.contains("  - MATH1496 Calculus I cap=50 enrolled=0 wait=0"));

    // Seeding again leaves the existing records alone
    let again = run_shell(dir, &["--demo"], "5\n0\n");
    assert_ok(&again);
    assert!(stdout(&again).contains("  - B002 Brian <brian@uca.edu>"));

    let students = fs::read_to_string(dir.join("students.csv")).unwrap();
    assert_eq!(students.lines().count(), 2);
}

#[test]
fn test_roster_lists_waitlist_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    for id in ["B001", "B002", "B003"] {
        let email = format!("{}@uca.edu", id.to_lowercase());
        assert_ok(&coursereg(dir, &["add-student", id, "Student", &email]));
    }
    assert_ok(&coursereg(dir, &["add-course", "CSCI4490", "Software Engineering", "1"]));
    for id in ["B003", "B001", "B002"] {
        assert_ok(&coursereg(dir, &["enroll", id, "CSCI4490"]));
    }

    let output = coursereg(dir, &["roster", "CSCI4490"]);
    assert_ok(&output);

    let out = stdout(&output);
    let enrolled_at = out.find("Enrolled:").unwrap();
    let waitlist_at = out.find("Waitlist:").unwrap();
    assert!(out[enrolled_at..waitlist_at].contains("1. B003"));
    assert!(out[waitlist_at..].contains("1. B001"));
    assert!(out[waitlist_at..].contains("2. B002"));
}
