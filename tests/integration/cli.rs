use std::fs;

use crate::common::{Fixture, normalized_lines, run_bare, run_in};

#[test]
fn version_flag_prints_name_and_version() {
    let output = run_bare(&["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        format!("anrar {}", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn invalid_verbosity_aborts_before_extraction() {
    let output = run_bare(&["--verbosity", "5"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.starts_with("Invalid arguments:"),
        "stderr was: {stderr}"
    );
}

#[test]
fn missing_settings_file_is_fatal() {
    let fixture = Fixture::new(&["a.rar"]);
    let output = fixture.run(&[]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Settings file"), "stderr was: {stderr}");
    assert!(fixture.exists("a.rar"));
}

#[cfg(unix)]
#[test]
fn extracts_every_group_and_deletes_parts() {
    let fixture = Fixture::new(&["foo.part1.rar", "foo.part2.rar", "bar.rar", "notes.txt"]);
    fixture.install_tool(None, 0);

    let output = fixture.run(&["-d", "-v", "0"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
    let mut calls = fixture.calls();
    calls.sort();
    assert_eq!(calls, ["-idq -y x bar.rar", "-idq -y x foo.part1.rar"]);
    for name in ["foo.part1.rar", "foo.part2.rar", "bar.rar"] {
        assert!(!fixture.exists(name), "{name} should be deleted");
    }
    assert!(fixture.exists("notes.txt"));
}

#[cfg(unix)]
#[test]
fn failed_group_is_reported_and_kept() {
    let fixture = Fixture::new(&["foo.part1.rar", "foo.part2.rar", "bar.rar"]);
    fixture.install_tool(Some("bar.rar"), 1);

    let output = fixture.run(&["--delete-files", "--verbosity", "1"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(fixture.calls().len(), 2);
    assert!(fixture.exists("bar.rar"));
    assert!(!fixture.exists("foo.part1.rar"));
    assert!(!fixture.exists("foo.part2.rar"));
    let stderr_lines = normalized_lines(&output.stderr);
    assert_eq!(
        stderr_lines,
        ["Failed to extract: bar.rar (exit status 1)"]
    );
}

#[cfg(unix)]
#[test]
fn quiet_run_reports_failure_only_through_exit_code() {
    let fixture = Fixture::new(&["bar.rar"]);
    fixture.install_tool(Some("bar.rar"), 4);

    let output = fixture.run(&["-v", "quiet"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stderr.is_empty());
    assert!(fixture.exists("bar.rar"));
}

#[cfg(unix)]
#[test]
fn missing_first_part_skips_group_only() {
    let fixture = Fixture::new(&["x.part2.rar", "x.part3.rar", "y.rar"]);
    fixture.install_tool(None, 0);

    let output = fixture.run(&["-d", "-v", "1"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(fixture.calls(), ["-idq -y x y.rar"]);
    assert!(fixture.exists("x.part2.rar"));
    assert!(!fixture.exists("y.rar"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No entry part found for x.part2.rar, x.part3.rar"));
}

#[cfg(unix)]
#[test]
fn password_and_interactive_shape_the_command() {
    let fixture = Fixture::new(&["secret.rar"]);
    fixture.install_tool(None, 0);

    let output = fixture.run(&["-i", "-p", "hunter2", "-v", "0"]);

    assert!(output.status.success());
    assert_eq!(fixture.calls(), ["-idq -phunter2 x secret.rar"]);
    assert!(fixture.exists("secret.rar"), "files are kept without -d");
}

#[cfg(unix)]
#[test]
fn full_verbosity_prints_summary() {
    let fixture = Fixture::new(&["foo.part1.rar", "foo.part2.rar"]);
    fixture.install_tool(None, 0);

    let output = fixture.run(&[]);

    assert!(output.status.success());
    assert_eq!(fixture.calls(), ["-y x foo.part1.rar"]);
    let stdout_lines = normalized_lines(&output.stdout);
    assert!(stdout_lines.iter().any(|l| l == "Extracting foo.part1.rar"));
    assert!(stdout_lines.iter().any(|l| l == "SUMMARY"));
    assert!(stdout_lines.iter().any(|l| l == "foo.part1.rar | 2     | extracted"));
}

#[cfg(unix)]
#[test]
fn unavailable_tool_aborts_even_when_quiet() {
    let fixture = Fixture::new(&["a.rar"]);
    let missing = fixture.scratch.path().join("no-such-unrar");
    let json = serde_json::json!({ "program": missing.to_string_lossy() });
    fs::write(fixture.settings_path(), json.to_string()).unwrap();

    let output = run_in(fixture.archives.path(), &fixture.settings_path(), &["-d", "-v", "0"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Could not run"), "stderr was: {stderr}");
    assert!(fixture.exists("a.rar"));
}
