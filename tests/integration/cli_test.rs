use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::Result;
use tempfile::NamedTempFile;

fn pagesim() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pagesim"))
}

/// Test a single run prints the step table and summary
#[test]
fn test_cli_run_command() -> Result<()> {
    let output = pagesim()
        .args(["--frames", "2", "--policy", "lru", "run", "1", "2", "1", "3"])
        .output()?;

    assert!(output.status.success(), "CLI run command failed");

    let output_str = String::from_utf8(output.stdout)?;
    assert!(output_str.contains("LRU page replacement with 2 frames"));
    assert!(output_str.contains("Total Page Faults: 3"));
    Ok(())
}

/// Test JSON output from a trace file
#[test]
fn test_cli_run_json_from_file() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "1 2 3")?;

    let output = pagesim()
        .args(["--frames", "2", "--format", "json", "run", "--file"])
        .arg(file.path())
        .output()?;

    assert!(output.status.success(), "CLI json run failed");

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["fault_count"], 3);
    assert_eq!(json["snapshots"][2], serde_json::json!([2, 3]));
    Ok(())
}

/// Test that invalid input is reported as an error
#[test]
fn test_cli_rejects_bad_input() -> Result<()> {
    let output = pagesim().args(["--frames", "0", "run", "1", "2"]).output()?;
    assert!(!output.status.success());

    let output = pagesim().args(["run", "1", "two"]).output()?;
    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("Invalid page 'two'"));
    Ok(())
}

/// Test the comparison table
#[test]
fn test_cli_compare_command() -> Result<()> {
    let output = pagesim().args(["compare", "1", "2", "3", "1"]).output()?;
    assert!(output.status.success(), "CLI compare failed");

    let output_str = String::from_utf8(output.stdout)?;
    assert!(output_str.contains("FIFO"));
    assert!(output_str.contains("|      3 |      3 |      3 |"));
    Ok(())
}

/// Test the shell with input redirection
#[test]
fn test_cli_shell_interaction() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let mut child = pagesim()
        .arg("shell")
        .current_dir(temp_dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;

    {
        let stdin = child.stdin.as_mut().expect("stdin is piped");
        stdin.write_all(b"frames 0\nframes 2\npolicy lru\npages 1 2 1 3\nrun\nexit\n")?;
    }

    let output = child.wait_with_output()?;
    assert!(output.status.success(), "shell exited with failure");

    let output_str = String::from_utf8(output.stdout)?;
    // A fresh directory has no history file yet
    assert!(!output_str.contains("Error loading history"));
    assert!(output_str.contains("Input error: Invalid frame count"));
    assert!(output_str.contains("policy = LRU"));
    assert!(output_str.contains("Total Page Faults: 3"));
    Ok(())
}
