use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::{anyhow, Result};

fn run_session(script: &str) -> Result<(bool, String)> {
    let binary_path = env!("CARGO_BIN_EXE_bank-console");

    let mut child = Command::new(binary_path)
        .args(["--pause-ms", "0"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    child.stdin.take()
        .ok_or_else(|| anyhow!("stdin was not piped"))?
        .write_all(script.as_bytes())?;

    let output = child.wait_with_output()?;

    Ok((output.status.success(), String::from_utf8(output.stdout)?))
}

#[test]
fn test_cli_runs_full_session_and_exits_on_seven() -> Result<()> {
    let (success, stdout) = run_session("Jane Doe\n1\nsaving\n100\n1\ncurrent\n0\n3\n1001\n500\n6\n1000\n4\n1000\n4\n1001\n7\n")?;

    assert!(success);
    assert!(stdout.contains("Your New Account ID is: 1000"));
    assert!(stdout.contains("Your New Account ID is: 1001"));
    assert!(stdout.contains(" Withdrawal successful. New Balance: $-500.00"));
    assert!(stdout.contains(" Account ID 1000 Balance: $102.00"));
    assert!(stdout.contains(" Account ID 1001 Balance: $-500.00"));
    assert!(stdout.contains("Goodbye!"));

    Ok(())
}

#[test]
fn test_cli_exits_successfully_when_stdin_closes() -> Result<()> {
    let (success, stdout) = run_session("Jane\n")?;

    assert!(success);
    assert!(stdout.contains("Welcome, Jane!"));

    Ok(())
}

#[test]
fn test_cli_rejects_unknown_arguments() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_bank-console");
    let output = Command::new(binary_path).arg("accounts.csv").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)?.contains("Usage: bank-console"));

    Ok(())
}
