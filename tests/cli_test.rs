use anyhow::Result;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn qa2csv(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_qa2csv"));
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_converts_fixed_paths() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(
        temp_dir.path().join("questions_and_answers.json"),
        r#"[{"question": "Q1", "answer": "A1"}, {"question": "Q2", "answer": "A, \"2\""}]"#,
    )?;

    let output = qa2csv(&temp_dir).output()?;

    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("data.csv"))?,
        "question,answer\r\nQ1,A1\r\nQ2,\"A, \"\"2\"\"\"\r\n"
    );
    Ok(())
}

#[test]
fn test_cli_schema_error_exits_non_zero() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(
        temp_dir.path().join("questions_and_answers.json"),
        r#"[{"question": "Q1"}]"#,
    )?;

    let output = qa2csv(&temp_dir).output()?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Record #0"));
    assert!(!temp_dir.path().join("data.csv").exists());
    Ok(())
}

#[test]
fn test_cli_missing_input_exits_with_io_code() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = qa2csv(&temp_dir).arg("--verbose").output()?;

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("questions_and_answers.json"));
    Ok(())
}
