mod common;
use common::{assert_json_subset, exprtree_cmd, run_with_stdin};
use serde_json::json;

fn eval_text(expr: &str) -> Result<String, Box<dyn std::error::Error>> {
    let output = exprtree_cmd().args(["eval", "-x", expr]).output()?;
    if !output.status.success() {
        return Err(format!(
            "Command failed for {expr:?}: {}",
            String::from_utf8_lossy(&output.stderr)
        )
        .into());
    }
    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

#[test]
fn test_eval_precedence_and_associativity() -> Result<(), Box<dyn std::error::Error>> {
    for (expr, result) in [
        ("2 + 3 * 4", "14"),
        ("10 - 3 - 2", "5"),
        ("(2 + 3) * 4", "20"),
        ("7 / 2", "3.5"),
        ("1.5 + 1", "2.5"),
    ] {
        let stdout = eval_text(expr)?;
        let expected = format!("expression: {expr}\nresult: {result}\n");
        if stdout != expected {
            return Err(format!("Unexpected output for {expr:?}:\n{stdout}").into());
        }
    }
    Ok(())
}

#[test]
fn test_eval_json() -> Result<(), Box<dyn std::error::Error>> {
    let output = exprtree_cmd()
        .args(["eval", "-x", "3 + 5 * ( 10 - 4 )", "-o", "json"])
        .output()?;
    if !output.status.success() {
        return Err("Command failed".into());
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_json_subset(
        &json!({ "expression": "3 + 5 * ( 10 - 4 )", "result": 33 }),
        &stdout,
    )?;
    Ok(())
}

#[test]
fn test_eval_multiline_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let output = run_with_stdin(&["eval", "-o", "json"], "(1 +\n 2)\n* 3\n")?;
    if !output.status.success() {
        return Err("Command failed".into());
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_json_subset(
        &json!({ "expression": "(1 +\n 2)\n* 3", "result": 9 }),
        &stdout,
    )?;
    Ok(())
}

#[test]
fn test_eval_division_by_zero() -> Result<(), Box<dyn std::error::Error>> {
    let output = exprtree_cmd().args(["eval", "-x", "1 / (3 - 3)"]).output()?;

    if output.status.code() != Some(5) {
        return Err(format!("Expected exit code 5, got: {:?}", output.status.code()).into());
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    if stderr.trim() != "Error: Evaluation error: division by zero" {
        return Err(format!("Unexpected stderr: {stderr}").into());
    }
    Ok(())
}

#[test]
fn test_eval_rejects_identifiers() -> Result<(), Box<dyn std::error::Error>> {
    let output = exprtree_cmd().args(["eval", "-x", "x + 1"]).output()?;
    if output.status.code() != Some(2) {
        return Err(format!("Expected exit code 2, got: {:?}", output.status.code()).into());
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.contains("found 'x'") {
        return Err(format!("Unexpected stderr: {stderr}").into());
    }
    Ok(())
}
