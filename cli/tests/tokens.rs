mod common;
use common::{assert_json_subset, exprtree_cmd, run_with_stdin};
use serde_json::json;

#[test]
fn test_tokens_text_listing() -> Result<(), Box<dyn std::error::Error>> {
    let output = exprtree_cmd()
        .args(["tokens", "-x", "if x = 10.\n  print(x)"])
        .output()?;

    if !output.status.success() {
        return Err(format!(
            "Command failed: {}",
            String::from_utf8_lossy(&output.stderr)
        )
        .into());
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected = "\
Token: if | Tipo: Keyword | Línea: 1, Columna: 0
Token: x | Tipo: Identifier | Línea: 1, Columna: 3
Token: = | Tipo: Delimiter | Línea: 1, Columna: 5
Token: 10.0 | Tipo: Number | Línea: 1, Columna: 7
Token: print | Tipo: Keyword | Línea: 2, Columna: 2
Token: ( | Tipo: Delimiter | Línea: 2, Columna: 7
Token: x | Tipo: Identifier | Línea: 2, Columna: 8
Token: ) | Tipo: Delimiter | Línea: 2, Columna: 9
";
    if stdout != expected {
        return Err(format!("Unexpected listing:\n{stdout}").into());
    }
    Ok(())
}

#[test]
fn test_tokens_json() -> Result<(), Box<dyn std::error::Error>> {
    let output = exprtree_cmd()
        .args(["tokens", "-x", "2 * y", "--output", "JSON"])
        .output()?;

    if !output.status.success() {
        return Err("Command failed".into());
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected = json!([
        { "kind": "Number", "value": 2, "line": 1, "column": 0 },
        { "kind": "Operator", "value": "*", "line": 1, "column": 2 },
        { "kind": "Identifier", "value": "y", "lexeme": "y", "line": 1, "column": 4 }
    ]);
    assert_json_subset(&expected, &stdout)?;
    Ok(())
}

#[test]
fn test_tokens_from_stdin_with_crlf() -> Result<(), Box<dyn std::error::Error>> {
    let output = run_with_stdin(&["tokens", "-o", "json"], "1\r\n+ 2\r\n")?;
    if !output.status.success() {
        return Err(format!(
            "Command failed: {}",
            String::from_utf8_lossy(&output.stderr)
        )
        .into());
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected = json!([
        { "value": 1, "line": 1, "column": 0 },
        { "value": "+", "line": 2, "column": 0 },
        { "value": 2, "line": 2, "column": 2 }
    ]);
    assert_json_subset(&expected, &stdout)?;
    Ok(())
}

#[test]
fn test_tokens_empty_input() -> Result<(), Box<dyn std::error::Error>> {
    let output = run_with_stdin(&["tokens"], " \n\t\n")?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    if !output.status.success() || stdout.trim() != "No tokens found" {
        return Err(format!("Unexpected output: {stdout}").into());
    }
    Ok(())
}

#[test]
fn test_tokens_lexical_error() -> Result<(), Box<dyn std::error::Error>> {
    let output = exprtree_cmd().args(["tokens", "-x", "3 & 4"]).output()?;

    if output.status.code() != Some(3) {
        return Err(format!("Expected exit code 3, got: {:?}", output.status.code()).into());
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.contains("Lexical error at line 1, column 2: unexpected character '&'") {
        return Err(format!("Unexpected stderr: {stderr}").into());
    }
    if !output.stdout.is_empty() {
        return Err("No partial token list should be printed".into());
    }
    Ok(())
}

#[test]
fn test_tokens_missing_file() -> Result<(), Box<dyn std::error::Error>> {
    let output = exprtree_cmd()
        .args(["tokens", "-s", "tests/does_not_exist.txt"])
        .output()?;
    if output.status.code() != Some(2) {
        return Err(format!("Expected exit code 2, got: {:?}", output.status.code()).into());
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.contains("Path does not exist") {
        return Err(format!("Unexpected stderr: {stderr}").into());
    }
    Ok(())
}
