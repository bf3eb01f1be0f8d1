#![allow(dead_code)]
use serde_json::Value;
use std::io::Write;
use std::process::{Command, Output, Stdio};

pub fn exprtree_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_exprtree"))
}

/// Runs the binary with `input` piped to stdin.
pub fn run_with_stdin(args: &[&str], input: &str) -> std::io::Result<Output> {
    let mut child = exprtree_cmd()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(input.as_bytes())?;
    }
    child.wait_with_output()
}

pub fn json_subset(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Object(exp_map), Value::Object(act_map)) => exp_map.iter().all(|(k, v)| {
            act_map
                .get(k)
                .is_some_and(|act_v| json_subset(v, act_v))
        }),
        (Value::Array(exp_arr), Value::Array(act_arr)) => {
            exp_arr.len() == act_arr.len()
                && exp_arr
                    .iter()
                    .zip(act_arr.iter())
                    .all(|(e, a)| json_subset(e, a))
        }
        (Value::String(s), _) if s == "{{*}}" => true,
        (Value::String(s), Value::String(a)) if s.starts_with("{{regex:") && s.ends_with("}}") => {
            let pattern = &s[8..s.len() - 2];
            regex::Regex::new(pattern).is_ok_and(|re| re.is_match(a))
        }
        _ => expected == actual,
    }
}

pub fn assert_json_subset(expected: &Value, stdout: &str) -> Result<(), String> {
    let actual: Value = serde_json::from_str(stdout)
        .map_err(|e| format!("Failed to parse output as JSON: {e}\n{stdout}"))?;
    if json_subset(expected, &actual) {
        Ok(())
    } else {
        Err(format!(
            "JSON mismatch!\nExpected subset:\n{}\nActual:\n{}",
            serde_json::to_string_pretty(expected).unwrap(),
            serde_json::to_string_pretty(&actual).unwrap()
        ))
    }
}
