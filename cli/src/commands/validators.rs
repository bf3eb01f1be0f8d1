use std::path::Path;

pub fn validate_path_exists(path: &str) -> Result<String, String> {
    if Path::new(path).exists() {
        Ok(path.to_string())
    } else {
        Err(format!("Path does not exist: {path}"))
    }
}

pub fn validate_expression(expr: &str) -> Result<String, String> {
    if expr.trim().is_empty() {
        return Err("Expression must not be empty".to_string());
    }
    Ok(expr.to_string())
}
