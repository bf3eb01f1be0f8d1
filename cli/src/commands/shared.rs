use crate::commands::validators;
use crate::core::error::AppError;
use crate::core::formatter::OutputFormat;
use crate::core::logger::Logger;
use crate::debug_log;
use clap::Args;
use std::io::Read;

#[derive(Debug, Args)]
pub struct OutputArgs {
    #[arg(
        short = 'o',
        long = "output",
        help = "Output format: text or json",
        default_value_t = OutputFormat::Text,
        value_enum,
        ignore_case = true
    )]
    pub output: OutputFormat,
}

#[derive(Debug, Args)]
pub struct SourceArgs {
    #[arg(
        short = 's',
        long = "source",
        help = "Path to a file containing the expression (reads stdin when omitted)",
        value_parser = validators::validate_path_exists,
        conflicts_with = "expr"
    )]
    pub source: Option<String>,

    #[arg(
        short = 'x',
        long = "expr",
        help = "Expression text to analyze",
        value_parser = validators::validate_expression
    )]
    pub expr: Option<String>,
}

impl SourceArgs {
    /// Loads the source text from the file, the inline expression or stdin.
    pub fn read(&self) -> Result<String, AppError> {
        let text = if let Some(path) = &self.source {
            debug_log!("Reading source from {path}");
            std::fs::read_to_string(path)?
        } else if let Some(expr) = &self.expr {
            expr.clone()
        } else {
            Logger::debug("Reading source from stdin");
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        };
        debug_log!("Source: {} bytes", text.len());
        Ok(normalize_line_endings(text))
    }
}

fn normalize_line_endings(text: String) -> String {
    if text.contains("\r\n") {
        text.replace("\r\n", "\n")
    } else {
        text
    }
}
