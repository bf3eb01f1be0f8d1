use clap::ValueEnum;
use exprtree_lib::{render_tree, Node, Token};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

fn render_text_from_model<T: Serialize + ?Sized>(model: &T) -> String {
    let value = serde_json::to_value(model).unwrap_or(Value::Null);
    render_value(&value, 0)
}

fn render_value(value: &Value, indent: usize) -> String {
    let pad = " ".repeat(indent);
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => format!("{pad}{b}\n"),
        Value::Number(n) => format!("{pad}{n}\n"),
        Value::String(s) => s.lines().map(|line| format!("{pad}{line}\n")).collect(),
        Value::Array(arr) => arr
            .iter()
            .map(|item| match item {
                Value::Array(_) | Value::Object(_) => {
                    format!("{pad}-\n{}", render_value(item, indent + 2))
                }
                _ => format!("{pad}- {}\n", render_value(item, 0).trim_end()),
            })
            .collect(),
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| match v {
                Value::Array(_) | Value::Object(_) => {
                    format!("{pad}{k}:\n{}", render_value(v, indent + 2))
                }
                Value::String(s) => format!("{pad}{k}: {s}\n"),
                other => format!("{pad}{k}: {other}\n"),
            })
            .collect(),
    }
}

fn to_json<T: Serialize + ?Sized>(model: &T) -> String {
    match serde_json::to_string_pretty(model) {
        Ok(json) => format!("{json}\n"),
        Err(_) => "null\n".to_string(),
    }
}

pub struct Formatter {
    engine: OutputFormat,
}

impl Formatter {
    pub fn new(engine: OutputFormat) -> Self {
        Self { engine }
    }

    pub fn is_text(&self) -> bool {
        self.engine == OutputFormat::Text
    }

    /// Generic rendering for small view models.
    pub fn format<T: Serialize>(&self, model: &T) -> String {
        match self.engine {
            OutputFormat::Text => render_text_from_model(model),
            OutputFormat::Json => to_json(model),
        }
    }

    /// Token listing, one line per token in text mode.
    pub fn format_tokens(&self, tokens: &[Token], empty_msg: &str) -> String {
        match self.engine {
            OutputFormat::Text if tokens.is_empty() => format!("{empty_msg}\n"),
            OutputFormat::Text => tokens
                .iter()
                .map(|token| format!("{}\n", token.listing_line()))
                .collect(),
            OutputFormat::Json => to_json(tokens),
        }
    }

    pub fn format_tree(&self, tree: &Node) -> String {
        match self.engine {
            OutputFormat::Text => render_tree(tree),
            OutputFormat::Json => to_json(tree),
        }
    }
}

pub fn get_formatter(output_format: &OutputFormat) -> Formatter {
    Formatter::new(*output_format)
}
