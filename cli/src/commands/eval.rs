use crate::commands::shared::{OutputArgs, SourceArgs};
use crate::core::error::AppError;
use crate::debug_log;
use clap::Args;
use exprtree_lib::Number;
use serde::Serialize;

#[derive(Serialize)]
pub struct EvaluationView {
    pub expression: String,
    pub result: Number,
}

#[derive(Debug, Args)]
pub struct EvalArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn execute(args: &EvalArgs) -> Result<(), AppError> {
    let source = args.source.read()?;
    let tree = exprtree_lib::parse_source(&source)?;
    debug_log!("Parsed tree with {} nodes", tree.size());
    let result = exprtree_lib::evaluate(&tree)?;
    debug_log!("Result: {result}");

    let view = EvaluationView {
        expression: source.trim().to_string(),
        result,
    };
    let formatter = crate::core::formatter::get_formatter(&args.output.output);
    print!("{}", formatter.format(&view));

    Ok(())
}
