use crate::commands::shared::{OutputArgs, SourceArgs};
use crate::core::error::AppError;
use crate::debug_log;
use clap::Args;

#[derive(Debug, Args)]
pub struct TokensArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn execute(args: &TokensArgs) -> Result<(), AppError> {
    let source = args.source.read()?;
    let tokens = exprtree_lib::tokenize(&source)?;
    debug_log!("Tokenized {} tokens", tokens.len());

    let formatter = crate::core::formatter::get_formatter(&args.output.output);
    print!("{}", formatter.format_tokens(&tokens, "No tokens found"));

    Ok(())
}
