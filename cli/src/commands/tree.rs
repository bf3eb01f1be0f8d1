use crate::commands::shared::{OutputArgs, SourceArgs};
use crate::core::error::AppError;
use crate::debug_log;
use clap::Args;

#[derive(Debug, Args)]
pub struct TreeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn execute(args: &TreeArgs) -> Result<(), AppError> {
    let source = args.source.read()?;
    let tree = exprtree_lib::parse_source(&source)?;
    debug_log!("Parsed tree with {} nodes", tree.size());

    let formatter = crate::core::formatter::get_formatter(&args.output.output);
    print!("{}", formatter.format_tree(&tree));

    Ok(())
}
