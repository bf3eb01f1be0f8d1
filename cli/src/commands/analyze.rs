use crate::commands::shared::{OutputArgs, SourceArgs};
use crate::core::error::AppError;
use crate::debug_log;
use clap::Args;
use exprtree_lib::{Node, Token};
use serde::Serialize;

#[derive(Serialize)]
pub struct AnalysisView<'a> {
    pub tokens: &'a [Token],
    pub tree: &'a Node,
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Lexical listing followed by the syntax tree.
///
/// In text mode the listing is printed before parsing, so a syntax error
/// still shows the tokens that were read.
pub fn execute(args: &AnalyzeArgs) -> Result<(), AppError> {
    let source = args.source.read()?;
    let tokens = exprtree_lib::tokenize(&source)?;
    debug_log!("Tokenized {} tokens", tokens.len());

    let formatter = crate::core::formatter::get_formatter(&args.output.output);
    if formatter.is_text() {
        println!("Lexical analysis:");
        print!("{}", formatter.format_tokens(&tokens, "No tokens found"));
        println!();
    }

    let tree = exprtree_lib::parse(&tokens)?;
    debug_log!("Parsed tree with {} nodes", tree.size());

    if formatter.is_text() {
        println!("Syntax tree:");
        print!("{}", formatter.format_tree(&tree));
    } else {
        let view = AnalysisView {
            tokens: &tokens,
            tree: &tree,
        };
        print!("{}", formatter.format(&view));
    }

    Ok(())
}
