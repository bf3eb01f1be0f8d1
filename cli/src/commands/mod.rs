pub mod analyze;
pub mod eval;
pub mod shared;
pub mod tokens;
pub mod tree;
pub mod validators;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List the tokens and print the syntax tree")]
    Analyze(analyze::AnalyzeArgs),
    #[command(about = "List the tokens")]
    Tokens(tokens::TokensArgs),
    #[command(about = "Print the syntax tree")]
    Tree(tree::TreeArgs),
    #[command(about = "Evaluate the expression")]
    Eval(eval::EvalArgs),
}
