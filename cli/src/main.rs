use clap::Parser;

mod commands;
mod core;

use commands::Commands;
use crate::core::error::AppError;
use crate::core::exit_code::ExitCode;
use crate::core::logger::Logger;

#[derive(Parser)]
#[command(name = "exprtree")]
#[command(
    about = "Tokenizes, parses and evaluates arithmetic expressions. Defaults to 'analyze' if no subcommand is provided."
)]
#[command(version)]
struct Args {
    #[arg(short, long, help = "Enable debug logging", global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    analyze_args: commands::analyze::AnalyzeArgs,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        let exit_code = ExitCode::from(&e);
        std::process::exit(exit_code.code());
    }
}

fn run() -> Result<(), AppError> {
    let args = Args::parse();
    Logger::init(args.debug);

    match args.command {
        Some(Commands::Analyze(analyze_args)) => commands::analyze::execute(&analyze_args),
        Some(Commands::Tokens(tokens_args)) => commands::tokens::execute(&tokens_args),
        Some(Commands::Tree(tree_args)) => commands::tree::execute(&tree_args),
        Some(Commands::Eval(eval_args)) => commands::eval::execute(&eval_args),
        None => commands::analyze::execute(&args.analyze_args),
    }
}
