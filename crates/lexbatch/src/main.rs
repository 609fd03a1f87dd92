//! lexbatch command-line launcher
//!
//! - `train`: upsert intents from a corpus and attach them to a bot
//! - `test`: replay the corpus through a bot and report accuracy
//! - `help`: usage

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use lexbatch::Mode;
use lexbatch_logging::{init_logging, LogConfig};
use std::process::ExitCode;

mod cli;

#[derive(Parser, Debug)]
#[command(
    name = "lexbatch",
    about = "Train and evaluate Amazon Lex intents from a labeled utterance corpus"
)]
struct Cli {
    /// Enable verbose logging (info/debug to stderr)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Upload intents and sample utterances, then attach them to a bot
    Train(cli::run::RunArgs),

    /// Send every utterance to the bot and score the predicted intents
    Test(cli::run::RunArgs),
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // `help` exits cleanly; anything else is a usage error.
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    let log_guard = init_logging(LogConfig {
        app_name: "lexbatch",
        verbose: cli.verbose,
    });
    if let Some(dir) = &log_guard.log_dir {
        tracing::debug!(log_dir = %dir.display(), "File logging enabled");
    }

    let result = match cli.command {
        Commands::Train(args) => cli::run::run(Mode::Train, args),
        Commands::Test(args) => cli::run::run(Mode::Test, args),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:?}", err);
            ExitCode::from(1)
        }
    }
}
