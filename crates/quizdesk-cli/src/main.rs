//! quizdesk CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::group::GroupCommand;
use commands::question::QuestionCommand;
use commands::quiz::QuizCommand;
use commands::student::StudentCommand;
use commands::Session;

#[derive(Parser)]
#[command(name = "quizdesk", version, about = "Question bank and quiz builder")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Desk state file (overrides the config)
    #[arg(long, global = true)]
    state: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create starter config and example question bank
    Init,

    /// Validate question bank TOML files
    Validate {
        /// Path to bank file or directory
        #[arg(long)]
        bank: PathBuf,
    },

    /// Import questions and students from bank files
    Import {
        /// Path to bank file or directory
        #[arg(long)]
        bank: PathBuf,
    },

    /// Manage the student list
    Student {
        #[command(subcommand)]
        action: StudentCommand,
    },

    /// Manage the question bank
    Question {
        #[command(subcommand)]
        action: QuestionCommand,
    },

    /// Build, inspect and export quizzes
    Quiz {
        #[command(subcommand)]
        action: QuizCommand,
    },

    /// Manage student groups
    Group {
        #[command(subcommand)]
        action: GroupCommand,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quizdesk=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = cli.config.as_deref();
    let state = cli.state;

    let result = match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Validate { bank } => commands::validate::execute(bank),
        Commands::Import { bank } => {
            Session::open(config, state).and_then(|s| commands::import::execute(&s, bank))
        }
        Commands::Student { action } => {
            Session::open(config, state).and_then(|s| commands::student::execute(&s, action))
        }
        Commands::Question { action } => {
            Session::open(config, state).and_then(|s| commands::question::execute(&s, action))
        }
        Commands::Quiz { action } => {
            Session::open(config, state).and_then(|s| commands::quiz::execute(&s, action))
        }
        Commands::Group { action } => {
            Session::open(config, state).and_then(|s| commands::group::execute(&s, action))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
