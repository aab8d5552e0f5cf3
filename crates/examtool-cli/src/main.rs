//! examtool CLI — take one of the built-in exams at the console.

use std::process;

use clap::{Parser, Subcommand};
use examtool_core::ExamKind;

mod commands;

#[derive(Parser)]
#[command(name = "examtool", version, about = "Console exam runner")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Take an exam (the default)
    Take {
        /// Skip the selection prompt: "practice" or "final"
        #[arg(long)]
        exam: Option<ExamKind>,

        /// Result format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// List the built-in exams
    List,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("examtool=warn".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Take {
        exam: None,
        format: "text".to_string(),
    }) {
        Commands::Take { exam, format } => commands::take::execute(exam, format),
        Commands::List => commands::list::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
