//! CLI Adapter.

mod options;
mod plan;

use crate::domain::AppError;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "classplan")]
#[command(version)]
#[command(
    about = "Answer a few questions and get a class plan from an LLM",
    long_about = None
)]
struct Cli {
    /// Enable debug logging (overridden by CLASSPLAN_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a class plan (prompts for answers not given as flags)
    #[clap(visible_alias = "p")]
    Plan(plan::PlanArgs),
    /// List the accepted class level, modality, and purpose values
    #[clap(visible_alias = "o")]
    Options,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    crate::app::logging::init(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Plan(args) => plan::run_plan(args),
        Commands::Options => {
            options::run_options();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
