use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands, RouteArgs};
use crate::prompt::Prompter;

mod cli;
mod config;
mod prompt;
mod report;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for `--json`
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    match cli.command {
        Some(Commands::Route(args)) => cli::run_route(&args, &mut prompter),
        Some(Commands::Info(args)) => cli::run_info(&args, &mut prompter),
        // Without a subcommand everything is asked interactively
        None => {
            prompter.say("--- Apex Pathfinder ---")?;
            cli::run_route(&RouteArgs::default(), &mut prompter)
        }
    }
}
