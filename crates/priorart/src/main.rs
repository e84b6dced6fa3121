mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Keywords { idea } => commands::keywords::run(&idea),
        Commands::Check {
            idea,
            results,
            depth,
            pretty,
            output,
        } => commands::check::run(&idea, results.as_deref(), depth.into(), pretty, output.as_deref()),
        Commands::Version => commands::version::run(),
    }
}
