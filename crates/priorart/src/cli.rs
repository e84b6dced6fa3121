use clap::{Parser, Subcommand, ValueEnum};
use priorart_signal::Depth;

#[derive(Parser)]
#[command(name = "priorart")]
#[command(version)]
#[command(about = "Pre-build reality check for product ideas")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract registry search queries from an idea
    Keywords {
        /// Idea text (English, Chinese, or mixed)
        idea: String,
    },

    /// Run a full reality check over fetched source results
    Check {
        /// Idea text (English, Chinese, or mixed)
        idea: String,

        /// JSON file of source results produced by the adapters
        #[arg(short, long)]
        results: Option<String>,

        /// Check depth
        #[arg(long, value_enum, default_value = "quick")]
        depth: DepthArg,

        /// Pretty-print the report JSON
        #[arg(long)]
        pretty: bool,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print version information
    Version,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DepthArg {
    Quick,
    Deep,
}

impl From<DepthArg> for Depth {
    fn from(arg: DepthArg) -> Self {
        match arg {
            DepthArg::Quick => Depth::Quick,
            DepthArg::Deep => Depth::Deep,
        }
    }
}
