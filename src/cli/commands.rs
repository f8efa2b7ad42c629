use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `paladar` - deterministic restaurant-review rating assistant.
#[derive(Parser, Debug)]
#[command(name = "paladar")]
#[command(version = "0.1.0")]
#[command(about = "Answer questions about a restaurant's average rating.", long_about = None)]
pub struct Cli {
    /// Review corpus file (overrides the configured path)
    #[arg(long)]
    pub dataset: Option<PathBuf>,

    /// Decimal places for the displayed rating (overrides the config)
    #[arg(long)]
    pub decimals: Option<u8>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Answer a free-text question mentioning a restaurant
    Ask {
        /// The question, e.g. "How good is Bob's?"
        question: String,
    },

    /// Rate one restaurant by name
    Rate {
        /// Restaurant name, matched case-insensitively
        name: String,
    },

    /// List the registered tool operations and their schemas
    Tools,
}
