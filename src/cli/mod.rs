// src/cli/mod.rs
// CLI module for attune commands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::OutputFormat;

pub mod batch;
pub mod commands;
pub mod input;
pub mod render;

// Re-export command handlers
pub use commands::{run_batch, run_conversation, run_message};

#[derive(Parser)]
#[command(name = "attune")]
#[command(about = "Crisis, humor and emotional signal analysis for conversations")]
#[command(version)]
pub struct Cli {
    /// Output format (overrides ATTUNE_OUTPUT_FORMAT and config.toml)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a single message
    Message {
        /// Message text
        #[arg(index = 1)]
        text: String,
    },

    /// Analyze a conversation history (JSON array of {sender, text} turns)
    Conversation {
        /// History file (default: stdin)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// New user message to append before analyzing
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Analyze one conversation per line of a JSONL file
    Batch {
        /// JSONL file, one history array per line
        #[arg(short, long)]
        file: PathBuf,
    },
}
