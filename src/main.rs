// src/main.rs
// Attune - conversational signal analysis CLI

use anyhow::Result;
use attune::cli::{Cli, Commands, run_batch, run_conversation, run_message};
use attune::config::{AttuneConfig, DEFAULT_LOG_LEVEL, EnvConfig, Settings};
use clap::Parser;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

/// stderr subscriber; RUST_LOG wins over `level`
fn subscriber(level: &str) -> impl Subscriber + Send + Sync + use<> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish()
}

fn main() -> Result<()> {
    // Load .env files, global then project; dotenvy never overwrites a set variable
    if let Some(home) = dirs::home_dir() {
        let _ = dotenvy::from_path(home.join(".attune/.env"));
    }
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Config problems are reported through a default-level subscriber, since
    // the final level depends on the config being loaded
    let settings = tracing::subscriber::with_default(subscriber(DEFAULT_LOG_LEVEL), || {
        let file_config = AttuneConfig::load();
        let env_config = EnvConfig::from_env();
        Settings::resolve(&file_config, &env_config, cli.format)
    });

    tracing::subscriber::set_global_default(subscriber(&settings.log_level))?;

    match cli.command {
        Commands::Message { text } => run_message(&text, &settings)?,
        Commands::Conversation { file, message } => {
            run_conversation(file.as_deref(), message.as_deref(), &settings)?
        }
        Commands::Batch { file } => run_batch(&file, &settings)?,
    }

    Ok(())
}
