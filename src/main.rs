//! Assistant Bot - Main entry point
//!
//! Runs the interactive contact and birthday assistant on stdin/stdout.

use anyhow::Result;
use assistant_bot::{run_repl, AssistantBot, Config, Metrics};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only, stdout belongs to the conversation)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        upcoming_days = config.upcoming_days,
        "Configuration loaded successfully"
    );

    let metrics = Metrics::new();
    let mut bot = AssistantBot::in_memory(config.upcoming_days).with_metrics(metrics.clone());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(e) = run_repl(&mut bot, &config.prompt, stdin.lock(), &mut stdout) {
        error!("Session aborted: {}", e);
        return Err(e.into());
    }

    info!(summary = ?metrics.summary(), "Assistant session finished");
    Ok(())
}
