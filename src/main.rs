//! Homework Status Bot - Main Entry Point
//!
//! A Telegram bot that polls the Practicum homework-review API and
//! forwards status changes to a single chat. The program takes no
//! arguments; everything is configured through the environment.

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use homework_status_bot::config::Config;
use homework_status_bot::poller::{Poller, PollerMessage};
use homework_status_bot::practicum::PracticumClient;
use homework_status_bot::telegram::TelegramBot;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    // Load environment variables
    if let Err(e) = dotenvy::dotenv() {
        debug!("Could not load .env file: {}", e);
    }

    // Missing secrets are the only unrecoverable condition; the poll
    // loop must not start without them.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return Err(e.into());
        }
    };

    let api = PracticumClient::new(&config);
    let bot = TelegramBot::new(&config.telegram_token);
    let poller = Poller::new(api, bot, &config);

    info!(
        "Starting homework status bot (poll interval: {:?})",
        config.poll_interval
    );

    // Create poller channel
    let (poller_tx, poller_rx) = mpsc::channel::<PollerMessage>(8);

    // Spawn poller task
    let poller_handle = tokio::spawn(async move {
        poller.run(poller_rx).await;
    });

    info!("Bot is running. Use Ctrl+C to stop.");

    // Wait for Ctrl+C
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down...");
        }
    }

    // Cleanup
    let _ = poller_tx.send(PollerMessage::Shutdown).await;
    let _ = poller_handle.await;

    Ok(())
}

/// Initializes the logging subsystem.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
