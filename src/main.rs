use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use imposter::{config::AppConfig, driver, state::GameState};

fn main() {
    // Load .env file if present (before any env var reads)
    if let Err(e) = dotenvy::dotenv() {
        // Not an error if .env doesn't exist, only log if it's a different issue
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    // stdout carries protocol events, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "imposter=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = AppConfig::from_env();
    let mut state = match GameState::from_config(&config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to start session: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Reading commands from stdin");
    if let Err(e) = driver::run_session(&mut state, io::stdin().lock(), io::stdout().lock()) {
        tracing::error!("Session aborted: {}", e);
        std::process::exit(1);
    }
}
