//! NicheHunt shell
//!
//! Interactive front end of the simulated niche idea finder:
//! - Demo sign-in persisted on this device
//! - Simulated niche hunts with filters and a free-plan limit
//! - Search history, saved ideas and plan pricing

use std::io::Write;
use std::sync::Arc;

use app_store::{AppStore, StoreSettings};
use auth::{FileStorage, KeyValueStorage, LocalUserPersistence, MemoryStorage};
use niche_search::{NicheSearchEngine, SimulatedLatency};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod events;
mod render;
mod shell;

use config::NicheHuntConfig;
use shell::{LineOutcome, Shell};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = NicheHuntConfig::load()?;

    // Initialize tracing; stdout belongs to the shell
    let log_level = match config.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "nichehunt={level},app_store={level},auth={level},niche_search={level}",
                    level = log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        data_dir = %config.data_dir.display(),
        persist_session = config.persist_session,
        "Starting NicheHunt"
    );

    let storage: Arc<dyn KeyValueStorage> = if config.persist_session {
        Arc::new(FileStorage::new(&config.data_dir))
    } else {
        Arc::new(MemoryStorage::new())
    };
    let persistence = Arc::new(LocalUserPersistence::new(storage));
    let store = Arc::new(AppStore::with_settings(
        persistence,
        StoreSettings {
            history_limit: config.history_limit,
        },
    ));

    // Log store changes
    tokio::spawn(events::log_store_events(store.subscribe()));

    let engine = NicheSearchEngine::new()
        .with_latency(Arc::new(SimulatedLatency::from_millis(config.search_latency_ms)));
    let mut shell = Shell::new(
        store,
        Arc::new(engine),
        Arc::new(SimulatedLatency::from_millis(config.auth_latency_ms)),
    );

    println!("NicheHunt: find your next niche. Type `help` for commands, `quit` to leave.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{}", shell.prompt());
        std::io::stdout().flush()?;

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = signal::ctrl_c() => {
                info!("Received shutdown signal");
                println!();
                break;
            }
        };

        // EOF
        let Some(line) = line else {
            println!();
            break;
        };

        match shell.run_line(&line).await {
            LineOutcome::Output(output) if output.is_empty() => {}
            LineOutcome::Output(output) => println!("{}", output),
            LineOutcome::Quit => break,
        }
    }

    info!("NicheHunt stopped");
    Ok(())
}
