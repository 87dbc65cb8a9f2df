//! Relic Syslog Demo
//!
//! Configures a logger, writes from several threads, dumps a binary buffer
//! and hands one game log to the console store.

use std::sync::Arc;
use std::thread;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use relic_syslog::{
    syslog, ConsoleGameLogStore, GameLog, GameLogStore, LogConfig, LogLevel, LogManager, VERSION,
};

/// Directory used when `GAME_LOG_DIR` is not set.
const DEFAULT_LOG_DIR: &str = "Logs";

fn main() -> anyhow::Result<()> {
    // Initialize diagnostics
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    info!("Relic Syslog v{}", VERSION);

    let mut config = LogConfig::from_env().context("invalid logger environment")?;
    if config.directory.as_os_str().is_empty() {
        config.directory = DEFAULT_LOG_DIR.into();
    }

    let logger = Arc::new(LogManager::with_config(config).context("failed to initialize logger")?);
    info!(
        "Logging to {} (min level {})",
        logger.directory().display(),
        logger.min_level()
    );

    // Text logs
    logger.log_str("System", LogLevel::Debug, "System initialized.");
    syslog!(logger, "System", LogLevel::Error, "Hello, {}! Your score is {}.", "Player1", 100);

    demo_concurrent(&logger);

    // Binary log
    let sample: [u8; 16] = [
        0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F,
        0x10,
    ];
    logger.log_hex("Memory", LogLevel::Debug, "Sample binary data", &sample);
    logger.log_hex(
        "Memory",
        LogLevel::Debug,
        "UTF-8 text",
        "Hello, 헥스 덤프!".as_bytes(),
    );

    // Game log
    let store = ConsoleGameLogStore::default();
    let log = GameLog::new("Server1", "Battle", "MonsterKilled", 123456)
        .with_params([1001, 2000, 500, 2500])
        .with_param_str("MonsterType: Dragon");
    store.save(&log).context("failed to save game log")?;

    info!(
        "{} records across {} categories",
        logger.last_sequence(),
        logger.category_count()
    );
    Ok(())
}

/// Several producers sharing two categories.
fn demo_concurrent(logger: &Arc<LogManager>) {
    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let logger = Arc::clone(logger);
            thread::spawn(move || {
                let category = if worker % 2 == 0 { "Battle" } else { "System" };
                for round in 0..3 {
                    syslog!(
                        logger,
                        category,
                        LogLevel::Debug,
                        "worker {} round {}",
                        worker,
                        round
                    );
                }
            })
        })
        .collect();

    for handle in handles {
        let _ = handle.join();
    }
}
