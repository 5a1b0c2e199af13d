//! File-based logging initialization

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ClientConfig;

pub const LOG_FILE_NAME: &str = "wallet-client.log";

/// Initialize the logging system.
///
/// Sets up:
/// - Daily-rotated file log in `config.log_dir`, without ANSI codes
/// - Optional stderr mirror (`WALLET_LOG_STDERR=1`)
/// - Filter from `RUST_LOG`, falling back to `config.log_level`
///
/// The returned guard flushes the non-blocking writer on drop; keep it alive
/// for the lifetime of the program. Returns `None` when the log directory
/// cannot be created, in which case logging goes to stderr only.
pub fn init(config: &ClientConfig) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("wallet_client=info,warn"));

    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init();
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    let stderr_layer = config
        .log_to_stderr
        .then(|| fmt::layer().with_writer(std::io::stderr).with_target(false));

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: a global tracing subscriber was already installed");
    }

    tracing::info!(
        log_dir = %config.log_dir.display(),
        log_level = %config.log_level,
        api_base_url = %config.api_base_url,
        "Logging initialized"
    );

    Some(guard)
}
