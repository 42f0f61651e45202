use anyhow::Result;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tracing_appender::non_blocking;
use tracing_subscriber::EnvFilter;

use crate::data_paths::DataPaths;

pub struct LoggingConfig {
    pub data_paths: DataPaths,
    pub session_id: String,
    pub verbose: bool,
}

impl LoggingConfig {
    pub fn new(data_paths: DataPaths) -> Self {
        let session_id = generate_session_id();
        Self {
            data_paths,
            session_id,
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn log_file_path(&self) -> PathBuf {
        self.data_paths
            .logs()
            .join(format!("moneymap-{}.log", self.session_id))
    }
}

/// Initialize console + per-session file logging
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    config.data_paths.ensure_directories()?;

    let default_level = if config.verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let log_file = std::fs::File::create(config.log_file_path())
        .map_err(|e| anyhow::anyhow!("Failed to create log file: {}", e))?;
    let (file_writer, file_guard) = non_blocking(log_file);

    // The guard must outlive the process or file logging stops.
    std::mem::forget(file_guard);

    use tracing_subscriber::fmt::writer::MakeWriterExt;
    let multi_writer = std::io::stderr.and(file_writer);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(multi_writer)
        .with_ansi(true)
        .with_target(false)
        .compact()
        .init();

    tracing::info!(
        session_id = %config.session_id,
        log_file = %config.log_file_path().display(),
        "Logging initialized"
    );

    Ok(())
}

/// Generate a unique session ID with timestamp
fn generate_session_id() -> String {
    let now: DateTime<Utc> = Utc::now();
    format!("{}", now.format("%Y%m%d_%H%M%S_%3f"))
}

/// Log session end
pub fn log_session_end() {
    tracing::info!("Session ended");
}
