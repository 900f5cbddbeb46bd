use crate::Result;
use std::path::{Path, PathBuf};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Filter used when none is given and `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Prefix for rolling log file names.
pub const LOG_FILE_NAME: &str = "emergency-kit.log";

/// Configures the global tracing subscriber.
pub struct Logger {
    logs_dir: PathBuf,
    name: String,
}

impl Logger {
    /// Create a logger writing to files in `logs_dir`.
    pub fn new(logs_dir: impl AsRef<Path>) -> Self {
        Self {
            logs_dir: logs_dir.as_ref().to_path_buf(),
            name: LOG_FILE_NAME.to_owned(),
        }
    }

    /// Use a different log file name prefix.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Directory for log files.
    pub fn logs_dir(&self) -> &Path {
        &self.logs_dir
    }

    /// Log files written by this logger, oldest first.
    pub fn log_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        if !self.logs_dir.exists() {
            return Ok(files);
        }
        for entry in std::fs::read_dir(&self.logs_dir)? {
            let path = entry?.path();
            let matches = path
                .file_name()
                .map(|name| name.to_string_lossy().starts_with(&self.name))
                .unwrap_or(false);
            if matches && path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    /// Log to daily rolling JSON files and to stderr.
    ///
    /// Buffered log lines are written until the returned
    /// guard is dropped.
    pub fn init_file_subscriber(
        &self,
        filter: Option<String>,
    ) -> Result<WorkerGuard> {
        std::fs::create_dir_all(&self.logs_dir)?;
        let appender = rolling::daily(&self.logs_dir, &self.name);
        let (writer, guard) = tracing_appender::non_blocking(appender);

        tracing_subscriber::registry()
            .with(env_filter(filter)?)
            .with(fmt::layer().json().with_writer(writer))
            .with(fmt::layer().without_time().with_writer(std::io::stderr))
            .try_init()?;

        tracing::debug!(
            logs_dir = %self.logs_dir.display(),
            "logger::init_file_subscriber"
        );
        Ok(guard)
    }

    /// Log to stderr only.
    pub fn init_subscriber(filter: Option<String>) -> Result<()> {
        tracing_subscriber::registry()
            .with(env_filter(filter)?)
            .with(fmt::layer().without_time().with_writer(std::io::stderr))
            .try_init()?;
        Ok(())
    }
}

fn env_filter(filter: Option<String>) -> Result<EnvFilter> {
    let directive = filter
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_FILTER.to_owned());
    Ok(EnvFilter::try_new(directive)?)
}
