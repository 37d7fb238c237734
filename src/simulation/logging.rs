//! Tracing setup for the `museum-admissions` binary
//!
//! Logs always go to stderr so the scenario report on stdout can be piped.
//! The default level only shows warnings (readmissions, refused charges);
//! `-v` adds admission totals and lottery results, `-d` adds every charge and
//! skipped exhibit. With `--log-dir` a JSON copy is written to a daily file.
//!
//! `RUST_LOG` takes precedence over the configured level.

use std::io;
use tracing::{info, Level};
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// Prefix of the daily log files written under `--log-dir`
pub const LOG_FILE_PREFIX: &str = "museum-admissions";

/// How the binary's tracing subscriber is built
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Most verbose level emitted for this crate
    pub level: Level,
    /// Emit console logs as JSON instead of pretty text
    pub json_format: bool,
    /// Directory for daily JSON log files, if any
    pub log_directory: Option<String>,
    /// Log a line when the runner span closes
    pub enable_span_events: bool,
    /// Color console output
    pub enable_ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::quiet()
    }
}

impl LoggingConfig {
    /// Warnings only
    pub fn quiet() -> Self {
        Self {
            level: Level::WARN,
            json_format: false,
            log_directory: None,
            enable_span_events: false,
            enable_ansi: true,
        }
    }

    /// Admission totals and lottery results (`-v`)
    pub fn verbose() -> Self {
        Self { level: Level::INFO, enable_span_events: true, ..Self::quiet() }
    }

    /// Every charge and skipped exhibit (`-d`)
    pub fn debug() -> Self {
        Self { level: Level::DEBUG, enable_span_events: true, ..Self::quiet() }
    }

    /// Emit console logs as JSON
    pub fn with_json_format(mut self) -> Self {
        self.json_format = true;
        self
    }

    /// Also write JSON logs to daily files in `directory`
    pub fn with_file_logging(mut self, directory: impl Into<String>) -> Self {
        self.log_directory = Some(directory.into());
        self
    }

    /// Plain console output, for when stderr is not a terminal
    pub fn without_ansi(mut self) -> Self {
        self.enable_ansi = false;
        self
    }

    fn span_events(&self) -> FmtSpan {
        if self.enable_span_events {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    fn build_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                self.level
            ))
        })
    }

    /// Install the global subscriber. Fails if one is already installed.
    pub fn init(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let registry = Registry::default().with(self.build_filter());

        let console_layer = if self.json_format {
            fmt::layer()
                .json()
                .with_writer(io::stderr)
                .with_span_events(self.span_events())
                .boxed()
        } else {
            fmt::layer()
                .pretty()
                .with_writer(io::stderr)
                .with_ansi(self.enable_ansi)
                .with_span_events(self.span_events())
                .boxed()
        };

        if let Some(log_dir) = &self.log_directory {
            let file_appender = rolling::daily(log_dir, LOG_FILE_PREFIX);
            let (file_writer, guard) = non_blocking(file_appender);
            let file_layer = fmt::layer()
                .json()
                .with_writer(file_writer)
                .with_span_events(self.span_events());

            registry.with(console_layer).with(file_layer).try_init()?;

            // The writer must outlive main
            std::mem::forget(guard);
        } else {
            registry.with(console_layer).try_init()?;
        }

        info!(level = %self.level, log_dir = ?self.log_directory, "Logging initialized");
        Ok(())
    }
}
