//! Structured logging and tracing for Valet
//!
//! This module provides logging functionality with support for
//! structured logging, daily log rotation, and integration with the
//! tracing ecosystem.

use crate::config::LoggingConfig;
use crate::error::{Result, ValetError};
use once_cell::sync::OnceCell;
use std::path::Path;
use std::sync::Once;
use tracing::{Level, Subscriber, debug, error, info, trace, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

// Keep the non-blocking worker guard alive for the entire process lifetime
static LOG_GUARD: OnceCell<WorkerGuard> = OnceCell::new();
static INIT_ONCE: Once = Once::new();
static INIT_ERROR: OnceCell<String> = OnceCell::new();

/// Initialize logging system based on configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    INIT_ONCE.call_once(|| {
        let init_result = (|| -> Result<()> {
            let level = parse_log_level(&config.level)?;
            let filter = build_env_filter(level);

            if should_use_console_only() {
                init_console_only_logging(filter, config.json_format);
                return Ok(());
            }

            init_file_logging(config, filter)
        })();

        if let Err(e) = init_result {
            let _ = INIT_ERROR.set(e.to_string());
        }
    });

    if let Some(err) = INIT_ERROR.get() {
        return Err(ValetError::config(err.clone()));
    }
    Ok(())
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| format!("valet={}", level).into())
}

fn should_use_console_only() -> bool {
    cfg!(test) || std::env::var_os("VALET_DISABLE_FILE_LOG").is_some()
}

/// Event formatting shared by every sink: no targets, thread ids or
/// source locations, optionally JSON.
fn fmt_layer<S>(writer: BoxMakeWriter, json_format: bool) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let base = fmt::layer()
        .with_writer(writer)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false);
    if json_format {
        base.json().boxed()
    } else {
        base.boxed()
    }
}

// Console output goes to stderr so the report rendering keeps stdout
// to itself.
fn stderr_writer() -> BoxMakeWriter {
    BoxMakeWriter::new(std::io::stderr)
}

fn init_console_only_logging(filter: EnvFilter, json_format: bool) {
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer(stderr_writer(), json_format))
        .init();

    info!("Logging initialized - console-only");
}

fn init_file_logging(config: &LoggingConfig, filter: EnvFilter) -> Result<()> {
    let (writer, guard) = non_blocking(build_file_appender(config)?);
    let _ = LOG_GUARD.set(guard);

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer(BoxMakeWriter::new(writer), config.json_format));

    if config.console_output {
        subscriber
            .with(fmt_layer(stderr_writer(), config.json_format))
            .init();
    } else {
        subscriber.init();
    }

    info!(
        "Logging initialized - level: {}, file: {}",
        config.level, config.file
    );
    Ok(())
}

/// Build the daily-rolling appender under the configured log location.
///
/// `config.file` may name the log directory directly or a file inside
/// it, in which case the parent directory is used. An existing
/// directory is always used as-is, even with a dot in its name.
fn build_file_appender(config: &LoggingConfig) -> Result<rolling::RollingFileAppender> {
    let path = Path::new(&config.file);
    let directory = if path.is_dir() {
        path
    } else if path.extension().is_some() {
        path.parent().unwrap_or(path)
    } else {
        path
    };

    rolling::Builder::new()
        .rotation(rolling::Rotation::DAILY)
        .filename_prefix("valet")
        .filename_suffix("log")
        .max_log_files(config.backup_count as usize)
        .build(directory)
        .map_err(|e| ValetError::io(format!("Failed to create log file appender: {}", e)))
}

/// Parse log level string to tracing Level
fn parse_log_level(level_str: &str) -> Result<Level> {
    match level_str.to_uppercase().as_str() {
        "TRACE" => Ok(Level::TRACE),
        "DEBUG" => Ok(Level::DEBUG),
        "INFO" => Ok(Level::INFO),
        "WARN" => Ok(Level::WARN),
        "ERROR" => Ok(Level::ERROR),
        _ => Err(ValetError::config(format!(
            "Invalid log level: {}",
            level_str
        ))),
    }
}

/// Key/value context attached to every message a logger emits.
#[derive(Debug, Clone, Default)]
pub struct LogContext {
    /// Component name (e.g., "vehicle", "fleet", "journal")
    pub component: String,

    /// Plate of the vehicle the messages concern
    pub vehicle: Option<String>,

    /// Session ID for tracking a specific stay
    pub session_id: Option<String>,

    /// Additional context fields, logged in insertion order
    pub extra_fields: Vec<(String, String)>,
}

impl LogContext {
    /// Create a new log context
    pub fn new(component: &str) -> Self {
        Self {
            component: component.to_string(),
            ..Self::default()
        }
    }

    /// Set vehicle plate
    pub fn with_vehicle(mut self, plate: String) -> Self {
        self.vehicle = Some(plate);
        self
    }

    /// Set session ID
    pub fn with_session_id(mut self, session_id: String) -> Self {
        self.session_id = Some(session_id);
        self
    }

    /// Add extra field
    pub fn with_field(mut self, key: &str, value: String) -> Self {
        self.extra_fields.push((key.to_string(), value));
        self
    }

    /// Render the context as comma-joined `key=value` pairs.
    fn render(&self) -> String {
        let mut parts = vec![format!("component={}", self.component)];
        if let Some(ref plate) = self.vehicle {
            parts.push(format!("vehicle={}", plate));
        }
        if let Some(ref session_id) = self.session_id {
            parts.push(format!("session_id={}", session_id));
        }
        for (key, value) in &self.extra_fields {
            parts.push(format!("{}={}", key, value));
        }
        parts.join(",")
    }
}

/// Component logger that stamps a fixed context onto every message.
///
/// The context is rendered once at construction; emitting a message is
/// a plain tracing event with the prebuilt field string attached.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    fields: String,
}

impl StructuredLogger {
    /// Create a new structured logger with context
    pub fn new(context: LogContext) -> Self {
        Self {
            fields: context.render(),
        }
    }

    /// Log an info message with context
    pub fn info(&self, message: &str) {
        info!(fields = %self.fields, "{}", message);
    }

    /// Log a warning message with context
    pub fn warn(&self, message: &str) {
        warn!(fields = %self.fields, "{}", message);
    }

    /// Log an error message with context
    pub fn error(&self, message: &str) {
        error!(fields = %self.fields, "{}", message);
    }

    /// Log a debug message with context
    pub fn debug(&self, message: &str) {
        debug!(fields = %self.fields, "{}", message);
    }

    /// Log a trace message with context
    pub fn trace(&self, message: &str) {
        trace!(fields = %self.fields, "{}", message);
    }
}

/// Create a logger for a specific component
pub fn get_logger(component: &str) -> StructuredLogger {
    StructuredLogger::new(LogContext::new(component))
}

/// Create a logger with full context
pub fn get_logger_with_context(context: LogContext) -> StructuredLogger {
    StructuredLogger::new(context)
}
