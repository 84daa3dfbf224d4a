//! Console plus rolling-file logging.

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_DIR_ENV: &str = "EDUDASH_LOG_DIR";
const DEFAULT_LOG_DIR: &str = "storage/logs";

/// Keeps the non-blocking file writers flushing. Drop it on shutdown.
#[derive(Debug)]
pub struct LogGuards {
    _guards: Vec<WorkerGuard>,
}

/// Whether file logging is enabled at runtime (`OBSERVABILITY_ENABLED`, default `true`).
pub fn is_observability_enabled() -> bool {
    std::env::var("OBSERVABILITY_ENABLED")
        .map(|v| !matches!(v.to_ascii_lowercase().as_str(), "false" | "0" | "no"))
        .unwrap_or(true)
}

/// Installs the global subscriber.
///
/// - console: compact, stderr, filtered by `RUST_LOG` (default `edudash=info`)
/// - `edudash.log`: errors only, daily rotation
/// - `edudash.json`: everything at `debug` and above as JSON lines, daily rotation
///
/// Falls back to [`init_basic_console_logging`](crate::init_basic_console_logging)
/// when disabled at runtime.
pub fn init_tracing() -> anyhow::Result<LogGuards> {
    if !is_observability_enabled() {
        crate::init_basic_console_logging();
        return Ok(LogGuards { _guards: vec![] });
    }

    let log_dir = std::env::var(LOG_DIR_ENV).unwrap_or_else(|_| DEFAULT_LOG_DIR.to_string());
    fs::create_dir_all(&log_dir)?;

    let console_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("edudash=info,edudash_store=info,edudash_cli=info")
    });

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .compact()
        .with_filter(console_filter);

    let (error_writer, error_guard) =
        tracing_appender::non_blocking(RollingFileAppender::new(Rotation::DAILY, &log_dir, "edudash.log"));

    let file_layer = fmt::layer()
        .with_writer(error_writer)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_filter(EnvFilter::new("error"));

    // JSON file layer for structured logs (can be ingested by Loki)
    let (json_writer, json_guard) =
        tracing_appender::non_blocking(RollingFileAppender::new(Rotation::DAILY, &log_dir, "edudash.json"));

    let json_layer = fmt::layer()
        .json()
        .with_writer(json_writer)
        .with_current_span(true)
        .with_span_list(false)
        .with_filter(EnvFilter::new("edudash=debug,edudash_store=debug"));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .with(json_layer)
        .try_init()?;

    tracing::info!(log_dir = %log_dir, "Logging initialized");

    Ok(LogGuards {
        _guards: vec![error_guard, json_guard],
    })
}
