use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize basic console logging when file logging is disabled.
///
/// # Configuration
///
/// - **Log Level**: Controlled by `LOG_LEVEL` environment variable (default: "info")
/// - **Filtering**: `RUST_LOG` overrides everything when set
/// - **Format**: Compact format written to stderr, so terminal screens on stdout stay clean
pub fn init_basic_console_logging() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "edudash={level},edudash_store={level},edudash_cli={level}",
            level = log_level
        ))
    });

    let console_layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .with_filter(env_filter);

    // A subscriber may already be installed (tests, embedding); keep the first one.
    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}
