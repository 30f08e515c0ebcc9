use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize console and file logging.
///
/// - **Log Level**: Controlled by `LOG_LEVEL` environment variable
///   (default: "info"), overridable per-target via `RUST_LOG`.
/// - **Console**: compact format with file/line locations.
/// - **File**: daily-rolling plain-text log under `storage/logs`.
pub fn init_tracing() {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};

    let log_dir = "storage/logs";
    std::fs::create_dir_all(log_dir).expect("Failed to create logs directory");

    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), log_level)));

    let console_layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "campusgate.log");

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_filter(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
