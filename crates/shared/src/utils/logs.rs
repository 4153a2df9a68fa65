use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_sdk::logs::SdkLoggerProvider;
use tracing_appender::{
    non_blocking,
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global subscriber.
///
/// Console output honours `RUST_LOG` (default `info`). A JSON file layer is
/// added when `enable_file` is set, and an OpenTelemetry bridge when a logger
/// provider is given. The returned guard must live as long as the process.
pub fn init_logger(
    sdk_logger_provider: Option<&SdkLoggerProvider>,
    component: &str,
    is_dev: bool,
    enable_file: bool,
) -> Option<WorkerGuard> {
    let mut guard = None;

    let file_layer = if enable_file {
        let log_dir = if is_dev { "./logs" } else { "/var/log/app" };
        let file_name = format!("rust_app_{component}.log");
        let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, file_name);
        let (file_writer, file_guard) = non_blocking(file_appender);
        guard = Some(file_guard);

        Some(
            fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .json()
                .with_filter(EnvFilter::new("info")),
        )
    } else {
        None
    };

    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = if is_dev {
        fmt::layer()
            .pretty()
            .with_thread_names(true)
            .with_ansi(true)
            .with_filter(console_filter)
            .boxed()
    } else {
        fmt::layer()
            .with_target(false)
            .with_filter(console_filter)
            .boxed()
    };

    let otel_layer = sdk_logger_provider.map(|provider| {
        let otel_filter = EnvFilter::new("info")
            .add_directive("hyper=off".parse().expect("static directive"))
            .add_directive("opentelemetry=off".parse().expect("static directive"))
            .add_directive("tonic=off".parse().expect("static directive"))
            .add_directive("h2=off".parse().expect("static directive"))
            .add_directive("mongodb=off".parse().expect("static directive"));

        OpenTelemetryTracingBridge::new(provider).with_filter(otel_filter)
    });

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .with(otel_layer)
        .init();

    guard
}
