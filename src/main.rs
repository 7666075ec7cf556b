//! Course Management API - HTTP service for creating and listing courses
//!
//! Starts an HTTP listener serving the course endpoints on top of an embedded
//! SQLite database.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::{info, Level};

use course_management_api::config::{LogFormat, LogTarget, LoggingConfig};
use course_management_api::{api, db, AppConfig, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_help();
        return Ok(());
    }

    if args.iter().any(|arg| arg == "--version" || arg == "-V") {
        println!("Course Management API {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration first (before logging, so we know log format)
    let config = AppConfig::load().context("Failed to load configuration")?;

    // The guard flushes file logs on drop and must live until shutdown
    let _log_guard = init_logging(&config.logging);

    info!("Course Management API starting up");

    ensure_data_directory(&config)?;

    info!(url = %config.database.url, "Initializing database connection");
    let pool = db::init_pool(&config.database)
        .await
        .context("Failed to initialize database")?;
    db::check_health(&pool).await?;

    let store = Arc::new(db::SqliteCourseStore::new(pool));
    let state = AppState::new(config.clone(), store);

    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address configuration")?;

    info!("Starting HTTP server on http://{}", addr);
    if config.server.enable_openapi {
        info!("OpenAPI document available at {}", api::docs::OPENAPI_PATH);
    }

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .await
        .context("HTTP server error")?;

    Ok(())
}

/// Initialize the logging/tracing infrastructure
fn init_logging(config: &LoggingConfig) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::{prelude::*, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let (file_writer, guard) = match config.target {
        LogTarget::Console => (None, None),
        LogTarget::File | LogTarget::Both => {
            let (writer, guard) = create_file_writer(config);
            (Some(writer), Some(guard))
        }
    };

    let console_layer = matches!(config.target, LogTarget::Console | LogTarget::Both)
        .then(|| format_layer(&config.format, std::io::stdout, true));
    let file_layer = file_writer.map(|writer| format_layer(&config.format, writer, false));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}

/// Build a formatting layer for the configured log format
fn format_layer<S, W>(
    format: &LogFormat,
    writer: W,
    ansi: bool,
) -> Box<dyn tracing_subscriber::Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    W: for<'w> tracing_subscriber::fmt::MakeWriter<'w> + Send + Sync + 'static,
{
    use tracing_subscriber::{fmt, Layer};

    let layer = fmt::layer().with_writer(writer).with_ansi(ansi);
    match format {
        LogFormat::Json => layer.json().with_target(true).boxed(),
        LogFormat::Compact => layer.compact().with_target(false).boxed(),
        LogFormat::Pretty => layer
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .boxed(),
    }
}

/// Create a file writer with optional daily rotation
fn create_file_writer(
    log_config: &LoggingConfig,
) -> (
    tracing_appender::non_blocking::NonBlocking,
    tracing_appender::non_blocking::WorkerGuard,
) {
    if let Err(e) = std::fs::create_dir_all(&log_config.log_dir) {
        eprintln!(
            "Warning: Failed to create log directory {:?}: {}",
            log_config.log_dir, e
        );
    }

    let file_appender = if log_config.daily_rotation {
        tracing_appender::rolling::daily(&log_config.log_dir, &log_config.log_prefix)
    } else {
        tracing_appender::rolling::never(&log_config.log_dir, &log_config.log_prefix)
    };

    tracing_appender::non_blocking(file_appender)
}

/// Ensure the directory holding the database file exists
fn ensure_data_directory(config: &AppConfig) -> Result<()> {
    if let Some(path) = db::database_file_path(&config.database.url) {
        if let Some(parent) = std::path::Path::new(path).parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).context("Failed to create data directory")?;
                info!("Created data directory: {:?}", parent);
            }
        }
    }
    Ok(())
}

/// Create the application router with all routes and middleware
fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    api::router(state)
        .layer(CompressionLayer::new())
        .layer(trace_layer)
        .layer(cors)
}

/// Print help message
fn print_help() {
    println!(
        r#"Course Management API {}

USAGE:
    course-management-api [OPTIONS]

OPTIONS:
    -h, --help              Print this help message
    -V, --version           Print version information

ENVIRONMENT:
    COURSES_CONFIG          Path to configuration file (default: config.yaml)
    COURSES_HOST            Listen address (default: 127.0.0.1)
    COURSES_PORT            Listen port (default: 5051)
    COURSES_ENABLE_OPENAPI  Serve the OpenAPI document (true/false)
    COURSES_LOG_FORMAT      Log format: pretty, compact or json
    DATABASE_URL            SQLite URL (default: sqlite://./data/courses.db)
    RUST_LOG                Log filter (default: info)

CONFIGURATION:
    The application looks for configuration files in the following order:
    1. Path specified by COURSES_CONFIG environment variable"#,
        env!("CARGO_PKG_VERSION")
    );
    for (i, path) in AppConfig::search_paths().iter().enumerate() {
        println!("    {}. {}", i + 2, path.display());
    }
}
