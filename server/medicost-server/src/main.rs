use clap::Parser;
use colored::*;
use std::{env, net::SocketAddr, path::PathBuf};
use tracing::info;

use config_engine::{ConfigEngine, EngineConfig};
use error_common::{ErrorContext, ErrorReporter, MediCostError, Result};
use logger_redacted::LoggerConfig;
use medicost_server::{create_app, MediCostServer};

const DEFAULT_CONFIG_FILE: &str = "medicost.yaml";

/// MediCost HTTP Server
#[derive(Parser, Debug)]
#[command(name = "medicost-server")]
#[command(about = "Patient cost estimate HTTP API server")]
struct Args {
    /// Server bind address (overrides configuration)
    #[arg(long, env = "MEDICOST_HOST")]
    host: Option<String>,

    /// Server port (overrides configuration)
    #[arg(short, long, env = "MEDICOST_PORT")]
    port: Option<u16>,

    /// Configuration file path; medicost.yaml is used if present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            // Logging is not configured yet; fall back to defaults so the failure is visible.
            logger_redacted::init(&LoggerConfig::default()).ok();
            let config_path = args
                .config
                .as_ref()
                .map_or_else(|| DEFAULT_CONFIG_FILE.to_string(), |path| path.display().to_string());
            let context = ErrorContext::new()
                .with_component("startup")
                .add_context("config_path", config_path);
            ErrorReporter::new().report(&e, context);
            return Err(e);
        }
    };

    logger_redacted::init(&config.logging).map_err(|e| MediCostError::ConfigError(e.to_string()))?;
    if !config.logging.json {
        print_startup_banner();
    }

    info!("🏥 {}", "Starting MediCost Engine HTTP Server".bright_cyan());
    info!("📋 Version: {}", env!("CARGO_PKG_VERSION").bright_white());

    let host = config.server.host.clone();
    let port = config.server.port;
    let server = MediCostServer::new(config)?;
    info!(
        procedures = server.estimator.tables().procedures.len(),
        departments = server.estimator.tables().departments.len(),
        insurance_types = server.estimator.tables().insurance.len(),
        strict_catalog = server.estimator.is_strict(),
        "Pricing tables loaded"
    );

    let app = create_app(server);

    let listener = tokio::net::TcpListener::bind((host.as_str(), port))
        .await
        .map_err(|e| MediCostError::NetworkError(format!("Failed to bind to {host}:{port}: {e}")))?;
    let addr: SocketAddr = listener
        .local_addr()
        .map_err(|e| MediCostError::NetworkError(e.to_string()))?;

    info!("🚀 {}", format!("MediCost server running on http://{addr}").bright_green());
    info!("📋 {}", format!("Health check available at: http://{addr}/health").bright_blue());
    info!("💵 {}", format!("Estimates available at: http://{addr}/api/estimate").bright_blue());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| MediCostError::ServerError(format!("HTTP server error: {e}")))?;

    info!("👋 {}", "MediCost server stopped".bright_yellow());
    Ok(())
}

fn load_config(args: &Args) -> Result<EngineConfig> {
    let engine = match &args.config {
        Some(path) => ConfigEngine::new().with_file(path, true),
        None => ConfigEngine::new().with_file(DEFAULT_CONFIG_FILE, false),
    };
    let mut config = engine
        .load()
        .map_err(|e| MediCostError::ConfigError(e.to_string()))?;

    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if args.verbose {
        config.logging.log_level = "debug".to_string();
    }
    if env::var("MEDICOST_ENV").is_ok_and(|env| env == "production") {
        config.logging.json = true;
    }

    Ok(config)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, draining connections");
}

fn print_startup_banner() {
    println!("{}", "╔══════════════════════════════════════════════════════════════╗".bright_cyan());
    println!("{}", "║                      🏥 MEDICOST ENGINE                      ║".bright_cyan());
    println!("{}", "║                 Patient Cost Estimate Service                ║".bright_cyan());
    println!("{}", "╚══════════════════════════════════════════════════════════════╝".bright_cyan());
    println!();
}
