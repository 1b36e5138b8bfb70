//! ExamSearch server binary — thin CLI shell over the library crate.

use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};

use examsearch_server::api::AppContext;
use examsearch_server::store::ExamStore;

// ---------------------------------------------------------------------------
// CLI definition (clap derive)
// ---------------------------------------------------------------------------

/// Exam lookup service — HTTP API for exam search and scheduling clients.
#[derive(Parser)]
#[command(name = "examsearch-server", version, about, long_about = None)]
struct Cli {
    /// Port to listen on
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Bind to 0.0.0.0 instead of 127.0.0.1 (localhost)
    #[arg(long)]
    bind_all: bool,

    /// JSON file with seed exam data
    #[arg(long)]
    seed: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Graceful shutdown signal
// ---------------------------------------------------------------------------

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to register SIGTERM handler");
        tokio::select! {
            _ = ctrl_c => info!("Received SIGINT, shutting down..."),
            _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
        }
    }

    #[cfg(not(unix))]
    {
        ctrl_c.await.expect("failed to listen for Ctrl+C");
        info!("Received Ctrl+C, shutting down...");
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("examsearch_server=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let store = match &cli.seed {
        Some(path) => ExamStore::from_seed_file(path).unwrap_or_else(|e| {
            error!(seed = %path.display(), error = %e, "Could not load seed data");
            std::process::exit(1);
        }),
        None => {
            warn!("No --seed file given, starting with an empty exam store");
            ExamStore::new()
        }
    };

    let ctx = AppContext::new(store);
    let app = examsearch_server::api::router(ctx);

    let bind_addr = if cli.bind_all { "0.0.0.0" } else { "127.0.0.1" };
    let listener = tokio::net::TcpListener::bind(format!("{bind_addr}:{}", cli.port))
        .await
        .unwrap_or_else(|e| {
            error!(port = cli.port, error = %e, "Could not bind to port");
            std::process::exit(1);
        });

    info!(port = cli.port, "http://{bind_addr}:{}/api/v1/exam", cli.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}
