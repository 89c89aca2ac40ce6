//! News gateway binary.
//!
//! A backend-for-frontend gateway built with Tokio and Axum: browsers talk
//! to this process; every route forwards to the news backend API, projects
//! an allow-listed header set, and translates the JSON envelope.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                NEWS GATEWAY                   │
//!                    │                                               │
//!   Browser Request  │  ┌────────┐   ┌─────────┐   ┌─────────────┐  │
//!   ─────────────────┼─▶│  http  │──▶│ routes  │──▶│ proxy:      │  │
//!                    │  │ server │   │ (per    │   │ target →    │  │
//!                    │  └────────┘   │ resource│   │ headers →   │  │
//!                    │               └─────────┘   │ invoke      │──┼──▶ Backend API
//!                    │                             └──────┬──────┘  │
//!                    │                                    │         │
//!   Browser Response │  ┌──────────────────────────┐      ▼         │
//!   ◀────────────────┼──│ translate (envelope,     │◀─────────      │
//!                    │  │ schema defaults, cookies)│                │
//!                    │  └──────────────────────────┘                │
//!                    │                                               │
//!                    │  config · observability · lifecycle           │
//!                    └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use news_gateway::config::loader;
use news_gateway::http::HttpServer;
use news_gateway::lifecycle::Shutdown;
use news_gateway::observability::metrics;

#[derive(Parser, Debug)]
#[command(name = "news-gateway", about = "Backend gateway for the news site")]
struct Args {
    /// Path to a TOML config file. Defaults plus environment variables are
    /// used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "news_gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("news-gateway v0.1.0 starting");

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => loader::load_config(path)?,
        None => loader::from_env()?,
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        backend = %config.backend.base_url,
        development = config.is_development(),
        timeout_secs = config.backend.timeout_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown.trigger();
        }
    });

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
