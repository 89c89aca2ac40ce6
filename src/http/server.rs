//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with one route per logical resource
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener
//! - Serve with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::GatewayConfig;
use crate::routes;

/// Application state injected into handlers.
///
/// Immutable after startup: handlers share the config and the outbound
/// client, nothing else.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub client: reqwest::Client,
}

/// HTTP server for the news gateway.
pub struct HttpServer {
    router: Router,
    config: Arc<GatewayConfig>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GatewayConfig) -> Self {
        let config = Arc::new(config);
        let state = AppState {
            config: config.clone(),
            client: reqwest::Client::new(),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all resource routes and middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        // Overall request timeout sits above the backend timeout so the
        // invoker's own deadline fires first and classifies as 503.
        let request_timeout = Duration::from_secs(config.backend.timeout_secs + 3);

        Router::new()
            .route("/api/auth/session", get(routes::auth::session))
            .route("/api/auth/logout", post(routes::auth::logout))
            .route(
                "/api/quotes",
                get(routes::quotes::list)
                    .delete(routes::quotes::remove)
                    .options(routes::quotes::preflight),
            )
            .route("/api/search", get(routes::search::search))
            .route("/api/categories", get(routes::categories::footer))
            .route(
                "/api/analytics",
                get(routes::analytics::summary)
                    .post(routes::analytics::track)
                    .options(routes::analytics::preflight),
            )
            .route("/api/permissions", get(routes::permissions::list))
            .route("/api/users/roles", get(routes::roles::list))
            .route("/api/tracking/cookie", post(routes::tracking::record))
            .route("/api/adverts", post(routes::adverts::fetch))
            .route(
                "/api/backup",
                post(routes::backup::run).options(routes::backup::preflight),
            )
            .route("/api/home", get(routes::home::aggregate))
            .with_state(state)
            .layer(TimeoutLayer::new(request_timeout))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            backend = %self.config.backend.base_url,
            development = self.config.is_development(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
