//! Application startup and lifecycle management.

use crate::config::BfhlConfig;
use crate::handlers::{bfhl, health_check};
use crate::services::providers::gemini::GeminiTextProvider;
use crate::services::providers::TextProvider;
use crate::services::AnswerService;
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    security_headers::security_headers_middleware,
    tracing::{http_trace_layer, request_id_middleware},
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;

/// Shared application state. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<BfhlConfig>,
    pub answers: Arc<AnswerService>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: BfhlConfig, provider: Option<Arc<dyn TextProvider>>) -> Self {
        let answers = AnswerService::new(provider, &config.ai);
        Self {
            config: Arc::new(config),
            answers: Arc::new(answers),
            started_at: Instant::now(),
        }
    }

    /// Builds the Gemini provider when an API key is configured.
    pub fn from_config(config: BfhlConfig) -> Result<Self, AppError> {
        let provider: Option<Arc<dyn TextProvider>> = match &config.gemini {
            Some(gemini_config) => {
                let provider = GeminiTextProvider::new(gemini_config.clone())
                    .map_err(|e| AppError::ConfigError(anyhow::anyhow!(e)))?;
                tracing::info!(model = %gemini_config.model, "Initialized Gemini text provider");
                Some(Arc::new(provider) as Arc<dyn TextProvider>)
            }
            None => {
                tracing::warn!("GEMINI_API_KEY not set, AI answers will use the fallback");
                None
            }
        };

        Ok(Self::new(config, provider))
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/bfhl", post(bfhl))
        .layer(CorsLayer::permissive())
        .layer(from_fn(security_headers_middleware))
        .layer(http_trace_layer())
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Bind the listener (port 0 picks a random port, for tests).
    pub async fn build(state: AppState) -> Result<Self, AppError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], state.config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("BFHL service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until SIGINT/SIGTERM.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                e
            })
    }
}
