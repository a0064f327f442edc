use anyhow::{Context, Result};
use axum::{Router, routing::post};
use reqwest::Url;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

pub mod handlers;

/// Where submitted forms are forwarded to.
#[derive(Debug, Clone)]
pub struct ForwardState {
    client: reqwest::Client,
    upstream: Option<Url>,
}

impl ForwardState {
    pub fn new(upstream: Option<&str>) -> Result<ForwardState> {
        let upstream = upstream
            .map(|u| Url::parse(u).with_context(|| format!("Invalid upstream URL: {u}")))
            .transpose()?;
        Ok(ForwardState {
            client: reqwest::Client::new(),
            upstream,
        })
    }

    pub fn upstream(&self) -> Option<&Url> {
        self.upstream.as_ref()
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

pub fn create_router(api_path: &str, static_dir: impl AsRef<Path>, state: ForwardState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // API route, forwarded to the text service
        .route(api_path, post(handlers::forward_handler))
        .with_state(Arc::new(state))
        // Page markup and the browser bundle
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
}

pub async fn serve(listener: TcpListener, router: Router) -> Result<()> {
    log::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;
    log::info!("HTTP server exited");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for shutdown signal: {e}");
    }
}
