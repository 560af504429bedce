//! HTTP server
//!
//! Each route is bound to exactly one loader. Handlers live in
//! [`handlers`]; this module wires them into a router and runs it.

pub mod handlers;

use anyhow::Result;
use axum::{routing::get, Router};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::SiteConfig;
use crate::content::{ArticleSource, FixtureStore};
use crate::templates::TemplateRenderer;
use crate::Site;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    config: SiteConfig,
    store: FixtureStore,
    articles: Arc<dyn ArticleSource>,
    renderer: TemplateRenderer,
}

impl AppState {
    pub fn new(
        config: SiteConfig,
        store: FixtureStore,
        articles: Arc<dyn ArticleSource>,
    ) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(InnerState {
                config,
                store,
                articles,
                renderer: TemplateRenderer::new()?,
            }),
        })
    }

    /// Build state from a loaded site
    pub fn from_site(site: &Site) -> Result<Self> {
        Self::new(
            site.config.clone(),
            site.fixture_store(),
            site.article_source()?,
        )
    }

    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    pub fn store(&self) -> &FixtureStore {
        &self.inner.store
    }

    pub fn articles(&self) -> &dyn ArticleSource {
        self.inner.articles.as_ref()
    }

    pub fn renderer(&self) -> &TemplateRenderer {
        &self.inner.renderer
    }
}

/// Create the router with all page routes
pub fn create_router(state: AppState, public_dir: &Path) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/posts", get(handlers::posts))
        .route("/posts/:post_id", get(handlers::post))
        .route("/demo/strapi", get(handlers::articles))
        .nest_service("/public", ServeDir::new(public_dir))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server and run until Ctrl+C
pub async fn start(site: &Site, ip: &str, port: u16) -> Result<()> {
    let state = AppState::from_site(site)?;
    let app = create_router(state, &site.public_dir);

    let addr = bind_addr(ip, port)?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", addr);
    println!("Server running at http://{}", addr);
    println!("Press Ctrl+C to stop.");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolve the bind address; "localhost" maps to the IPv4 loopback
fn bind_addr(ip: &str, port: u16) -> Result<SocketAddr> {
    let ip: IpAddr = if ip == "localhost" {
        IpAddr::V4(Ipv4Addr::LOCALHOST)
    } else {
        ip.parse()
            .map_err(|e| anyhow::anyhow!("Invalid IP address {:?}: {}", ip, e))?
    };
    Ok(SocketAddr::new(ip, port))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down gracefully...");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv6Addr;

    #[test]
    fn test_bind_addr() {
        assert_eq!(
            bind_addr("localhost", 4000).unwrap(),
            SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 4000)
        );
        assert_eq!(
            bind_addr("0.0.0.0", 8080).unwrap(),
            SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8080)
        );
        assert_eq!(
            bind_addr("::1", 4000).unwrap(),
            SocketAddr::new(IpAddr::V6(Ipv6Addr::LOCALHOST), 4000)
        );
    }

    #[test]
    fn test_bind_addr_rejects_garbage() {
        assert!(bind_addr("not-an-ip", 4000).is_err());
    }
}
