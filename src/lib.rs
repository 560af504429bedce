//! launchpad-site: a small marketing site
//!
//! Serves a landing page, a demo blog backed by in-memory fixture posts,
//! and a demo feed of articles fetched from a Strapi content service.
//! Every data route goes through a loader in [`loaders`], which reports
//! missing records as a typed not-found outcome.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod loaders;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use content::{ArticleSource, FixtureStore, StaticArticles, StrapiClient};

/// The site application
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Static assets served under `/public`
    pub public_dir: std::path::PathBuf,
}

impl Site {
    /// Create a new Site instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config = config::SiteConfig::load_or_default(&base_dir)?;
        let public_dir = base_dir.join("public");

        Ok(Self {
            config,
            base_dir,
            public_dir,
        })
    }

    /// Override the simulated post lookup latency
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.config.loader.delay_ms = delay_ms;
        self
    }

    /// Fixture store using the configured loader delay
    pub fn fixture_store(&self) -> FixtureStore {
        FixtureStore::new(self.config.loader.delay())
    }

    /// Article source for the demo feed
    ///
    /// Without a configured content service URL the feed is empty.
    pub fn article_source(&self) -> Result<Arc<dyn ArticleSource>> {
        let strapi = &self.config.strapi;
        match &strapi.url {
            Some(url) => {
                tracing::info!("Reading articles from {}", url);
                let client = StrapiClient::new(
                    url,
                    strapi.token.as_deref(),
                    Duration::from_secs(strapi.timeout_secs),
                )?;
                Ok(Arc::new(client))
            }
            None => {
                tracing::info!("No content service configured, article feed is empty");
                Ok(Arc::new(StaticArticles::default()))
            }
        }
    }
}
