//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub name: String,
    pub description: String,

    // URL
    pub url: String,
    pub root: String,
    pub links: LinksConfig,

    // Landing page copy
    pub marketing: MarketingConfig,

    // Data loading
    pub loader: LoaderConfig,
    pub strapi: StrapiConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "TanStack Start Template".to_string(),
            description:
                "A reusable marketing site template built with TanStack Start and SolidJS."
                    .to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),
            links: LinksConfig::default(),

            marketing: MarketingConfig::default(),

            loader: LoaderConfig::default(),
            strapi: StrapiConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load `_config.yml` from a base directory, falling back to defaults
    pub fn load_or_default<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join("_config.yml");
        if config_path.exists() {
            tracing::debug!("Loading config from {:?}", config_path);
            Self::load(&config_path)
        } else {
            tracing::debug!("No config at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }
}

/// Outbound social links shown in the footer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    pub twitter: String,
    pub github: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            twitter: "https://twitter.com/tanstack".to_string(),
            github: "https://github.com/tanstack".to_string(),
        }
    }
}

/// Landing page hero and feature grid
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketingConfig {
    pub hero: HeroConfig,
    pub features: Vec<FeatureConfig>,
}

impl Default for MarketingConfig {
    fn default() -> Self {
        let feature = |title: &str, description: &str| FeatureConfig {
            title: title.to_string(),
            description: description.to_string(),
        };

        Self {
            hero: HeroConfig::default(),
            features: vec![
                feature(
                    "Powerful Server Functions",
                    "Write server-side code that seamlessly integrates with your client components. Type-safe, secure, and simple.",
                ),
                feature(
                    "Flexible Server Side Rendering",
                    "Full-document SSR, streaming, and progressive enhancement out of the box. Control exactly what renders where.",
                ),
                feature(
                    "API Routes",
                    "Build type-safe API endpoints alongside your application. No separate backend needed.",
                ),
                feature(
                    "Strongly Typed Everything",
                    "End-to-end type safety from server to client. Catch errors before they reach production.",
                ),
                feature(
                    "Full Streaming Support",
                    "Stream data from server to client progressively. Perfect for AI applications and real-time updates.",
                ),
                feature(
                    "Next Generation Ready",
                    "Built from the ground up for modern web applications. Deploy anywhere JavaScript runs.",
                ),
            ],
        }
    }
}

/// Hero section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub actions: Vec<HeroAction>,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            title: "TANSTACK START".to_string(),
            subtitle: "The framework for next generation AI applications".to_string(),
            description: "Full-stack framework powered by TanStack Router for React and Solid. Build modern applications with server functions, streaming, and type safety.".to_string(),
            actions: vec![HeroAction {
                text: "Documentation".to_string(),
                href: "https://tanstack.com/start".to_string(),
                variant: "primary".to_string(),
            }],
        }
    }
}

/// Call-to-action button in the hero
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroAction {
    pub text: String,
    pub href: String,
    #[serde(default = "default_variant")]
    pub variant: String,
}

fn default_variant() -> String {
    "primary".to_string()
}

/// One entry in the feature grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureConfig {
    pub title: String,
    pub description: String,
}

/// Loader behaviour
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Simulated latency applied to every fixture lookup, in milliseconds
    pub delay_ms: u64,
}

impl LoaderConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Content service (Strapi) connection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StrapiConfig {
    /// Base URL such as `http://localhost:1337`; unset disables the feed
    pub url: Option<String>,
    /// API token sent as a bearer credential
    pub token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for StrapiConfig {
    fn default() -> Self {
        Self {
            url: None,
            token: None,
            timeout_secs: 10,
        }
    }
}
