//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Default configuration written by `init`
const DEFAULT_CONFIG: &str = r#"# Site Configuration

# Site
name: TanStack Start Template
description: A reusable marketing site template built with TanStack Start and SolidJS.

# URL
url: http://example.com
root: /
links:
  twitter: https://twitter.com/tanstack
  github: https://github.com/tanstack

# Landing page
marketing:
  hero:
    title: TANSTACK START
    subtitle: The framework for next generation AI applications
    description: Full-stack framework powered by TanStack Router for React and Solid. Build modern applications with server functions, streaming, and type safety.
    actions:
      - text: Documentation
        href: https://tanstack.com/start
        variant: primary

# Loaders
loader:
  # Simulated latency for fixture lookups
  delay_ms: 0

# Content service
strapi:
  # url: http://localhost:1337
  # token: ''
  timeout_secs: 10
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        anyhow::bail!("{:?} already exists", config_path);
    }

    // Create directory structure
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("public"))?;

    fs::write(&config_path, DEFAULT_CONFIG)?;
    tracing::info!("Created {:?}", config_path);

    Ok(())
}
