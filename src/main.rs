//! CLI entry point for launchpad-site

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "launchpad-site")]
#[command(version)]
#[command(about = "A small marketing site with demo blog and article routes", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default _config.yml
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Start the site server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Simulated latency for post lookups, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// List posts or articles
    List {
        /// Type of content to list (post, article)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "launchpad_site=debug,info"
    } else {
        "launchpad_site=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            launchpad_site::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::Server { port, ip, delay_ms } => {
            let mut site = launchpad_site::Site::new(&base_dir)?;
            if let Some(delay_ms) = delay_ms {
                site = site.with_delay_ms(delay_ms);
            }

            tracing::info!("Starting server at http://{}:{}", ip, port);
            launchpad_site::server::start(&site, &ip, port).await?;
        }

        Commands::List { r#type } => {
            let site = launchpad_site::Site::new(&base_dir)?;
            launchpad_site::commands::list::run(&site, &r#type).await?;
        }

        Commands::Version => {
            println!("launchpad-site version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
