//! CLI entry point for milesgoround

use anyhow::Result;
use clap::{Parser, Subcommand};
use milesgoround::config::RuntimeConfig;
use milesgoround::{commands, Site};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "milesgoround")]
#[command(version)]
#[command(about = "Serve and build the travel-rewards content datasets", long_about = None)]
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
    /// Start the dataset server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (defaults to the configured address)
        #[arg(short, long)]
        ip: Option<String>,
    },

    /// List the entries of a collection
    List {
        /// Collection name (journals, bank-programs, ...)
        collection: String,
    },

    /// Show one entry with its previous/next neighbours
    Show {
        collection: String,
        slug: String,
    },

    /// Write every collection as static JSON
    #[command(alias = "b")]
    Build,

    /// Check collections for duplicate or malformed slugs
    Check,

    /// Remove the public folder
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "milesgoround=debug,info"
    } else {
        "milesgoround=info"
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

    // Environment switches are read once, here
    let runtime = RuntimeConfig::from_env();

    match cli.command {
        Commands::Serve { port, ip } => {
            let site = Site::new(&base_dir, runtime)?;
            let ip = ip.unwrap_or_else(|| site.config.server.ip.clone());
            let port = port.unwrap_or(site.config.server.port);
            tracing::info!("Starting server at http://{}:{}", ip, port);
            commands::serve::run(&site, &ip, port).await?;
        }

        Commands::List { collection } => {
            let site = Site::new(&base_dir, runtime)?;
            commands::list::run(&site, &collection).await?;
        }

        Commands::Show { collection, slug } => {
            let site = Site::new(&base_dir, runtime)?;
            commands::show::run(&site, &collection, &slug).await?;
        }

        Commands::Build => {
            let site = Site::new(&base_dir, runtime.with_build_phase())?;
            tracing::info!("Building static datasets...");
            commands::build::run(&site).await?;
            println!("Built successfully!");
        }

        Commands::Check => {
            let site = Site::new(&base_dir, runtime)?;
            commands::check::run(&site).await?;
        }

        Commands::Clean => {
            let site = Site::new(&base_dir, runtime)?;
            tracing::info!("Cleaning public folder...");
            commands::clean::run(&site)?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("milesgoround version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
