//! OCCLER CLI - download design-system components as ready-to-use archives.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "occler")]
#[command(about = "Download design-system components as ready-to-use archives")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to occler.toml config file
    #[arg(short, long, default_value = "occler.toml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create occler.toml and a sample custom component
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// List catalog components by category
    List,

    /// Build an archive and write it to disk
    Download {
        /// Component id
        #[arg(required_unless_present = "all")]
        id: Option<String>,

        /// Download the complete design system
        #[arg(long, conflicts_with = "id")]
        all: bool,

        /// Output directory (defaults to config or "downloads")
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Serve the component catalog with browser downloads
    Serve {
        /// Port to listen on (defaults to config or 4000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Do not open browser
        #[arg(long)]
        no_open: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes).await?;
        }
        Commands::List => {
            commands::list::run(&cli.config).await?;
        }
        Commands::Download { id, all, output } => {
            let target = if all {
                commands::download::Target::All
            } else {
                // clap guarantees an id when --all is absent
                commands::download::Target::Component(id.unwrap_or_default())
            };
            commands::download::run(&cli.config, target, output).await?;
        }
        Commands::Serve { port, no_open } => {
            commands::serve::run(&cli.config, port, !no_open).await?;
        }
    }

    Ok(())
}
