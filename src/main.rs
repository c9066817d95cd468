//! CLI entry point for garden-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use garden_rs::commands;
use garden_rs::commands::render::RenderOptions;

#[derive(Parser)]
#[command(name = "garden-rs")]
#[command(version)]
#[command(about = "Content listings and page components for a markdown notes site", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
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
    /// List the entries a listing shows
    #[command(alias = "ls")]
    List {
        /// Listing to show (pages, recent, home)
        #[arg(short, long, default_value = "pages")]
        kind: String,

        /// Show at most this many entries
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Render listing components to HTML
    #[command(alias = "r")]
    Render {
        /// Component to render (page-list, recent-notes, home); defaults to
        /// the listing components the layout places on the page
        component: Option<String>,

        /// Slug of the page the component is rendered on
        #[arg(short, long, default_value = "index")]
        page: String,

        /// Show at most this many entries
        #[arg(short, long)]
        limit: Option<usize>,

        /// Emit a complete HTML document with styles
        #[arg(short, long)]
        standalone: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate the guides collection
    Check,

    /// Print the effective configuration
    Config {
        /// Output format (yaml, json, toml)
        #[arg(short, long, default_value = "yaml")]
        format: String,
    },

    /// Remove the output folder
    Clean,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "garden_rs=debug,info"
    } else {
        "garden_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine site directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List { kind, limit } => {
            let garden = garden_rs::Garden::new(&base_dir)?;
            commands::list::run(&garden, &kind, limit)?;
        }

        Commands::Render {
            component,
            page,
            limit,
            standalone,
            output,
        } => {
            let garden = garden_rs::Garden::new(&base_dir)?;
            let opts = RenderOptions {
                component,
                page,
                limit,
                standalone,
                output,
            };
            commands::render::run(&garden, &opts)?;
        }

        Commands::Check => {
            let garden = garden_rs::Garden::new(&base_dir)?;
            tracing::info!("Checking guides in {:?}", garden.guides_dir());
            commands::check::run(&garden)?;
        }

        Commands::Config { format } => {
            let garden = garden_rs::Garden::new(&base_dir)?;
            commands::config::run(&garden, &format)?;
        }

        Commands::Clean => {
            let garden = garden_rs::Garden::new(&base_dir)?;
            tracing::info!("Cleaning output folder...");
            garden.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("garden-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
