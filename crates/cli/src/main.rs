//! Karigar CLI - Offline shipping quotes and catalog tools.
//!
//! # Usage
//!
//! ```bash
//! # Quote a cart file for national delivery
//! karigar quote cart.yaml --region national
//!
//! # List the demo catalog, optionally by category
//! karigar catalog --category pottery
//!
//! # Show delivery regions and their rates
//! karigar regions
//! ```
//!
//! # Commands
//!
//! - `quote` - Price a YAML cart against the demo catalog
//! - `catalog` - List demo catalog products
//! - `regions` - List delivery regions

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "karigar")]
#[command(author, version, about = "Karigar marketplace CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Quote subtotal, shipping and total for a cart file
    Quote {
        /// Path to a YAML cart file
        file: String,

        /// Delivery region (`local`, `national`, `intl`); overrides the file
        #[arg(short, long)]
        region: Option<String>,
    },
    /// List products in the demo catalog
    Catalog {
        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,

        /// Free-text search over name, tags and category
        #[arg(short, long, default_value = "")]
        query: String,
    },
    /// List delivery regions
    Regions,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Quote { file, region } => {
            commands::quote::run(&file, region.as_deref()).await?;
        }
        Commands::Catalog { category, query } => {
            commands::catalog::list(&query, category.as_deref());
        }
        Commands::Regions => commands::catalog::regions(),
    }
    Ok(())
}
