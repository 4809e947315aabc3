//! Multibase CLI - Database migrations and diagnostics.
//!
//! # Usage
//!
//! ```bash
//! # Run PostgreSQL migrations
//! multibase-cli migrate
//!
//! # Check connectivity to all three stores
//! multibase-cli ping
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run `PostgreSQL` migrations for the users table
//! - `ping` - Verify `PostgreSQL`, MongoDB and Redis are reachable

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "multibase-cli")]
#[command(author, version, about = "Multibase CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Check connectivity to all three backends
    Ping,
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
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Ping => commands::ping::run().await?,
    }
    Ok(())
}
