//! CLI administration tool for short-url-service.
//!
//! Shortens and resolves URLs directly against the store and cache, and
//! performs database checks without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (returns the existing code if already shortened)
//! cargo run --bin admin -- shorten https://example.com/page
//!
//! # Resolve a short code
//! cargo run --bin admin -- resolve 4hQ2bXk9
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! The same variables as the server: `DATABASE_URL` (or `POSTGRES_*`),
//! optionally `REDIS_URL` (or `REDIS_*`), `CACHE_TTL_SECONDS`, `IO_TIMEOUT_MS`.

use short_url_service::config::{self, Config, mask_connection_string};
use short_url_service::infrastructure::persistence::{PgUrlStore, UrlStore};
use short_url_service::server::{connect_cache, connect_database};
use short_url_service::state::AppState;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing short-url-service.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Create (or look up) the short code for a long URL
    Shorten {
        /// Long URL to shorten
        long_url: String,
    },

    /// Resolve a short code to its long URL
    Resolve {
        /// Short code to resolve
        short_url: String,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Failed to load configuration")?;
    let pool = connect_database(&config).await?;

    match cli.command {
        Commands::Shorten { long_url } => shorten(&config, pool, &long_url).await?,
        Commands::Resolve { short_url } => resolve(&config, pool, &short_url).await?,
        Commands::Db { action } => handle_db_action(action, &config, &pool).await?,
    }

    Ok(())
}

async fn build_state(config: &Config, pool: PgPool) -> Result<AppState> {
    let store: Arc<dyn UrlStore> = Arc::new(PgUrlStore::new(Arc::new(pool)));
    let cache = connect_cache(config).await;
    AppState::build(store, cache, config.io_timeout()).context("Failed to wire request handlers")
}

async fn shorten(config: &Config, pool: PgPool, long_url: &str) -> Result<()> {
    println!("{}", "🔗 Shorten URL".bright_blue().bold());
    println!();

    let state = build_state(config, pool).await?;

    match state.mediator.create_short_url(long_url).await {
        Ok(short_url) => {
            println!("  Long URL:  {}", long_url.cyan());
            println!("  Short URL: {}", short_url.bright_yellow().bold());
            println!();
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "❌".red(), e.to_string().red());
            Err(e.into())
        }
    }
}

async fn resolve(config: &Config, pool: PgPool, short_url: &str) -> Result<()> {
    println!("{}", "🔍 Resolve short URL".bright_blue().bold());
    println!();

    let state = build_state(config, pool).await?;

    match state.mediator.get_long_url(short_url).await {
        Ok(long_url) => {
            println!("  Short URL: {}", short_url.cyan());
            println!("  Long URL:  {}", long_url.bright_white().bold());
            println!();
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "❌".red(), e.to_string().red());
            Err(e.into())
        }
    }
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, config: &Config, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let urls: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url")
                .fetch_one(pool)
                .await?;

            println!(
                "  Database:   {}",
                mask_connection_string(&config.database_url).bright_white()
            );
            println!("  PostgreSQL: {}", version.bright_white());
            println!("  URLs:       {}", urls.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
