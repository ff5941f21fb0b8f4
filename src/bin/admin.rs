//! CLI administration tool for shortlink.
//!
//! Provides commands for inspecting and creating links and for basic
//! database operations without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all links
//! cargo run --bin admin -- links list
//!
//! # Show a single link
//! cargo run --bin admin -- links show aZ3k9Qx
//!
//! # Shorten a URL
//! cargo run --bin admin -- links shorten https://example.com
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply migrations
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string, or the
//!   `DB_*` variables it is built from
//! - `SLUG_LENGTH`, `SLUG_MAX_ATTEMPTS`, `SHORTEN_MAX_ATTEMPTS`: used by
//!   `links shorten`

use shortlink::application::services::{LinkCatalog, ShorteningService};
use shortlink::config::Config;
use shortlink::domain::entities::Link;
use shortlink::infrastructure::persistence::{PgLinkRepository, database};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shortlink.
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
    /// Inspect and create links
    Links {
        #[command(subcommand)]
        action: LinksAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link subcommands.
#[derive(Subcommand)]
enum LinksAction {
    /// List all links
    List,

    /// Show one link by slug
    Show {
        /// Slug to look up
        slug: String,
    },

    /// Create a short link
    Shorten {
        /// Target URL (http or https)
        url: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env().context("Invalid configuration")?;
    let pool = database::connect(&config).await?;

    match cli.command {
        Commands::Links { action } => handle_links_action(action, &config, pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link commands.
async fn handle_links_action(action: LinksAction, config: &Config, pool: PgPool) -> Result<()> {
    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool)));

    match action {
        LinksAction::List => list_links(LinkCatalog::new(repo)).await?,
        LinksAction::Show { slug } => show_link(LinkCatalog::new(repo), &slug).await?,
        LinksAction::Shorten { url } => {
            let service = ShorteningService::with_settings(repo, config.shortener_settings());
            shorten_url(service, &url).await?;
        }
    }

    Ok(())
}

/// Lists all links with status indicators.
///
/// # Output Format
///
/// ```text
/// 📋 Links
///
///   ID  Slug      Created            Status    Target
///   ─────────────────────────────────────────────────────────
///   1   aZ3k9Qx   2025-01-15 10:30   ACTIVE    https://example.com
///   2   Qp02xYz   2025-01-16 14:20   EXPIRED   https://example.org
/// ```
async fn list_links(catalog: LinkCatalog<PgLinkRepository>) -> Result<()> {
    println!("{}", "📋 Links".bright_blue().bold());
    println!();

    let links = catalog
        .list_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Create one with: {} admin links shorten <url>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<5} {:<10} {:<18} {:<9} {}",
        "ID".bright_white().bold(),
        "Slug".bright_white().bold(),
        "Created".bright_white().bold(),
        "Status".bright_white().bold(),
        "Target".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<5} {:<10} {:<18} {:<9} {}",
            link.id.to_string().bright_black(),
            link.slug.cyan(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            status_label(link),
            link.target_url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Prints every field of one link.
async fn show_link(catalog: LinkCatalog<PgLinkRepository>, slug: &str) -> Result<()> {
    let link = catalog
        .find(slug)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .with_context(|| format!("Link '{}' not found", slug.trim()))?;

    println!("{}", "🔗 Link".bright_blue().bold());
    println!();
    println!("  ID:      {}", link.id.to_string().bright_black());
    println!("  Slug:    {}", link.slug.cyan());
    println!("  Path:    {}", link.path());
    println!("  Target:  {}", link.target_url.bright_white());
    println!(
        "  Created: {}",
        link.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!(
        "  Expires: {}",
        link.expires_at.map_or_else(
            || "never".to_string(),
            |at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
        )
    );
    println!("  Status:  {}", status_label(&link));
    println!();

    Ok(())
}

/// Runs the shortening flow and prints the new slug.
async fn shorten_url(service: ShorteningService<PgLinkRepository>, url: &str) -> Result<()> {
    println!("{}", "✂️  Shorten URL".bright_blue().bold());
    println!();

    let link = service
        .shorten(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    println!("{}", "✅ Link created successfully!".green().bold());
    println!();
    println!("  Slug:   {}", link.slug.bright_yellow().bold());
    println!("  Path:   {}", link.path().cyan());
    println!("  Target: {}", link.target_url);
    println!();

    Ok(())
}

fn status_label(link: &Link) -> ColoredString {
    if !link.is_active {
        "INACTIVE".red()
    } else if link.is_expired_at(Utc::now()) {
        "EXPIRED".yellow()
    } else {
        "ACTIVE".green()
    }
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            if !database::ping(pool).await {
                anyhow::bail!("Database did not answer SELECT 1");
            }

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
                .fetch_one(pool)
                .await
                .unwrap_or(0);

            println!("  PostgreSQL: {}", version.bright_white());
            println!(
                "  Links:      {}",
                links_count.to_string().bright_green().bold()
            );
            println!();
        }
        DbAction::Migrate => {
            println!("{}", "🛠️  Applying migrations...".bright_blue());

            database::migrate(pool).await?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
