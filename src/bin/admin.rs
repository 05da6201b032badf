//! CLI administration tool for finyeza.
//!
//! Manages short links directly against the database, without requiring
//! HTTP API access or an API key.
//!
//! # Usage
//!
//! ```bash
//! # Register a new link (created disabled)
//! cargo run --bin admin -- create proj https://example.com/project
//!
//! # Enable it
//! cargo run --bin admin -- enable proj
//!
//! # Point it somewhere else (forces it back to disabled)
//! cargo run --bin admin -- update proj https://example.com/v2
//!
//! # Inspect counters and recent clicks
//! cargo run --bin admin -- stats proj
//!
//! # List everything
//! cargo run --bin admin -- list
//!
//! # Panic button: disable every enabled link
//! cargo run --bin admin -- disable-all
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `BASE_URL` (optional): base used when printing short URLs

use finyeza::application::services::{AdminService, UpdateOutcome};
use finyeza::infrastructure::persistence::PgLinkStore;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing finyeza short links.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new short link (created disabled)
    Create {
        /// Short code (lowercase letters, digits, hyphens)
        code: String,

        /// Destination URL (must start with http:// or https://)
        destination: String,
    },

    /// Point an existing link at a new destination
    Update {
        /// Short code to update
        code: String,

        /// New destination URL
        destination: String,
    },

    /// Enable a link so it resolves
    Enable {
        /// Short code to enable
        code: String,
    },

    /// Disable a link without deleting it
    Disable {
        /// Short code to disable
        code: String,
    },

    /// Disable every enabled link
    DisableAll {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show counters and recent clicks for a link
    Stats {
        /// Short code to inspect
        code: String,
    },

    /// List all registered links
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let base_url =
        std::env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let service = AdminService::new(Arc::new(PgLinkStore::new(Arc::new(pool))));

    match cli.command {
        Commands::Create { code, destination } => {
            create_link(&service, &code, &destination, &base_url).await?
        }
        Commands::Update { code, destination } => {
            update_link(&service, &code, &destination).await?
        }
        Commands::Enable { code } => enable_link(&service, &code).await?,
        Commands::Disable { code } => disable_link(&service, &code).await?,
        Commands::DisableAll { yes } => disable_all(&service, yes).await?,
        Commands::Stats { code } => show_stats(&service, &code).await?,
        Commands::List => list_links(&service).await?,
    }

    Ok(())
}

async fn create_link(
    service: &AdminService,
    code: &str,
    destination: &str,
    base_url: &str,
) -> Result<()> {
    let link = service
        .create(code, destination)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!("{}", "Link created (disabled)".green().bold());
    println!();
    println!(
        "  {}  ->  {}",
        format!("{}/{}", base_url.trim_end_matches('/'), link.code).cyan(),
        link.destination
    );
    println!();
    println!(
        "  Enable it with: {} enable {}",
        "admin".bright_cyan(),
        link.code
    );

    Ok(())
}

async fn update_link(service: &AdminService, code: &str, destination: &str) -> Result<()> {
    match service
        .update(code, destination)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to update link: {}", e))?
    {
        UpdateOutcome::Updated(link) => {
            println!("{}", "Destination updated".green().bold());
            println!();
            println!("  {}  ->  {}", link.code.cyan(), link.destination);
            println!();
            println!(
                "{}",
                "The link is now disabled; re-enable it once verified.".yellow()
            );
        }
        UpdateOutcome::Unchanged => {
            println!(
                "{}",
                "Destination is already set to that URL; nothing changed".yellow()
            );
        }
    }

    Ok(())
}

async fn enable_link(service: &AdminService, code: &str) -> Result<()> {
    service
        .enable(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to enable link: {}", e))?;

    println!("{} {}", "Enabled".green().bold(), code.cyan());

    Ok(())
}

async fn disable_link(service: &AdminService, code: &str) -> Result<()> {
    service
        .disable(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to disable link: {}", e))?;

    println!("{} {}", "Disabled".red().bold(), code.cyan());

    Ok(())
}

async fn disable_all(service: &AdminService, skip_confirm: bool) -> Result<()> {
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Disable ALL enabled links?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let disabled = service
        .disable_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to disable links: {}", e))?;

    println!(
        "{} {}",
        "Disabled links:".red().bold(),
        disabled.to_string().bright_white().bold()
    );

    Ok(())
}

async fn show_stats(service: &AdminService, code: &str) -> Result<()> {
    let stats = service
        .stats(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load stats: {}", e))?;

    let status = if stats.link.enabled {
        "ENABLED".green()
    } else {
        "DISABLED".red()
    };

    println!("{}", "Link statistics".bright_blue().bold());
    println!();
    println!("  Code:        {}", stats.link.code.cyan());
    println!("  Destination: {}", stats.link.destination);
    println!("  Status:      {}", status);
    println!(
        "  Clicks:      {}",
        stats.link.clicks.to_string().bright_green().bold()
    );
    println!(
        "  Created:     {}",
        stats
            .link
            .created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!(
        "  Updated:     {}",
        stats
            .link
            .updated_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );

    if stats.recent_clicks.is_empty() {
        println!();
        println!("  {}", "No clicks recorded yet".yellow());
        return Ok(());
    }

    println!();
    println!(
        "  {:<20} {:<18} {}",
        "Time".bright_white().bold(),
        "IP".bright_white().bold(),
        "User agent".bright_white().bold()
    );
    println!("  {}", "-".repeat(70).bright_black());

    for click in &stats.recent_clicks {
        println!(
            "  {:<20} {:<18} {}",
            click
                .clicked_at
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
                .bright_black(),
            click.ip.cyan(),
            click.user_agent.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}

async fn list_links(service: &AdminService) -> Result<()> {
    let links = service
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    println!("{}", "Registered links".bright_blue().bold());
    println!();

    if links.is_empty() {
        println!("  {}", "No links found".yellow());
        println!();
        println!(
            "  Create one with: {} create <code> <destination>",
            "admin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<20} {:<10} {:>8}  {}",
        "Code".bright_white().bold(),
        "Status".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Destination".bright_white().bold()
    );
    println!("  {}", "-".repeat(80).bright_black());

    for link in &links {
        let status = if link.enabled {
            "ENABLED".green()
        } else {
            "DISABLED".red()
        };

        println!(
            "  {:<20} {:<10} {:>8}  {}",
            link.code.cyan(),
            status,
            link.clicks.to_string().bright_black(),
            link.destination
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());

    Ok(())
}
