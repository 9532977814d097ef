//! CLI administration tool for clone-registry.
//!
//! Reviews the queue and moderates approved clones by editing the JSON
//! documents directly, without going through the HTTP dashboard.
//!
//! # Usage
//!
//! ```bash
//! # Show clones waiting for review
//! cargo run --bin registry-admin -- queue
//!
//! # Show approved clones with request counts
//! cargo run --bin registry-admin -- list
//!
//! # Approve or reject a queued clone
//! cargo run --bin registry-admin -- approve https://clone.example.net
//! cargo run --bin registry-admin -- reject https://spam.example.net
//!
//! # Remove an approved clone
//! cargo run --bin registry-admin -- kick https://clone.example.net --yes
//! ```
//!
//! # Environment Variables
//!
//! - `DATA_DIR` (optional): directory holding the JSON documents (default: `data`)
//! - `ORIGINAL_SITE_URL` (optional): canonical site, never kickable
//!
//! Writes are atomic per document, but the CLI does not share the running
//! server's write lock. Prefer the dashboard while the server is under load.

use clone_registry::application::services::RegistryService;
use clone_registry::config::RegistrySettings;
use clone_registry::domain::entities::ListedClone;
use clone_registry::infrastructure::persistence::JsonCloneRepository;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

type Registry = RegistryService<JsonCloneRepository>;

/// CLI tool for managing clone-registry.
#[derive(Parser)]
#[command(name = "registry-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show clones waiting for review
    Queue,

    /// Show approved clones, busiest first
    List,

    /// Approve a queued clone
    Approve {
        /// Clone URL exactly as reported
        url: String,
    },

    /// Reject a queued clone
    Reject {
        /// Clone URL exactly as reported
        url: String,
    },

    /// Remove an approved clone from the public list
    Kick {
        /// Clone URL exactly as listed
        url: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let settings = RegistrySettings::from_env();
    let registry = Registry::new(
        Arc::new(JsonCloneRepository::new(settings.data_dir)),
        settings.original_site_url,
    );

    match cli.command {
        Commands::Queue => show_queue(&registry).await?,
        Commands::List => show_approved(&registry).await?,
        Commands::Approve { url } => approve(&registry, &url).await?,
        Commands::Reject { url } => reject(&registry, &url).await?,
        Commands::Kick { url, yes } => kick(&registry, &url, yes).await?,
    }

    Ok(())
}

/// Prints the review queue in arrival order.
///
/// ```text
/// 📥 Review Queue
///
///   URL                                      First seen           Reported by
///   ─────────────────────────────────────────────────────────────────────────────
///   https://clone.example.net                2025-03-01 12:30     203.0.113.9
/// ```
async fn show_queue(registry: &Registry) -> Result<()> {
    println!("{}", "📥 Review Queue".bright_blue().bold());
    println!();

    let view = registry.admin_view().await?;

    if view.queue.is_empty() {
        println!("{}", "  Queue is empty".yellow());
        return Ok(());
    }

    println!(
        "  {:<40} {:<20} {}",
        "URL".bright_white().bold(),
        "First seen".bright_white().bold(),
        "Reported by".bright_white().bold()
    );
    println!("  {}", "─".repeat(80).bright_black());

    for entry in &view.queue {
        println!(
            "  {:<40} {:<20} {}",
            entry.url.cyan(),
            entry
                .first_seen
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            entry.discovered_by_ip.bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        view.queue.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Prints the public list: original site first, then approval order.
async fn show_approved(registry: &Registry) -> Result<()> {
    println!("{}", "📋 Approved Clones".bright_blue().bold());
    println!();

    let rows = registry.list_approved().await?;
    print_approved(&rows);

    Ok(())
}

fn print_approved(rows: &[ListedClone]) {
    if rows.is_empty() {
        println!("{}", "  No approved clones".yellow());
        println!();
        return;
    }

    println!(
        "  {:<50} {:>10}",
        "URL".bright_white().bold(),
        "Requests".bright_white().bold()
    );
    println!("  {}", "─".repeat(62).bright_black());

    for row in rows {
        let url = if row.is_original {
            format!("{} {}", row.url, "(original)").green()
        } else {
            row.url.cyan()
        };

        println!("  {:<50} {:>10}", url, row.requests.to_string());
    }

    println!();
    println!("  Total: {}", rows.len().to_string().bright_white().bold());
    println!();
}

async fn approve(registry: &Registry, url: &str) -> Result<()> {
    let before = registry.admin_view().await?;
    if !before.queue.iter().any(|e| e.url == url) {
        println!("{}", "⚠️  URL is not in the queue, approving anyway".yellow());
    }

    let view = registry.approve(url).await?;

    println!("{} {}", "✅ Approved".green().bold(), url.cyan());
    println!();
    print_approved(&view.ranked_approved());

    Ok(())
}

async fn reject(registry: &Registry, url: &str) -> Result<()> {
    let before = registry.admin_view().await?;
    if !before.queue.iter().any(|e| e.url == url) {
        println!("{}", "⚠️  URL is not in the queue".yellow());
        return Ok(());
    }

    let view = registry.reject(url).await?;

    println!("{} {}", "🗑️  Rejected".green().bold(), url.cyan());
    println!(
        "  Queue: {}",
        view.queue.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Removes an approved clone after confirmation (default: No).
///
/// The clone's request counter is kept. If it reports itself again it
/// re-enters the queue.
async fn kick(registry: &Registry, url: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🚫 Kick Clone".bright_blue().bold());
    println!();

    if registry.original_url() == Some(url) {
        anyhow::bail!("Cannot kick original site");
    }

    let before = registry.admin_view().await?;
    if !before.approved.iter().any(|u| u == url) {
        println!("{}", "⚠️  URL is not approved".yellow());
        return Ok(());
    }

    println!("  URL:      {}", url.cyan());
    println!(
        "  Requests: {}",
        before.requests_for(url).to_string().bright_black()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Remove this clone from the public list?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let view = registry.kick(url).await?;

    println!();
    println!("{}", "✅ Clone removed".green().bold());
    println!();
    print_approved(&view.ranked_approved());

    Ok(())
}
