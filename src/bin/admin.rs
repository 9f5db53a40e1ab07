//! CLI administration tool for the seitenkraft.org API.
//!
//! Sets up the database schema, loads sample data, and inspects TLD
//! offerings without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Apply migrations and load sample tenants, TLDs and customers
//! cargo run --bin admin -- db setup
//!
//! # Recreate everything from scratch (asks for confirmation)
//! cargo run --bin admin -- db setup --drop-tables
//!
//! # Schema only
//! cargo run --bin admin -- db setup --skip-sample-data
//!
//! # Check database connection and row counts
//! cargo run --bin admin -- db check
//!
//! # List active TLDs
//! cargo run --bin admin -- tld list
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use seitenkraft_api::domain::repositories::TldRepository;
use seitenkraft_api::infrastructure::persistence::PgTldRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// Sample tenants, TLDs and customers for development.
const SAMPLE_DATA_SQL: &str = include_str!("../../seeds/sample_data.sql");

/// Tables owned by this service, in drop order.
const TABLES: &[&str] = &["domain_registrations", "customers", "tlds", "saas_services"];

/// CLI tool for managing the seitenkraft.org API database.
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
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// TLD offerings
    Tld {
        #[command(subcommand)]
        action: TldAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Apply migrations and load sample data
    Setup {
        /// Drop existing tables before creating them (DESTRUCTIVE!)
        #[arg(long)]
        drop_tables: bool,

        /// Skip inserting sample data
        #[arg(long)]
        skip_sample_data: bool,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Check database connection and show row counts
    Check,
}

/// TLD subcommands.
#[derive(Subcommand)]
enum TldAction {
    /// List active TLDs by priority
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Tld { action } => handle_tld_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Setup {
            drop_tables,
            skip_sample_data,
            yes,
        } => setup(pool, drop_tables, skip_sample_data, yes).await,
        DbAction::Check => check(pool).await,
    }
}

/// Creates the schema and optionally loads sample data.
///
/// # Flow
///
/// 1. With `--drop-tables`: confirm (unless `--yes`), then drop all tables
///    and the migration history
/// 2. Apply pending migrations
/// 3. Load sample data (unless `--skip-sample-data`); rows that already
///    exist are left untouched
/// 4. Print row counts
async fn setup(pool: &PgPool, drop_tables: bool, skip_sample_data: bool, yes: bool) -> Result<()> {
    println!("{}", "🛠  Database Setup".bright_blue().bold());
    println!();

    if drop_tables {
        println!(
            "{}",
            "⚠️  --drop-tables will delete all existing data!"
                .red()
                .bold()
        );

        if !yes {
            let confirmed = Confirm::new()
                .with_prompt("Drop all tables?")
                .default(false)
                .interact()?;

            if !confirmed {
                println!("{}", "❌ Aborted".red());
                return Ok(());
            }
        }

        drop_all(pool).await?;
    }

    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run migrations")?;
    println!("{}", "✅ Migrations applied".green());

    if skip_sample_data {
        println!("{}", "ℹ️  Skipping sample data".bright_black());
    } else {
        sqlx::raw_sql(SAMPLE_DATA_SQL)
            .execute(pool)
            .await
            .context("Failed to load sample data")?;
        println!("{}", "✅ Sample data loaded".green());
    }

    println!();
    print_row_counts(pool).await?;

    println!();
    println!("{}", "✅ Database setup complete!".green().bold());
    println!();
    println!("{}", "Next steps:".bright_white());
    println!("  {} seitenkraft-api", "cargo run --bin".bright_cyan());
    println!();

    Ok(())
}

/// Drops all service tables, the trigger function and the migration history.
async fn drop_all(pool: &PgPool) -> Result<()> {
    for table in TABLES {
        sqlx::query(&format!("DROP TABLE IF EXISTS {} CASCADE", table))
            .execute(pool)
            .await
            .with_context(|| format!("Failed to drop {}", table))?;
        println!("  Dropped: {}", table.bright_black());
    }

    sqlx::query("DROP FUNCTION IF EXISTS set_updated_at() CASCADE")
        .execute(pool)
        .await?;
    sqlx::query("DROP TABLE IF EXISTS _sqlx_migrations")
        .execute(pool)
        .await?;

    println!();
    Ok(())
}

/// Checks the connection and prints server version and row counts.
async fn check(pool: &PgPool) -> Result<()> {
    println!("{}", "🔍 Checking database connection...".bright_blue());

    let version: String = sqlx::query_scalar("SELECT version()")
        .fetch_one(pool)
        .await?;

    println!("{}", "✅ Database connection OK".green().bold());
    println!("  PostgreSQL: {}", version.bright_white());
    println!();

    print_row_counts(pool).await
}

async fn print_row_counts(pool: &PgPool) -> Result<()> {
    println!("{}", "Row counts:".bright_white().bold());

    for table in TABLES.iter().rev() {
        let count: Result<i64, sqlx::Error> =
            sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
                .fetch_one(pool)
                .await;

        match count {
            Ok(count) => println!(
                "  {:<22} {}",
                table.cyan(),
                count.to_string().bright_green().bold()
            ),
            Err(e) => println!("  {:<22} {}", table.cyan(), e.to_string().yellow()),
        }
    }

    Ok(())
}

/// Dispatches TLD commands.
async fn handle_tld_action(action: TldAction, pool: &PgPool) -> Result<()> {
    match action {
        TldAction::List => list_tlds(pool).await,
    }
}

/// Lists active TLDs in suggestion order.
///
/// # Output Format
///
/// ```text
/// 🌐 Active TLDs
///
///   TLD        Price     Priority  Group
///   ───────────────────────────────────────────────
///   .de         9.90     100       Deutschland
///   .com       14.90      95       International
/// ```
async fn list_tlds(pool: &PgPool) -> Result<()> {
    println!("{}", "🌐 Active TLDs".bright_blue().bold());
    println!();

    let repo = PgTldRepository::new(Arc::new(pool.clone()));
    let tlds = repo
        .list_active()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list TLDs: {}", e))?;

    if tlds.is_empty() {
        println!("{}", "  No active TLDs found".yellow());
        println!();
        println!(
            "  Load sample data with: {} admin -- db setup",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<10} {:>8}  {:<9} {}",
        "TLD".bright_white().bold(),
        "Price".bright_white().bold(),
        "Priority".bright_white().bold(),
        "Group".bright_white().bold()
    );
    println!("  {}", "─".repeat(47).bright_black());

    for tld in &tlds {
        let priority = if tld.is_high_priority() {
            tld.priority.to_string().green()
        } else {
            tld.priority.to_string().normal()
        };

        println!(
            "  {:<10} {:>8.2}  {:<9} {}",
            format!(".{}", tld.name).cyan(),
            tld.sell_price,
            priority,
            tld.group_label.as_deref().unwrap_or("-").bright_black()
        );
    }

    println!();
    println!("  Total: {}", tlds.len().to_string().bright_white().bold());
    println!();

    Ok(())
}
