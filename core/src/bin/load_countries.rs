//! Management command to load and sync country reference data.
//!
//! Idempotent and safe to re-run. Creates new countries, updates
//! existing ones, and can deactivate countries missing from the bundled
//! ISO list.
//!
//! `--only-common` controls which countries are created/updated.
//! `--deactivate-missing` always uses the FULL ISO set to decide which
//! countries are stale, so the two flags can be safely combined.

use clap::Parser;
use colored::Colorize;
use common::env_config::Config;
use countries::SyncOptions;

#[derive(Parser, Debug)]
#[command(name = "load_countries", about = "Load and sync country reference data")]
struct Args {
    /// Show what would be done without making changes
    #[arg(long)]
    dry_run: bool,

    /// Deactivate countries not found in the bundled ISO list
    #[arg(long)]
    deactivate_missing: bool,

    /// Only load common countries (those with phone codes defined)
    #[arg(long)]
    only_common: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let config = Config::from_env();

    if config.console_logging_enabled {
        logger::setup().expect("Failed to set up logger");
    }

    if args.dry_run {
        println!("{}", "DRY RUN - No changes will be made".yellow());
    }

    let pool = db::setup(&config.database_url, config.environment == "production")
        .await
        .expect("Failed to set up database");

    let opts = SyncOptions {
        dry_run: args.dry_run,
        deactivate_missing: args.deactivate_missing,
        only_common: args.only_common,
    };

    let report = match countries::run(&pool, opts).await {
        Ok(report) => report,
        Err(err) => {
            eprintln!("{}", format!("Country data sync failed: {}", err).red());
            std::process::exit(1);
        }
    };

    println!();
    println!("{}", "=".repeat(50).green());
    println!("{}", "Country data sync complete".green());
    println!("  Created:     {}", report.created);
    println!("  Updated:     {}", report.updated);
    println!("  Unchanged:   {}", report.unchanged);
    if args.deactivate_missing {
        println!("  Deactivated: {}", report.deactivated);
    }
    println!("{}", "=".repeat(50).green());
}
