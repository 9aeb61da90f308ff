//! # hn_frontpage
//!
//! One-shot batch job that snapshots the Hacker News front page into a
//! MongoDB collection. Each run fetches the page once, extracts up to 8
//! story records, and replaces the whole collection with the fresh batch.
//!
//! ## Usage
//!
//! ```sh
//! hn_frontpage --mongo-url mongodb://localhost:27017
//! ```
//!
//! ## Pipeline
//!
//! 1. **Fetch**: one GET against the front page, 10s timeout
//! 2. **Extract**: pull title/link pairs from the first 8 title rows
//! 3. **Publish**: delete everything in the collection, insert the batch
//!
//! The process always exits normally; success and failure are told apart
//! by the log output, not the exit status. An empty extraction leaves the
//! store untouched.

use clap::Parser;
use reqwest::Client;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod models;
mod scrapers;
mod store;
mod utils;

use cli::Cli;
use scrapers::hackernews;
use store::{MongoStore, NewsStore};

#[tokio::main]
async fn main() {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("hn_frontpage starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let client = match hackernews::build_client() {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "Could not build HTTP client");
            return;
        }
    };

    let store = match MongoStore::connect(&args.mongo_url, &args.database, &args.collection).await
    {
        Ok(store) => store,
        Err(e) => {
            error!(error = %e, "Could not create store handle");
            return;
        }
    };

    run(&client, hackernews::FRONT_PAGE_URL, &store).await;

    let elapsed = start_time.elapsed();
    info!(?elapsed, "Run complete");
}

/// The single boundary around fetch-and-extract.
///
/// Every scrape failure collapses here to "no data this run": the store is
/// only touched when extraction produced at least one record, so a network
/// outage and a page redesign look the same from the store's perspective.
async fn run(client: &Client, url: &str, store: &impl NewsStore) {
    match hackernews::scrape_front_page(client, url).await {
        Ok(items) if items.is_empty() => {
            warn!("Nothing extracted; leaving the store untouched");
        }
        Ok(items) => match store.replace_all(&items).await {
            Ok(count) => info!(count, "Stored fresh front-page batch"),
            Err(e) => error!(error = %e, "Failed to store batch"),
        },
        Err(e) => {
            error!(stage = e.stage(), error = %e, "Scrape failed; no data this run");
        }
    }
}
