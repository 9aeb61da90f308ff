//! Command-line interface definitions.
//!
//! The only runtime configuration is the store connection target. The
//! target URL, the item cap, the request timeout, and the source tag are
//! deliberately compile-time constants in the scraper module; the job
//! always snapshots the same page the same way.

use clap::Parser;

/// Command-line arguments for the snapshot job.
///
/// Defaults match the deployment the serving side reads from, so running
/// with no arguments against a local MongoDB does the right thing.
///
/// # Examples
///
/// ```sh
/// # Local MongoDB with default database/collection
/// hn_frontpage
///
/// # Point at a different instance
/// hn_frontpage --mongo-url mongodb://db.internal:27017 --collection tech_news
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// MongoDB connection string
    #[arg(long, env = "MONGO_URL", default_value = "mongodb://localhost:27017")]
    pub mongo_url: String,

    /// Database holding the news collection
    #[arg(long, env = "MONGO_DATABASE", default_value = "my_fullstack_journey")]
    pub database: String,

    /// Collection replaced wholesale on every successful run
    #[arg(long, env = "MONGO_COLLECTION", default_value = "tech_news")]
    pub collection: String,
}
