//! Hacker News front-page scraper.
//!
//! Fetches `https://news.ycombinator.com/` once and extracts the top story
//! links. Story titles live in `<span class="titleline">` elements, one per
//! row, in ranking order top to bottom; the first anchor inside each one is
//! the story link.
//!
//! Only the first [`MAX_ITEMS`] rows are considered. Rows without an anchor
//! are skipped silently, so a batch may hold fewer records than the cap.

use crate::models::NewsItem;
use crate::utils::capture_time;
use reqwest::{Client, StatusCode};
use scraper::{Html, Selector};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// The page this job snapshots.
pub const FRONT_PAGE_URL: &str = "https://news.ycombinator.com/";

/// Source tag stamped on every record of a batch.
pub const SOURCE_TAG: &str = "HackerNews";

/// Cap on extracted records per run. Front-page ranking falls off fast;
/// past the first handful the stories are not worth storing.
pub const MAX_ITEMS: usize = 8;

/// Browser masquerade; HN serves bare clients a captcha page at times.
const USER_AGENT: &str = "Mozilla/5.0";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A scrape failure, tagged with the stage that caused it.
///
/// Every variant collapses to "no data this run" at the pipeline boundary;
/// the tag only feeds the diagnostic log line.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Transport-level failure: DNS, connection, timeout, body read.
    #[error("request failed: {0}")]
    Fetch(#[from] reqwest::Error),
    /// Response arrived with a non-200 status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    /// Failure while traversing the parsed document.
    #[error("parse error: {0}")]
    Parse(String),
}

impl ScrapeError {
    /// Stage label for diagnostics.
    pub fn stage(&self) -> &'static str {
        match self {
            ScrapeError::Fetch(_) | ScrapeError::Status(_) => "fetch",
            ScrapeError::Parse(_) => "parse",
        }
    }
}

/// Build the HTTP client used for the single front-page request.
///
/// Constructed once at startup with the browser user agent and the fixed
/// request timeout baked in.
pub fn build_client() -> Result<Client, ScrapeError> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    Ok(client)
}

/// Fetch the front page and return the body text.
///
/// Only status 200 counts as success; anything else is logged and surfaced
/// as [`ScrapeError::Status`] with no retry.
#[instrument(level = "info", skip(client))]
async fn fetch_front_page(client: &Client, url: &str) -> Result<String, ScrapeError> {
    let response = client.get(url).send().await?;
    let status = response.status();

    if status != StatusCode::OK {
        warn!(status = status.as_u16(), "Front page request rejected");
        return Err(ScrapeError::Status(status.as_u16()));
    }

    let body = response.text().await?;
    debug!(bytes = body.len(), "Fetched front page");
    Ok(body)
}

/// Extract up to [`MAX_ITEMS`] records from front-page HTML.
///
/// Pure function over the body text; `captured_at` is computed once by the
/// caller so the whole batch shares one stamp. The cap is applied before
/// the anchor check: at most the first 8 title rows are considered, and a
/// row without an anchor shrinks the batch rather than pulling in row 9.
pub fn extract_items(html: &str, captured_at: &str) -> Result<Vec<NewsItem>, ScrapeError> {
    let story_selector =
        Selector::parse(".titleline").map_err(|e| ScrapeError::Parse(e.to_string()))?;
    let anchor_selector = Selector::parse("a").map_err(|e| ScrapeError::Parse(e.to_string()))?;

    let document = Html::parse_document(html);
    let mut items = Vec::new();

    for row in document.select(&story_selector).take(MAX_ITEMS) {
        let Some(anchor) = row.select(&anchor_selector).next() else {
            debug!("Title row without anchor; skipping");
            continue;
        };
        let Some(href) = anchor.value().attr("href") else {
            debug!("Anchor without href; skipping");
            continue;
        };

        // Untrimmed, unvalidated; relative hrefs pass through as-is.
        let title = anchor.text().collect::<String>();
        items.push(NewsItem {
            title,
            link: href.to_string(),
            tag: SOURCE_TAG.to_string(),
            captured_at: captured_at.to_string(),
        });
    }

    Ok(items)
}

/// Fetch the front page and extract one batch of records.
///
/// The single operation the pipeline calls: any failure in either stage
/// comes back as one tagged [`ScrapeError`], and an `Ok` batch may be empty
/// when nothing on the page matched.
#[instrument(level = "info", skip(client))]
pub async fn scrape_front_page(client: &Client, url: &str) -> Result<Vec<NewsItem>, ScrapeError> {
    info!(url, "Fetching front page");
    let body = fetch_front_page(client, url).await?;

    let captured_at = capture_time();
    let items = extract_items(&body, &captured_at)?;
    info!(count = items.len(), "Extracted front-page stories");
    Ok(items)
}
