//! Persistent store for captured batches.
//!
//! The store holds exactly one extraction batch at a time. Updates follow a
//! full-replace policy: delete every existing document, then insert the new
//! batch. The store never blends two runs' data; the trade-off is that a
//! crash between the two steps leaves the collection empty until the next
//! successful run. There is no transaction spanning the steps.
//!
//! The handle is constructed once at process start and passed into the
//! pipeline; nothing here is global state.

use crate::models::NewsItem;
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection};
use thiserror::Error;
use tracing::{debug, info, instrument};

/// A store operation failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

/// Destination collection for extraction batches.
///
/// Implementations own the persisted records outright; the pipeline only
/// ever writes whole batches, never targeted mutations.
#[async_trait]
pub trait NewsStore: Send + Sync {
    /// Replace the entire collection with `items`, returning the inserted
    /// count. Callers must pass a non-empty batch; the empty-extraction
    /// branch never reaches the store.
    async fn replace_all(&self, items: &[NewsItem]) -> Result<u64, StoreError>;

    /// Read the full collection back, in insertion order.
    async fn fetch_all(&self) -> Result<Vec<NewsItem>, StoreError>;
}

/// MongoDB-backed store over a typed collection.
pub struct MongoStore {
    items: Collection<NewsItem>,
}

impl MongoStore {
    /// Build a handle for the given connection target.
    ///
    /// The driver connects lazily, so a wrong address surfaces on first
    /// use rather than here.
    #[instrument(level = "info", skip(url))]
    pub async fn connect(url: &str, database: &str, collection: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(url).await?;
        let items = client.database(database).collection::<NewsItem>(collection);
        info!(database, collection, "Store handle ready");
        Ok(Self { items })
    }
}

#[async_trait]
impl NewsStore for MongoStore {
    async fn replace_all(&self, items: &[NewsItem]) -> Result<u64, StoreError> {
        let deleted = self.items.delete_many(doc! {}).await?.deleted_count;
        debug!(deleted, "Cleared previous batch");

        let inserted = self.items.insert_many(items).await?.inserted_ids.len() as u64;
        Ok(inserted)
    }

    async fn fetch_all(&self) -> Result<Vec<NewsItem>, StoreError> {
        let cursor = self.items.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }
}


#[cfg(test)]
mod tests {
    use super::memory::MemoryStore;
    use super::*;

    fn item(title: &str, link: &str) -> NewsItem {
        NewsItem {
            title: title.to_string(),
            link: link.to_string(),
            tag: "HackerNews".to_string(),
            captured_at: "08:15".to_string(),
        }
    }

    #[tokio::test]
    async fn test_replace_all_discards_every_prior_record() {
        let store = MemoryStore::new();
        let stale: Vec<NewsItem> = (0..10)
            .map(|i| item(&format!("Old {i}"), &format!("https://old.example/{i}")))
            .collect();
        store.seed(stale).await;

        let fresh: Vec<NewsItem> = (0..5)
            .map(|i| item(&format!("New {i}"), &format!("https://new.example/{i}")))
            .collect();
        let inserted = store.replace_all(&fresh).await.unwrap();

        assert_eq!(inserted, 5);
        let held = store.fetch_all().await.unwrap();
        assert_eq!(held, fresh);
        assert!(held.iter().all(|i| !i.title.starts_with("Old")));
    }

    #[tokio::test]
    async fn test_replace_all_preserves_batch_order() {
        let store = MemoryStore::new();
        let batch = vec![
            item("First", "https://ex.com/1"),
            item("Second", "https://ex.com/2"),
            item("Third", "https://ex.com/3"),
        ];

        store.replace_all(&batch).await.unwrap();

        let held = store.fetch_all().await.unwrap();
        let titles: Vec<&str> = held.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["First", "Second", "Third"]);
    }

    #[tokio::test]
    async fn test_round_trip_preserves_fields() {
        let store = MemoryStore::new();
        let batch = vec![item("Story", "item?id=99")];

        store.replace_all(&batch).await.unwrap();
        let held = store.fetch_all().await.unwrap();

        assert_eq!(held[0].title, "Story");
        assert_eq!(held[0].link, "item?id=99");
        assert_eq!(held[0].tag, "HackerNews");
    }
}
