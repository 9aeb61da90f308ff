//! Data model for captured front-page stories.
//!
//! The whole pipeline deals in a single record type, [`NewsItem`]. One run
//! produces one batch of these, and the store only ever holds one batch at
//! a time (see the full-replace policy in `store`).
//!
//! The wire shape uses camelCase field names; this is the de facto schema
//! the serving side reads back, so it is pinned with serde renames rather
//! than left to Rust naming.

use serde::{Deserialize, Serialize};

/// A single story captured from the front page.
///
/// Records carry no identity that survives across runs: no stable key, no
/// rank field. Their position in the batch is their rank (front-page order
/// top to bottom), preserved by inserting the batch in order.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    /// Display text of the story link. May be empty if the markup carried
    /// no text; not validated.
    pub title: String,
    /// The anchor's raw `href`. Relative URLs are passed through
    /// uncorrected.
    pub link: String,
    /// Constant tag identifying the ingestion source, e.g. `"HackerNews"`.
    pub tag: String,
    /// Local wall-clock capture time as `HH:MM`. Every record in a batch
    /// shares the same value, so a batch is time-coherent.
    pub captured_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewsItem {
        NewsItem {
            title: "Show HN: A thing".to_string(),
            link: "https://example.com/thing".to_string(),
            tag: "HackerNews".to_string(),
            captured_at: "09:41".to_string(),
        }
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"capturedAt\":\"09:41\""));
        assert!(json.contains("\"link\":\"https://example.com/thing\""));
        assert!(!json.contains("captured_at"));
    }

    #[test]
    fn test_bson_document_round_trip() {
        let item = sample();
        let doc = mongodb::bson::to_document(&item).unwrap();
        assert_eq!(doc.get_str("title").unwrap(), "Show HN: A thing");
        assert_eq!(doc.get_str("capturedAt").unwrap(), "09:41");

        let back: NewsItem = mongodb::bson::from_document(doc).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_empty_title_is_representable() {
        let mut item = sample();
        item.title = String::new();
        let back: NewsItem =
            serde_json::from_str(&serde_json::to_string(&item).unwrap()).unwrap();
        assert_eq!(back.title, "");
        assert_eq!(back.link, item.link);
    }

    #[test]
    fn test_relative_link_survives_untouched() {
        let json = r#"{
            "title": "Ask HN: Something",
            "link": "item?id=12345",
            "tag": "HackerNews",
            "capturedAt": "23:59"
        }"#;
        let item: NewsItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.link, "item?id=12345");
    }
}
