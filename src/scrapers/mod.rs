//! Front-page scrapers.
//!
//! One module per source. Each scraper exposes a single combined
//! fetch-and-extract operation returning either a batch of records or a
//! failure tagged with the stage that caused it; callers never have to
//! distinguish "network died" from "page structure drifted" unless they
//! want to log it.
//!
//! Currently the only source is Hacker News ([`hackernews`]).

pub mod hackernews;
