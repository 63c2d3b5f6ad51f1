//! Crawler-facing composition of the robots gate and the locale utilities
//!
//! This module contains what a page loop needs from docpack:
//! - Building the HTTP client shared by page fetches and the robots gate
//! - Admitting candidate URLs (robots.txt check plus canonical-page dedup)
//! - Following the preferred `hreflang` alternate of a fetched page

mod fetcher;
mod scope;

pub use fetcher::build_http_client;
pub use scope::{Admission, CrawlScope};
