//! HTTP client construction
//!
//! The robots gate never builds its own transport: the crawl hands it the same
//! client it fetches pages with, so timeouts, compression and the user agent
//! string are configured in one place.

use crate::config::Config;
use reqwest::Client;
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The crawl configuration (user agent and request timeout)
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use docpack::config::load_config;
/// use docpack::crawler::build_http_client;
/// use std::path::Path;
///
/// let config = load_config(Path::new("docpack.toml")).unwrap();
/// let client = build_http_client(&config).unwrap();
/// ```
pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.header_value())
        .timeout(Duration::from_secs(config.crawler.request_timeout))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}
