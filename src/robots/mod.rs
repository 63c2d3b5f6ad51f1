//! Robots.txt handling module
//!
//! This module provides the robots gate: it fetches a site's robots.txt once per
//! crawl session and answers allow/deny for every URL the crawl is about to fetch.
//!
//! The gate fails open. A robots.txt that cannot be fetched, returns a
//! non-success status, or cannot be read leaves the crawl allowed everywhere;
//! the condition is logged but never surfaced as an error.

mod parser;
mod policy;

pub use parser::{ParsedRobots, RobotsParseError};
pub use policy::RobotsPolicy;

use crate::url::{normalize_base_path, parse_site_url, request_target, robots_txt_url, strip_base_path};
use crate::DocpackError;
use reqwest::header::USER_AGENT;
use reqwest::Client;
use std::time::Duration;
use tokio::sync::Mutex;

/// Robots.txt gate for one crawl session
///
/// All state lives behind a single async mutex. The mutex is held across the
/// robots.txt round trip, so permission checks issued while the fetch is in
/// flight wait for its outcome instead of observing a half-initialized policy.
///
/// # Example
///
/// ```no_run
/// use docpack::robots::RobotsGate;
///
/// # async fn example() -> Result<(), docpack::DocpackError> {
/// let gate = RobotsGate::new(reqwest::Client::new(), "docpack/1.0", "/");
/// gate.fetch_policy("https://docs.example.com/").await?;
///
/// if gate.is_allowed("https://docs.example.com/ja/guide").await {
///     // fetch the page
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RobotsGate {
    /// Caller-configured HTTP client (timeouts and retries are its concern)
    client: Client,

    /// Full User-Agent header sent with the robots.txt request
    user_agent: String,

    /// Product token matched against robots.txt `User-agent` groups
    agent_token: String,

    /// Normalized site-mount prefix; empty when the site is crawled from its root
    base_path: String,

    policy: Mutex<RobotsPolicy>,
}

impl RobotsGate {
    /// Creates a gate with an unfetched policy
    ///
    /// # Arguments
    ///
    /// * `client` - The HTTP client used for the robots.txt request
    /// * `user_agent` - The crawler's User-Agent header value
    /// * `base_path` - Site-mount prefix under which the crawled docs live ("" or "/" for none)
    pub fn new(client: Client, user_agent: impl Into<String>, base_path: &str) -> Self {
        let user_agent = user_agent.into();
        let agent_token = agent_token(&user_agent).to_string();

        Self {
            client,
            user_agent,
            agent_token,
            base_path: normalize_base_path(base_path),
            policy: Mutex::new(RobotsPolicy::new()),
        }
    }

    /// Returns the User-Agent header value
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the normalized site-mount prefix
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Fetches and caches robots.txt for the site serving `root_url`
    ///
    /// Only the first call does any work; later calls return `Ok(())` without
    /// touching the network, whatever the outcome of the first one.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The policy is settled (possibly as allow-all)
    /// * `Err(DocpackError)` - `root_url` is not a usable HTTP(S) URL; the policy stays unfetched
    pub async fn fetch_policy(&self, root_url: &str) -> Result<(), DocpackError> {
        let mut policy = self.policy.lock().await;

        if policy.is_fetched() {
            return Ok(());
        }

        let robots_url = robots_txt_url(root_url)?;
        tracing::info!("Fetching robots.txt from {}", robots_url);

        let ruleset = self.download(robots_url).await;
        if ruleset.is_some() {
            tracing::info!("Successfully parsed robots.txt");
        }
        policy.record(ruleset);

        Ok(())
    }

    /// Downloads and parses robots.txt, mapping every failure to `None`
    async fn download(&self, robots_url: url::Url) -> Option<ParsedRobots> {
        let response = match self
            .client
            .get(robots_url)
            .header(USER_AGENT, self.user_agent.as_str())
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Failed to fetch robots.txt: {}. Assuming allow all.", e);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                "robots.txt returned status {}. Assuming allow all.",
                status.as_u16()
            );
            return None;
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Failed to read robots.txt body: {}. Assuming allow all.", e);
                return None;
            }
        };

        match ParsedRobots::parse(&body) {
            Ok(robots) => Some(robots),
            Err(e) => {
                tracing::warn!("Failed to parse robots.txt: {}. Assuming allow all.", e);
                None
            }
        }
    }

    /// Checks whether `target_url` may be fetched
    ///
    /// Returns `true` when the policy has not been fetched, when no ruleset was
    /// stored, or when the URL cannot be parsed.
    pub async fn is_allowed(&self, target_url: &str) -> bool {
        let policy = self.policy.lock().await;

        if policy.ruleset().is_none() {
            return true;
        }

        let Some(url) = parse_site_url(target_url) else {
            return true;
        };

        let target = strip_base_path(&request_target(&url), &self.base_path);
        let allowed = policy.is_allowed(&target, &self.agent_token);
        tracing::debug!("robots.txt check {} ({}): allowed={}", target_url, target, allowed);
        allowed
    }

    /// Returns the `Crawl-delay` that applies to this crawler, if robots.txt declares one
    pub async fn crawl_delay(&self) -> Option<Duration> {
        let policy = self.policy.lock().await;
        let seconds = policy.ruleset()?.crawl_delay(&self.agent_token)?;
        Duration::try_from_secs_f64(seconds).ok()
    }

    /// Returns true once the single fetch attempt has completed
    pub async fn is_fetched(&self) -> bool {
        self.policy.lock().await.is_fetched()
    }
}

/// Extracts the product token from a User-Agent header value
///
/// `docpack/1.0 (+https://example.com)` yields `docpack`.
fn agent_token(user_agent: &str) -> &str {
    user_agent
        .split(|c: char| c == '/' || c.is_whitespace())
        .find(|part| !part.is_empty())
        .unwrap_or("*")
}
