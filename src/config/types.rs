use crate::locale::{LocaleStrategy, DEFAULT_LOCALE_PRIORITY};
use serde::Deserialize;

/// Main configuration structure for docpack
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub locale: LocaleConfig,
}

impl Config {
    /// Returns the locale strategy described by the `[locale]` table
    pub fn locale_strategy(&self) -> LocaleStrategy {
        self.locale.to_strategy()
    }
}

/// Crawl target configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// URL the crawl starts from; robots.txt is fetched from its origin
    #[serde(rename = "root-url")]
    pub root_url: String,

    /// Site-mount prefix of a mirrored documentation site ("/" or empty for none)
    #[serde(rename = "base-path", default)]
    pub base_path: String,

    /// Per-request HTTP timeout (seconds)
    #[serde(rename = "request-timeout", default = "default_request_timeout")]
    pub request_timeout: u64,
}

fn default_request_timeout() -> u64 {
    30
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler; also the robots.txt product token
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,
}

impl UserAgentConfig {
    /// Formats the User-Agent header: `Name/Version (+ContactURL)`
    pub fn header_value(&self) -> String {
        format!(
            "{}/{} (+{})",
            self.crawler_name, self.crawler_version, self.contact_url
        )
    }
}

/// Locale detection configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LocaleConfig {
    /// Preferred locales, most preferred first
    #[serde(default = "default_priority")]
    pub priority: Vec<String>,

    /// Query parameter carrying the locale (e.g. "hl"); absent selects path mode
    #[serde(rename = "param-name", default)]
    pub param_name: Option<String>,
}

fn default_priority() -> Vec<String> {
    DEFAULT_LOCALE_PRIORITY.iter().map(|s| s.to_string()).collect()
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            priority: default_priority(),
            param_name: None,
        }
    }
}

impl LocaleConfig {
    pub fn to_strategy(&self) -> LocaleStrategy {
        LocaleStrategy {
            priority: self.priority.clone(),
            param_name: self.param_name.clone().filter(|name| !name.is_empty()),
        }
    }
}
