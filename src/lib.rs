//! docpack: locale-aware URL resolution and robots.txt compliance for documentation crawls
//!
//! This crate decides which URL variants of a documentation site represent the same page
//! across locales, and gates every fetch behind the site's robots.txt policy.

pub mod config;
pub mod crawler;
pub mod locale;
pub mod robots;
pub mod url;

use thiserror::Error;

/// Main error type for docpack operations
#[derive(Debug, Error)]
pub enum DocpackError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL: {0}")]
    MissingHost(String),
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{Admission, CrawlScope};
pub use locale::{
    build_locale_url, extract_hreflang, extract_locale, normalize_locale,
    select_preferred_locale_url, ExtractedLocale, HreflangMap, LocaleSelection, LocaleStrategy,
};
pub use robots::RobotsGate;
