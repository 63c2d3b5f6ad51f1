//! Configuration module for docpack
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use docpack::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("docpack.toml")).unwrap();
//! println!("Crawl root: {}", config.crawler.root_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, LocaleConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
