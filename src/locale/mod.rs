//! Locale handling module
//!
//! Documentation sites publish the same page under several locales, either as a
//! path segment (`/ja/docs/page`) or as a query parameter (`/docs/page?hl=ja`).
//! This module splits URLs into a locale and a canonical path, rebuilds locale
//! URLs from that pair, collects `hreflang` alternates from parsed pages and
//! picks the preferred one.
//!
//! Everything here is a pure function of its inputs and is safe to call from any
//! number of crawl workers at once.

mod hreflang;
mod normalize;
mod picker;
mod registry;
mod resolver;

pub use hreflang::{extract_hreflang, extract_hreflang_from_html};
pub use normalize::normalize_locale;
pub use picker::select_preferred_locale_url;
pub use registry::{is_known_locale, KNOWN_LOCALES};
pub use resolver::{build_locale_url, extract_locale, extract_locale_from_url};

use std::collections::BTreeMap;

/// Locale preference order used when none is configured
pub const DEFAULT_LOCALE_PRIORITY: &[&str] = &["en", "ja"];

/// Map from lowercase `hreflang` code to the alternate's URL
///
/// Ordered by locale code, so iteration (and the picker's fallback) is deterministic.
pub type HreflangMap = BTreeMap<String, String>;

/// How locales are encoded in the site's URLs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleMode<'a> {
    /// The locale is the value of the named query parameter (e.g. `?hl=ja`)
    QueryParam(&'a str),
    /// The locale is a path segment (e.g. `/ja/docs`)
    PathSegment,
}

/// Locale detection and preference settings for one crawl
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleStrategy {
    /// Preferred locales, most preferred first
    pub priority: Vec<String>,

    /// Query parameter carrying the locale; `None` or empty selects path mode
    pub param_name: Option<String>,
}

impl LocaleStrategy {
    /// Path-segment detection with the given priority
    pub fn path_segments<S: Into<String>>(priority: impl IntoIterator<Item = S>) -> Self {
        Self {
            priority: priority.into_iter().map(Into::into).collect(),
            param_name: None,
        }
    }

    /// Query-parameter detection with the given parameter name and priority
    pub fn query_param<S: Into<String>>(
        param_name: impl Into<String>,
        priority: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            priority: priority.into_iter().map(Into::into).collect(),
            param_name: Some(param_name.into()),
        }
    }

    /// Returns the active detection mode
    pub fn mode(&self) -> LocaleMode<'_> {
        match self.param_name.as_deref() {
            Some(name) if !name.is_empty() => LocaleMode::QueryParam(name),
            _ => LocaleMode::PathSegment,
        }
    }
}

impl Default for LocaleStrategy {
    fn default() -> Self {
        Self::path_segments(DEFAULT_LOCALE_PRIORITY.iter().copied())
    }
}

/// A URL split into its locale and its locale-free path
///
/// The canonical path identifies "the same page" across locales and is what the
/// crawl frontier deduplicates on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExtractedLocale {
    /// Detected locale, empty when none was found
    pub locale: String,

    /// Site-relative path with the locale removed; always starts with `/`
    pub canonical_path: String,
}

impl ExtractedLocale {
    pub fn new(locale: impl Into<String>, canonical_path: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            canonical_path: canonical_path.into(),
        }
    }

    /// A result with no locale detected
    pub fn undetected(canonical_path: impl Into<String>) -> Self {
        Self::new("", canonical_path)
    }

    pub fn is_detected(&self) -> bool {
        !self.locale.is_empty()
    }
}

/// The alternate chosen by [`select_preferred_locale_url`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleSelection {
    pub locale: String,
    pub url: String,
}

impl LocaleSelection {
    pub fn new(locale: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            url: url.into(),
        }
    }

    /// True only for the selection made from an empty map
    pub fn is_empty(&self) -> bool {
        self.locale.is_empty() && self.url.is_empty()
    }
}
