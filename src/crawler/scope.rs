//! Crawl scope: robots gating and locale-aware deduplication for one session
//!
//! The page loop itself (fetching bodies, converting them, packaging output)
//! lives outside this crate. It drives a [`CrawlScope`] like this:
//!
//! 1. [`CrawlScope::prepare`] once, before the first fetch
//! 2. [`CrawlScope::admit`] for every candidate URL; only `Accepted` URLs are fetched
//! 3. [`CrawlScope::preferred_alternate`] on each fetched page, to follow the
//!    translation in the preferred locale
//! 4. [`CrawlScope::locale_variant`] to synthesize the same page in another locale

use crate::config::Config;
use crate::locale::{
    build_locale_url, extract_hreflang, extract_locale, select_preferred_locale_url,
    ExtractedLocale, LocaleSelection, LocaleStrategy,
};
use crate::robots::RobotsGate;
use crate::url::parse_http_url;
use crate::DocpackError;
use reqwest::Client;
use scraper::Html;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;
use url::Url;

/// Outcome of [`CrawlScope::admit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    /// First time this canonical page is seen; fetch it
    Accepted(ExtractedLocale),

    /// The canonical page was already admitted (possibly in another locale)
    Duplicate {
        candidate: ExtractedLocale,
        first_locale: String,
    },

    /// robots.txt forbids fetching the URL
    Denied,
}

impl Admission {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Robots gate, locale strategy and canonical-page index for one crawl session
#[derive(Debug)]
pub struct CrawlScope {
    root_url: Url,
    gate: RobotsGate,
    strategy: LocaleStrategy,

    /// Canonical path -> locale it was first admitted under
    seen: Mutex<HashMap<String, String>>,
}

impl CrawlScope {
    /// Creates a scope for the configured site
    ///
    /// # Arguments
    ///
    /// * `client` - Transport used for robots.txt (usually from `build_http_client`)
    /// * `config` - The crawl configuration
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlScope)` - Ready to `prepare`
    /// * `Err(DocpackError)` - The configured root URL is unusable
    pub fn new(client: Client, config: &Config) -> Result<Self, DocpackError> {
        let root_url = parse_http_url(&config.crawler.root_url)?;
        let gate = RobotsGate::new(
            client,
            config.user_agent.header_value(),
            &config.crawler.base_path,
        );

        Ok(Self {
            root_url,
            gate,
            strategy: config.locale_strategy(),
            seen: Mutex::new(HashMap::new()),
        })
    }

    pub fn root_url(&self) -> &Url {
        &self.root_url
    }

    pub fn gate(&self) -> &RobotsGate {
        &self.gate
    }

    pub fn strategy(&self) -> &LocaleStrategy {
        &self.strategy
    }

    /// Fetches robots.txt for the root URL's site; later calls do nothing
    pub async fn prepare(&self) -> Result<(), DocpackError> {
        self.gate.fetch_policy(self.root_url.as_str()).await
    }

    /// Returns the robots.txt `Crawl-delay` for this crawler, if any
    pub async fn crawl_delay(&self) -> Option<Duration> {
        self.gate.crawl_delay().await
    }

    /// Decides whether a candidate URL should be fetched
    ///
    /// Checks robots.txt first, then records the URL's canonical path. A canonical
    /// path is accepted once per session whatever locale it arrives in, even when
    /// several workers admit variants of it concurrently.
    pub async fn admit(&self, url: &str) -> Admission {
        if !self.gate.is_allowed(url).await {
            tracing::info!("URL {} disallowed by robots.txt", url);
            return Admission::Denied;
        }

        let candidate = extract_locale(url, &self.strategy);
        let mut seen = self.seen.lock().await;

        if let Some(first_locale) = seen.get(&candidate.canonical_path) {
            tracing::debug!(
                "Skipping {}: {} already admitted (locale '{}')",
                url,
                candidate.canonical_path,
                first_locale
            );
            return Admission::Duplicate {
                first_locale: first_locale.clone(),
                candidate,
            };
        }

        seen.insert(candidate.canonical_path.clone(), candidate.locale.clone());
        tracing::debug!(
            "Admitted {} as {} (locale '{}')",
            url,
            candidate.canonical_path,
            candidate.locale
        );
        Admission::Accepted(candidate)
    }

    /// Number of canonical pages admitted so far
    pub async fn admitted_count(&self) -> usize {
        self.seen.lock().await.len()
    }

    /// Chooses the alternate of a fetched page to follow
    ///
    /// Collects the page's `hreflang` links, picks one by the configured priority
    /// and resolves its `href` against `page_url`. Returns `None` when the page has
    /// no alternates or the chosen `href` cannot be resolved.
    pub fn preferred_alternate(&self, page_url: &Url, document: &Html) -> Option<LocaleSelection> {
        let alternates = extract_hreflang(Some(document));
        let selection = select_preferred_locale_url(&alternates, &self.strategy.priority);
        if selection.is_empty() {
            return None;
        }

        match page_url.join(&selection.url) {
            Ok(resolved) => Some(LocaleSelection::new(selection.locale, resolved.as_str())),
            Err(e) => {
                tracing::debug!(
                    "Cannot resolve hreflang href {} on {}: {}",
                    selection.url,
                    page_url,
                    e
                );
                None
            }
        }
    }

    /// Builds the URL of a canonical page in the given locale
    ///
    /// When the site is mounted under a base path, the locale is placed right
    /// after the mount (`/site/ja/page`), mirroring how such sites lay out their
    /// translations.
    pub fn locale_variant(&self, locale: &str, canonical_path: &str) -> String {
        let origin = self.root_url.origin().ascii_serialization();
        let mount = self.gate.base_path();

        match canonical_path.strip_prefix(mount) {
            Some(rest) if !mount.is_empty() => {
                let base = format!("{}{}", origin, mount.trim_end_matches('/'));
                build_locale_url(&base, locale, &format!("/{}", rest), &self.strategy)
            }
            _ => build_locale_url(&origin, locale, canonical_path, &self.strategy),
        }
    }
}
