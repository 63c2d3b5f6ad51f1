//! Locale extraction and locale URL construction
//!
//! [`extract_locale`] and [`build_locale_url`] are inverses of each other for a
//! given [`LocaleStrategy`]:
//!
//! | mode | URL | locale | canonical path |
//! |------|-----|--------|----------------|
//! | path | `https://x/ja/docs/page` | `ja` | `/docs/page` |
//! | query (`hl`) | `https://x/docs/page?hl=ja` | `ja` | `/docs/page` |
//!
//! In path mode the locale segment may appear anywhere in the path, so a site
//! mirrored under a prefix (`/docs-mirror/ja/page`) is still recognized. The
//! first segment that is a registered locale wins.

use crate::locale::registry::is_known_locale;
use crate::locale::{ExtractedLocale, LocaleMode, LocaleStrategy};
use crate::url::{parse_site_url, request_target};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Shape of a locale path segment: a language code with an optional region or script
static LOCALE_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z]{2}(?:-[a-z]{2,4})?$").expect("hardcoded regex pattern is valid")
});

/// Extracts the locale and canonical path from a URL or site-relative path
///
/// Input that cannot be parsed is returned with no locale; its canonical path is
/// the input itself when it looks like a path, `/` otherwise.
///
/// # Examples
///
/// ```
/// use docpack::locale::{extract_locale, LocaleStrategy};
///
/// let path_mode = LocaleStrategy::default();
/// let found = extract_locale("https://docs.example.com/ja/docs/page", &path_mode);
/// assert_eq!(found.locale, "ja");
/// assert_eq!(found.canonical_path, "/docs/page");
///
/// let query_mode = LocaleStrategy::query_param("hl", ["en"]);
/// let found = extract_locale("https://docs.example.com/docs?hl=ja", &query_mode);
/// assert_eq!(found.locale, "ja");
/// assert_eq!(found.canonical_path, "/docs");
/// ```
pub fn extract_locale(input: &str, strategy: &LocaleStrategy) -> ExtractedLocale {
    match parse_site_url(input) {
        Some(url) => extract_locale_from_url(&url, strategy),
        None if input.starts_with('/') => ExtractedLocale::undetected(input),
        None => ExtractedLocale::undetected("/"),
    }
}

/// Extracts the locale and canonical path from a parsed URL
pub fn extract_locale_from_url(url: &Url, strategy: &LocaleStrategy) -> ExtractedLocale {
    // opaque URLs such as `mailto:` have no site path
    if url.cannot_be_a_base() || !url.path().starts_with('/') {
        return ExtractedLocale::undetected("/");
    }

    match strategy.mode() {
        LocaleMode::QueryParam(name) => {
            let locale = url
                .query_pairs()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.into_owned())
                .unwrap_or_default();
            ExtractedLocale::new(locale, url.path())
        }
        LocaleMode::PathSegment => split_path_locale(url.path()),
    }
}

/// Finds the first registered locale segment in `path` and removes it
fn split_path_locale(path: &str) -> ExtractedLocale {
    let slashes: Vec<usize> = path.match_indices('/').map(|(i, _)| i).collect();

    for pair in slashes.windows(2) {
        let (open, close) = (pair[0], pair[1]);
        let segment = &path[open + 1..close];

        if !LOCALE_SEGMENT.is_match(segment) {
            continue;
        }

        let locale = segment.to_ascii_lowercase();
        if !is_known_locale(&locale) {
            continue;
        }

        let before = &path[..open];
        let before = before.strip_suffix('/').unwrap_or(before);
        let canonical = format!("{}{}", before, &path[close..]);
        return ExtractedLocale::new(locale, canonical);
    }

    let canonical = if path.is_empty() { "/" } else { path };
    ExtractedLocale::undetected(canonical)
}

/// Builds the URL of `canonical_path` in `locale`
///
/// An empty locale yields `base_url + canonical_path`. In query mode the locale
/// parameter is set (replacing any existing value) and the query is re-encoded
/// sorted by key; if the concatenation does not parse as a URL it is returned
/// unchanged. A site-relative concatenation (empty or path-only `base_url`)
/// stays site-relative: `"" + "/docs"` becomes `/docs?hl=ja`. In path mode the
/// locale is inserted as the first path segment.
///
/// # Arguments
///
/// * `base_url` - Origin (and optional mount prefix) without a trailing slash
/// * `locale` - Locale code to encode
/// * `canonical_path` - Locale-free path starting with `/`
/// * `strategy` - Locale encoding in use
///
/// # Examples
///
/// ```
/// use docpack::locale::{build_locale_url, LocaleStrategy};
///
/// let path_mode = LocaleStrategy::default();
/// assert_eq!(
///     build_locale_url("https://x.com", "ja", "/docs/page", &path_mode),
///     "https://x.com/ja/docs/page"
/// );
///
/// let query_mode = LocaleStrategy::query_param("hl", ["en"]);
/// assert_eq!(
///     build_locale_url("https://x.com", "ja", "/docs?b=2&a=1", &query_mode),
///     "https://x.com/docs?a=1&b=2&hl=ja"
/// );
/// ```
pub fn build_locale_url(
    base_url: &str,
    locale: &str,
    canonical_path: &str,
    strategy: &LocaleStrategy,
) -> String {
    let joined = format!("{}{}", base_url, canonical_path);
    if locale.is_empty() {
        return joined;
    }

    match strategy.mode() {
        LocaleMode::QueryParam(name) => {
            let (mut url, site_relative) = match Url::parse(&joined) {
                Ok(url) => (url, false),
                Err(url::ParseError::RelativeUrlWithoutBase)
                    if joined.starts_with('/') && !joined.starts_with("//") =>
                {
                    match parse_site_url(&joined) {
                        Some(url) => (url, true),
                        None => return joined,
                    }
                }
                Err(e) => {
                    tracing::debug!(
                        "Cannot parse {} as a URL ({}), leaving it unlocalized",
                        joined,
                        e
                    );
                    return joined;
                }
            };

            let mut pairs: Vec<(String, String)> = url
                .query_pairs()
                .filter(|(key, _)| key != name)
                .map(|(key, value)| (key.into_owned(), value.into_owned()))
                .collect();
            pairs.push((name.to_string(), locale.to_string()));
            pairs.sort_by(|a, b| a.0.cmp(&b.0));

            url.query_pairs_mut().clear().extend_pairs(pairs.iter());

            if !site_relative {
                return url.to_string();
            }

            let mut target = request_target(&url);
            if let Some(fragment) = url.fragment() {
                target.push('#');
                target.push_str(fragment);
            }
            target
        }
        LocaleMode::PathSegment => format!("{}/{}{}", base_url, locale, canonical_path),
    }
}
