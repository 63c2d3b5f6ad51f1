//! `hreflang` alternate link collection
//!
//! Pages announce their translations with
//! `<link rel="alternate" hreflang="ja" href="...">`. The collector walks the
//! whole document, not just `<head>`, because some generators emit these links
//! in the body.

use crate::locale::HreflangMap;
use scraper::{Html, Selector};

/// Collects `hreflang` alternates from a parsed page
///
/// Matches `link` elements with `rel="alternate"` and non-empty `hreflang` and
/// `href` attributes. Keys are the lowercased `hreflang` values; values are the
/// `href` exactly as written (resolving relative URLs is left to the caller).
/// When a code appears more than once, the last one in document order wins.
/// A missing document yields an empty map.
///
/// # Example
///
/// ```
/// use docpack::locale::extract_hreflang;
/// use scraper::Html;
///
/// let html = r#"<html><head>
///     <link rel="alternate" hreflang="EN" href="https://x/en">
///     <link rel="alternate" hreflang="ja" href="https://x/ja">
/// </head></html>"#;
/// let doc = Html::parse_document(html);
/// let map = extract_hreflang(Some(&doc));
/// assert_eq!(map.get("en").map(String::as_str), Some("https://x/en"));
/// assert_eq!(map.get("ja").map(String::as_str), Some("https://x/ja"));
/// ```
pub fn extract_hreflang(document: Option<&Html>) -> HreflangMap {
    let mut result = HreflangMap::new();

    let Some(document) = document else {
        return result;
    };

    let Ok(selector) = Selector::parse("link[hreflang][href]") else {
        return result;
    };

    for element in document.select(&selector) {
        let element = element.value();

        if element.attr("rel") != Some("alternate") {
            continue;
        }

        let hreflang = element.attr("hreflang").unwrap_or_default();
        let href = element.attr("href").unwrap_or_default();
        if hreflang.is_empty() || href.is_empty() {
            continue;
        }

        result.insert(hreflang.to_lowercase(), href.to_string());
    }

    result
}

/// Convenience wrapper that parses raw HTML before collecting alternates
pub fn extract_hreflang_from_html(html: &str) -> HreflangMap {
    let document = Html::parse_document(html);
    extract_hreflang(Some(&document))
}
