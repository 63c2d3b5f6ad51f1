use url::Url;

/// Placeholder origin used to parse site-relative paths
const RELATIVE_BASE: &str = "http://site.invalid/";

/// Parses either an absolute URL or a site-relative path such as `/ja/docs?x=1`
///
/// Returns `None` when the input cannot be interpreted as either.
pub fn parse_site_url(input: &str) -> Option<Url> {
    match Url::parse(input) {
        Ok(url) => Some(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base = Url::parse(RELATIVE_BASE).ok()?;
            base.join(input).ok()
        }
        Err(_) => None,
    }
}

/// Returns the request target robots.txt rules are matched against
///
/// This is the URL path, followed by `?` and the raw query when the URL has a
/// non-empty query string.
pub fn request_target(url: &Url) -> String {
    match url.query() {
        Some(query) if !query.is_empty() => format!("{}?{}", url.path(), query),
        _ => url.path().to_string(),
    }
}

/// Normalizes a site-mount prefix
///
/// A non-empty prefix gains a trailing slash so that `/site` never matches
/// `/site-other`. The bare root `/` means "no prefix" and becomes empty.
/// Absolute prefixes are percent-encoded the way [`Url::path`] encodes request
/// paths, so `/my docs` becomes `/my%20docs/`.
pub fn normalize_base_path(base_path: &str) -> String {
    let trimmed = base_path.trim();
    if trimmed.is_empty() || trimmed == "/" {
        return String::new();
    }

    let prefix = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };

    if !prefix.starts_with('/') || prefix.starts_with("//") {
        return prefix;
    }

    match parse_site_url(&prefix) {
        Some(url) => url.path().to_string(),
        None => prefix,
    }
}

/// Rewrites a request target under a site-mount prefix to be relative to the site root
///
/// `base_path` must already be normalized (see [`normalize_base_path`]). Targets outside the
/// prefix are returned unchanged.
///
/// # Examples
///
/// ```
/// use docpack::url::strip_base_path;
///
/// assert_eq!(strip_base_path("/site/docs/ng", "/site/"), "/docs/ng");
/// assert_eq!(strip_base_path("/other/docs", "/site/"), "/other/docs");
/// ```
pub fn strip_base_path(target: &str, base_path: &str) -> String {
    if base_path.is_empty() {
        return target.to_string();
    }

    match target.strip_prefix(base_path) {
        Some(rest) => format!("/{}", rest),
        None => target.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_absolute_url() {
        let url = parse_site_url("https://example.com/ja/docs").unwrap();
        assert_eq!(url.host_str(), Some("example.com"));
        assert_eq!(url.path(), "/ja/docs");
    }

    #[test]
    fn test_parse_relative_path() {
        let url = parse_site_url("/ja/docs?hl=ja").unwrap();
        assert_eq!(url.path(), "/ja/docs");
        assert_eq!(url.query(), Some("hl=ja"));
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_site_url("http://[::1").is_none());
    }

    #[test]
    fn test_request_target_without_query() {
        let url = Url::parse("https://example.com/docs/page").unwrap();
        assert_eq!(request_target(&url), "/docs/page");
    }

    #[test]
    fn test_request_target_with_query() {
        let url = Url::parse("https://example.com/search?q=rust&page=2").unwrap();
        assert_eq!(request_target(&url), "/search?q=rust&page=2");
    }

    #[test]
    fn test_request_target_ignores_fragment() {
        let url = Url::parse("https://example.com/docs#intro").unwrap();
        assert_eq!(request_target(&url), "/docs");
    }

    #[test]
    fn test_normalize_base_path() {
        assert_eq!(normalize_base_path(""), "");
        assert_eq!(normalize_base_path("/"), "");
        assert_eq!(normalize_base_path("/site"), "/site/");
        assert_eq!(normalize_base_path("/site/"), "/site/");
    }

    #[test]
    fn test_normalize_base_path_encodes_like_request_paths() {
        assert_eq!(normalize_base_path("/my docs"), "/my%20docs/");
        assert_eq!(normalize_base_path("/my%20docs/"), "/my%20docs/");

        let url = Url::parse("https://example.com/ドキュメント/docs/x").unwrap();
        let base = normalize_base_path("/ドキュメント");
        assert!(base.is_ascii());
        assert_eq!(strip_base_path(&request_target(&url), &base), "/docs/x");
    }

    #[test]
    fn test_strip_base_path_without_prefix() {
        assert_eq!(strip_base_path("/docs/page", ""), "/docs/page");
    }

    #[test]
    fn test_strip_base_path_keeps_query() {
        assert_eq!(strip_base_path("/site/search?q=x", "/site/"), "/search?q=x");
    }

    #[test]
    fn test_strip_base_path_requires_full_segment() {
        assert_eq!(strip_base_path("/site-other/page", "/site/"), "/site-other/page");
    }
}
