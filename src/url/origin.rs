use crate::{UrlError, UrlResult};
use url::Url;

/// Parses an absolute HTTP(S) URL that must carry a host
///
/// # Arguments
///
/// * `url_str` - The URL string to parse
///
/// # Returns
///
/// * `Ok(Url)` - The parsed URL
/// * `Err(UrlError)` - The string is not a URL, is not HTTP(S), or has no host
pub fn parse_http_url(url_str: &str) -> UrlResult<Url> {
    let url = Url::parse(url_str).map_err(|e| UrlError::Parse(format!("{}: {}", url_str, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(url.scheme().to_string()));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingHost(url_str.to_string()));
    }

    Ok(url)
}

/// Derives the robots.txt location for the site that serves `root_url`
///
/// The robots.txt file always lives at the root of the origin, regardless of
/// the path the crawl starts from.
///
/// # Examples
///
/// ```
/// use docpack::url::robots_txt_url;
///
/// let url = robots_txt_url("https://docs.example.com/site/guide/").unwrap();
/// assert_eq!(url.as_str(), "https://docs.example.com/robots.txt");
/// ```
pub fn robots_txt_url(root_url: &str) -> UrlResult<Url> {
    let mut url = parse_http_url(root_url)?;
    url.set_path("/robots.txt");
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_robots_url_from_root() {
        let url = robots_txt_url("https://example.com/").unwrap();
        assert_eq!(url.as_str(), "https://example.com/robots.txt");
    }

    #[test]
    fn test_robots_url_drops_path_query_and_fragment() {
        let url = robots_txt_url("https://example.com/docs/ja/page?hl=ja#intro").unwrap();
        assert_eq!(url.as_str(), "https://example.com/robots.txt");
    }

    #[test]
    fn test_robots_url_keeps_port() {
        let url = robots_txt_url("http://127.0.0.1:8080/site/").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/robots.txt");
    }

    #[test]
    fn test_robots_url_rejects_relative() {
        let result = robots_txt_url("/docs/page");
        assert!(matches!(result.unwrap_err(), UrlError::Parse(_)));
    }

    #[test]
    fn test_robots_url_rejects_non_http() {
        let result = robots_txt_url("ftp://example.com/");
        assert!(matches!(result.unwrap_err(), UrlError::InvalidScheme(_)));
    }

    #[test]
    fn test_parse_http_url_lowercases_host() {
        let url = parse_http_url("https://DOCS.Example.COM/Page").unwrap();
        assert_eq!(url.host_str(), Some("docs.example.com"));
        assert_eq!(url.path(), "/Page");
    }
}
