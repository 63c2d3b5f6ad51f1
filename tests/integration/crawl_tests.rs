//! Integration tests for the crawl scope
//!
//! These tests use wiremock to serve a small multilingual documentation site and
//! drive a minimal page loop over it, the way the packaging tool does.

use docpack::config::parse_config;
use docpack::crawler::build_http_client;
use docpack::{Admission, Config, CrawlScope};
use scraper::{Html, Selector};
use std::collections::VecDeque;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// What a crawl over the mock site did
#[derive(Debug, Default)]
struct CrawlReport {
    fetched: Vec<String>,
    denied: Vec<String>,
    duplicates: Vec<String>,
}

/// Creates a test configuration for the mock server
fn create_test_config(root_url: &str, base_path: &str, priority: &str) -> Config {
    parse_config(&format!(
        r#"
[crawler]
root-url = "{}"
base-path = "{}"
request-timeout = 5

[user-agent]
crawler-name = "TestBot"
crawler-version = "1.0.0"
contact-url = "https://example.com/contact"

[locale]
priority = {}
"#,
        root_url, base_path, priority
    ))
    .expect("test config is valid")
}

/// Mounts an HTML page
async fn mount_page(server: &MockServer, page_path: &str, body: String, expected_hits: u64) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .expect(expected_hits)
        .mount(server)
        .await;
}

/// Breadth-first page loop: admit, fetch, follow links and preferred alternates
async fn run_crawl(scope: &CrawlScope, client: &reqwest::Client, seed: &str) -> CrawlReport {
    let mut report = CrawlReport::default();
    let mut queue = VecDeque::from([seed.to_string()]);
    let links = Selector::parse("a[href]").expect("valid selector");

    scope.prepare().await.expect("root URL is valid");

    while let Some(next) = queue.pop_front() {
        match scope.admit(&next).await {
            Admission::Denied => {
                report.denied.push(next);
                continue;
            }
            Admission::Duplicate { .. } => {
                report.duplicates.push(next);
                continue;
            }
            Admission::Accepted(_) => {}
        }

        let page_url = Url::parse(&next).expect("queued URLs are absolute");
        let body = client
            .get(page_url.clone())
            .send()
            .await
            .expect("mock server responds")
            .text()
            .await
            .expect("body is text");
        report.fetched.push(page_url.path().to_string());

        let document = Html::parse_document(&body);

        if let Some(alternate) = scope.preferred_alternate(&page_url, &document) {
            queue.push_back(alternate.url);
        }

        for element in document.select(&links) {
            if let Some(href) = element.value().attr("href") {
                if let Ok(link) = page_url.join(href) {
                    queue.push_back(link.to_string());
                }
            }
        }
    }

    report
}

fn page(alternates: &[(&str, &str)], links: &[&str]) -> String {
    let head: String = alternates
        .iter()
        .map(|(lang, href)| {
            format!(
                r#"<link rel="alternate" hreflang="{}" href="{}">"#,
                lang, href
            )
        })
        .collect();
    let body: String = links
        .iter()
        .map(|href| format!(r#"<a href="{}">link</a>"#, href))
        .collect();
    format!("<html><head>{}</head><body>{}</body></html>", head, body)
}

#[tokio::test]
async fn test_crawl_follows_preferred_locale_once() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("User-agent: *\nDisallow: /ja/admin\n"),
        )
        .expect(1)
        .mount(&server)
        .await;

    mount_page(
        &server,
        "/ja/docs/",
        page(
            &[("en", "/en/docs/"), ("ja-JP", "/ja/docs/"), ("ja", "/ja/docs/")],
            &["/ja/docs/guide", "/ja/admin/panel", "/en/docs/guide"],
        ),
        1,
    )
    .await;
    mount_page(
        &server,
        "/ja/docs/guide",
        page(&[("en", "/en/docs/guide"), ("ja", "/ja/docs/guide")], &[]),
        1,
    )
    .await;
    mount_page(&server, "/en/docs/", page(&[], &[]), 0).await;
    mount_page(&server, "/en/docs/guide", page(&[], &[]), 0).await;
    mount_page(&server, "/ja/admin/panel", page(&[], &[]), 0).await;

    let config = create_test_config(&format!("{}/ja/docs/", base), "", r#"["ja", "en"]"#);
    let client = build_http_client(&config).expect("client builds");
    let scope = CrawlScope::new(client.clone(), &config).expect("scope builds");

    let report = run_crawl(&scope, &client, &format!("{}/ja/docs/", base)).await;

    assert_eq!(report.fetched, vec!["/ja/docs/", "/ja/docs/guide"]);
    assert_eq!(report.denied, vec![format!("{}/ja/admin/panel", base)]);
    assert!(report
        .duplicates
        .contains(&format!("{}/en/docs/guide", base)));
    assert_eq!(scope.admitted_count().await, 2);
}

#[tokio::test]
async fn test_crawl_without_robots_txt_is_allowed() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    mount_page(&server, "/docs", page(&[], &["/admin/secret"]), 1).await;
    mount_page(&server, "/admin/secret", page(&[], &["/docs"]), 1).await;

    let config = create_test_config(&format!("{}/docs", base), "", r#"["en"]"#);
    let client = build_http_client(&config).expect("client builds");
    let scope = CrawlScope::new(client.clone(), &config).expect("scope builds");

    let report = run_crawl(&scope, &client, &format!("{}/docs", base)).await;

    assert_eq!(report.fetched, vec!["/docs", "/admin/secret"]);
    assert!(report.denied.is_empty());
    assert!(scope.gate().is_fetched().await);
}

#[tokio::test]
async fn test_crawl_mirror_under_base_path() {
    let server = MockServer::start().await;
    let base = server.uri();

    // rules are written for the origin site, not the /mirror/ copy
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("User-agent: TestBot\nDisallow: /drafts\n\nUser-agent: *\nDisallow: /\n"),
        )
        .expect(1)
        .mount(&server)
        .await;

    mount_page(
        &server,
        "/mirror/en/guide",
        page(&[], &["/mirror/drafts/next", "/mirror/ja/guide", "/mirror/en/api"]),
        1,
    )
    .await;
    mount_page(&server, "/mirror/en/api", page(&[], &[]), 1).await;
    mount_page(&server, "/mirror/drafts/next", page(&[], &[]), 0).await;
    mount_page(&server, "/mirror/ja/guide", page(&[], &[]), 0).await;

    let config = create_test_config(&format!("{}/mirror/", base), "/mirror", r#"["en"]"#);
    let client = build_http_client(&config).expect("client builds");
    let scope = CrawlScope::new(client.clone(), &config).expect("scope builds");

    let report = run_crawl(&scope, &client, &format!("{}/mirror/en/guide", base)).await;

    assert_eq!(report.fetched, vec!["/mirror/en/guide", "/mirror/en/api"]);
    assert_eq!(report.denied, vec![format!("{}/mirror/drafts/next", base)]);
    assert_eq!(report.duplicates, vec![format!("{}/mirror/ja/guide", base)]);
    assert_eq!(
        scope.locale_variant("ja", "/mirror/api"),
        format!("{}/mirror/ja/api", base)
    );
}
