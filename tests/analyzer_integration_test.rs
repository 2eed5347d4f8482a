// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

// End-to-end tests for the analysis pipeline.
// All pages are served by a local wiremock server; no real sites are contacted.

use seo_agent::models::config::AnalyzerConfig;
use seo_agent::{AnalysisError, Analyzer};
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Page with a known shape: title, description, 2 h1, 4 images, more than
/// 300 words, keywords "seo,test" with only "seo" in the text, 6 internal
/// links, 1 external link and an og:title tag.
fn fixture_html(images_with_alt: usize) -> String {
    let images = (0..4)
        .map(|i| {
            if i < images_with_alt {
                format!(r#"<img src="/img/{i}.png" alt="picture {i}">"#)
            } else {
                format!(r#"<img src="/img/{i}.png">"#)
            }
        })
        .collect::<String>();
    let filler = vec!["lorem"; 340].join(" ");

    format!(
        r##"<!DOCTYPE html>
<html>
<head>
    <title>Fixture Page</title>
    <meta name="description" content="Page used by the integration tests">
    <meta name="keywords" content="seo,test">
    <meta property="og:title" content="Fixture Page">
</head>
<body>
    <h1>Welcome</h1>
    <h1>Second heading</h1>
    {images}
    <p>Basic seo advice. {filler}</p>
    <a href="/">Home</a>
    <a href="/about">About</a>
    <a href="contact">Contact</a>
    <a href="/blog?page=2">Blog</a>
    <a href="#top">Top</a>
    <a href="mailto:team@localhost">Mail</a>
    <a href="https://external.example.org/">Partner</a>
    <a href="http://">Broken</a>
</body>
</html>"##
    )
}

async fn mount_site(server: &MockServer, page: ResponseTemplate, robots: u16, sitemap: u16) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(page)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(robots).set_body_string("User-agent: *\nAllow: /\n"))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(sitemap))
        .mount(server)
        .await;
}

fn html_page(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "text/html; charset=utf-8")
}

fn test_analyzer(timeout: Duration) -> Analyzer {
    let config = AnalyzerConfig::default().with_timeout(timeout);
    Analyzer::new(&config).expect("Failed to build analyzer")
}

#[tokio::test]
async fn test_fixture_page_report() {
    let server = MockServer::start().await;
    mount_site(&server, html_page(fixture_html(2)), 200, 404).await;

    let report = test_analyzer(Duration::from_secs(10))
        .analyze(&server.uri())
        .await
        .expect("Analysis should succeed");

    assert_eq!(report.url, format!("{}/", server.uri()));
    assert_eq!(report.status_code, 200);

    assert!(!report.technical.https);
    assert!(report.technical.robots);
    assert!(!report.technical.sitemap);

    assert_eq!(report.onpage.title.as_deref(), Some("Fixture Page"));
    assert!(report.onpage.description.is_some());
    assert_eq!(report.onpage.h1_tags, vec!["Welcome", "Second heading"]);
    assert_eq!(report.onpage.image_count, 4);
    assert_eq!(report.onpage.images_with_alt, 2);

    assert!(report.content.word_count > 300);
    assert_eq!(report.content.keywords.len(), 2);
    assert_eq!(report.content.keyword_presence.get("seo"), Some(&true));
    assert_eq!(report.content.keyword_presence.get("test"), Some(&false));

    // mailto counts as internal, "http://" is dropped
    assert_eq!(report.links.internal_count, 6);
    assert_eq!(report.links.external_count, 1);

    assert!(report.social.has_social_tags);

    assert_eq!(report.breakdown.technical, 16.67);
    // 2 of 4 images with alt is not above half
    assert_eq!(report.breakdown.onpage, 18.75);
    assert_eq!(report.breakdown.content, 20.0);
    assert_eq!(report.breakdown.links, 11.0);
    assert_eq!(report.breakdown.social, 15.0);
    assert_eq!(report.score, 81.42);
}

#[tokio::test]
async fn test_fixture_page_with_most_images_described() {
    let server = MockServer::start().await;
    mount_site(&server, html_page(fixture_html(3)), 200, 404).await;

    let report = test_analyzer(Duration::from_secs(10))
        .analyze(&server.uri())
        .await
        .expect("Analysis should succeed");

    assert_eq!(report.breakdown.onpage, 25.0);
    assert_eq!(report.score, 87.67);
}

#[tokio::test]
async fn test_repeated_analysis_is_identical() {
    let server = MockServer::start().await;
    mount_site(&server, html_page(fixture_html(2)), 200, 200).await;
    let analyzer = test_analyzer(Duration::from_secs(10));

    let first = analyzer.analyze(&server.uri()).await.unwrap();
    let second = analyzer.analyze(&server.uri()).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[tokio::test]
async fn test_url_without_scheme_uses_http() {
    let server = MockServer::start().await;
    mount_site(&server, html_page(fixture_html(2)), 200, 200).await;
    let bare = server.uri().trim_start_matches("http://").to_string();

    let report = test_analyzer(Duration::from_secs(10))
        .analyze(&bare)
        .await
        .expect("Analysis should succeed");

    assert!(report.url.starts_with("http://"));
    assert!(!report.technical.https);
    assert!(report.technical.robots && report.technical.sitemap);
}

#[tokio::test]
async fn test_page_timeout_is_fatal() {
    let server = MockServer::start().await;
    let slow_page = html_page(fixture_html(2)).set_delay(Duration::from_secs(5));
    mount_site(&server, slow_page, 200, 200).await;

    let result = test_analyzer(Duration::from_secs(1))
        .analyze(&server.uri())
        .await;

    assert!(
        matches!(result, Err(AnalysisError::FetchFailed(_))),
        "Expected fetch failure, got {:?}",
        result
    );
}

#[tokio::test]
async fn test_unreachable_host_is_fatal() {
    // Reserve a free port, then release it so nothing listens there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let result = test_analyzer(Duration::from_secs(2)).analyze(&uri).await;

    assert!(matches!(result, Err(AnalysisError::FetchFailed(_))));
}

#[tokio::test]
async fn test_site_resource_failures_are_soft() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(fixture_html(2)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let report = test_analyzer(Duration::from_secs(1))
        .analyze(&server.uri())
        .await
        .expect("Robots and sitemap failures must not abort the analysis");

    assert!(!report.technical.robots);
    assert!(!report.technical.sitemap);
    assert_eq!(report.breakdown.technical, 0.0);
}

#[tokio::test]
async fn test_error_status_page_is_still_analyzed() {
    let server = MockServer::start().await;
    let not_found = ResponseTemplate::new(404)
        .set_body_raw("<html><title>Not Found</title></html>", "text/html");
    mount_site(&server, not_found, 404, 404).await;

    let report = test_analyzer(Duration::from_secs(10))
        .analyze(&server.uri())
        .await
        .expect("Non-success pages are analyzed");

    assert_eq!(report.status_code, 404);
    assert_eq!(report.onpage.title.as_deref(), Some("Not Found"));
}

#[tokio::test]
async fn test_configured_user_agent_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "TestBot/1.0"))
        .respond_with(html_page("<title>Agent</title>".to_string()))
        .expect(1)
        .mount(&server)
        .await;

    let config = AnalyzerConfig::default().with_user_agent("TestBot/1.0");
    let report = Analyzer::new(&config)
        .unwrap()
        .analyze(&server.uri())
        .await
        .expect("Request with configured user agent should match");

    assert_eq!(report.onpage.title.as_deref(), Some("Agent"));
}
