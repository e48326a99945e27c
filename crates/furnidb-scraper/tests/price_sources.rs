//! Integration tests for the multi-source price fetcher.
//!
//! Uses `wiremock` to stand up a local HTTP server per test so no real
//! network traffic is made. Covers the happy path, selector fallback,
//! absent-quote conditions, and failure isolation across sources.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use furnidb_scraper::{
    fetch_quotes, lowest_quote, DelayBounds, PriceClient, ScrapeError, SourceConfig,
};

fn test_client() -> PriceClient {
    PriceClient::new(5, "furnidb-test/0.1").expect("failed to build test PriceClient")
}

fn make_source(id: &str, base_url: &str, selectors: &[&str]) -> SourceConfig {
    SourceConfig {
        id: id.to_string(),
        name: id.to_uppercase(),
        url_template: format!("{base_url}/search?q={{query}}"),
        selectors: selectors.iter().map(|s| (*s).to_string()).collect(),
        timeout_secs: None,
    }
}

fn listing_html(class: &str, price_text: &str) -> String {
    format!(r#"<html><body><span class="{class}">{price_text}</span></body></html>"#)
}

#[tokio::test]
async fn fetch_quote_parses_price_from_first_selector() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(listing_html("sale-price", "45,000원")),
        )
        .mount(&server)
        .await;

    let source = make_source("naver", &server.uri(), &[".sale-price"]);
    let quote = test_client().fetch_quote(&source, "소파").await;

    assert_eq!(quote.unwrap(), Some(45000));
}

#[tokio::test]
async fn fetch_quote_sends_percent_encoded_query() {
    let server = MockServer::start().await;

    // wiremock matches against the decoded query value; the raw request line
    // carries the percent-encoded form.
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "원목 소파"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(listing_html("sale-price", "45,000원")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let source = make_source("naver", &server.uri(), &[".sale-price"]);
    let quote = test_client().fetch_quote(&source, "원목 소파").await;

    assert_eq!(quote.unwrap(), Some(45000));
}

#[tokio::test]
async fn fetch_quote_falls_back_along_selector_chain() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(listing_html("old-price", "52,000원")),
        )
        .mount(&server)
        .await;

    let source = make_source("naver", &server.uri(), &[".sale-price", ".old-price"]);
    let quote = test_client().fetch_quote(&source, "소파").await;

    assert_eq!(quote.unwrap(), Some(52000));
}

#[tokio::test]
async fn fetch_quote_absent_when_no_selector_matches() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body></body></html>"))
        .mount(&server)
        .await;

    let source = make_source("naver", &server.uri(), &[".sale-price", ".old-price"]);
    let quote = test_client().fetch_quote(&source, "소파").await;

    assert_eq!(quote.unwrap(), None);
}

#[tokio::test]
async fn fetch_quote_absent_when_text_has_no_price_digits() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(listing_html("sale-price", "품절")),
        )
        .mount(&server)
        .await;

    let source = make_source("naver", &server.uri(), &[".sale-price"]);
    let quote = test_client().fetch_quote(&source, "소파").await;

    assert_eq!(quote.unwrap(), None);
}

#[tokio::test]
async fn fetch_quote_errors_on_non_success_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let source = make_source("naver", &server.uri(), &[".sale-price"]);
    let err = test_client()
        .fetch_quote(&source, "소파")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ScrapeError::UnexpectedStatus { status: 503, .. }
    ));
}

#[tokio::test]
async fn failing_source_does_not_block_remaining_sources() {
    let broken = MockServer::start().await;
    let healthy = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&broken)
        .await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(listing_html("sale-price", "39,000원")),
        )
        .mount(&healthy)
        .await;

    let sources = vec![
        make_source("naver", &broken.uri(), &[".sale-price"]),
        make_source("gmarket", &healthy.uri(), &[".sale-price"]),
    ];

    let quotes = fetch_quotes(&test_client(), &sources, "소파", DelayBounds::none()).await;

    assert_eq!(quotes.len(), 2);
    assert_eq!(quotes[0].source_id, "naver");
    assert_eq!(quotes[0].amount, None);
    assert_eq!(quotes[1].source_id, "gmarket");
    assert_eq!(quotes[1].amount, Some(39000));
}

#[tokio::test]
async fn unreachable_source_contributes_absent_quote() {
    let healthy = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(listing_html("sale-price", "45,000원")),
        )
        .mount(&healthy)
        .await;

    // Port 1 is never listening locally; the connection is refused rather
    // than timing out.
    let sources = vec![
        make_source("coupang", "http://127.0.0.1:1", &[".sale-price"]),
        make_source("naver", &healthy.uri(), &[".sale-price"]),
    ];

    let quotes = fetch_quotes(&test_client(), &sources, "소파", DelayBounds::none()).await;

    assert_eq!(quotes[0].amount, None);
    assert_eq!(quotes[1].amount, Some(45000));
    assert_eq!(lowest_quote(&quotes), Some(45000));
}

#[tokio::test]
async fn aggregation_picks_minimum_across_mixed_quotes() {
    let absent = MockServer::start().await;
    let mid = MockServer::start().await;
    let low = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body></body></html>"))
        .mount(&absent)
        .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(listing_html("sale-price", "45,000원")),
        )
        .mount(&mid)
        .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(listing_html("sale-price", "39,000원")),
        )
        .mount(&low)
        .await;

    let sources = vec![
        make_source("naver", &absent.uri(), &[".sale-price"]),
        make_source("coupang", &mid.uri(), &[".sale-price"]),
        make_source("gmarket", &low.uri(), &[".sale-price"]),
    ];

    let quotes = fetch_quotes(&test_client(), &sources, "소파", DelayBounds::none()).await;

    assert_eq!(lowest_quote(&quotes), Some(39000));
}
