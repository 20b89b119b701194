//! Integration tests for the crawler
//!
//! These tests use wiremock to serve a fake ranked listing and drive the real
//! HTTP provider through a full crawl.

use douban_top250::config::{Config, HttpConfig, TargetConfig};
use douban_top250::crawler::{crawl, Crawler, HttpDocumentProvider, USER_AGENT};
use douban_top250::output::ConsoleReporter;
use douban_top250::{ItemRecord, Top250Error};
use wiremock::matchers::{header_regex, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENTRIES_PER_PAGE: usize = 25;

/// Builds a listing page in the site's layout
fn listing_page(page: u32, page_count: u32) -> String {
    let entries: String = (0..ENTRIES_PER_PAGE)
        .map(|i| {
            let rank = (page as usize - 1) * ENTRIES_PER_PAGE + i + 1;
            format!(
                r#"<li><div class="item">
                    <div class="pic"><em>{rank}</em></div>
                    <div class="info">
                        <div class="hd"><a href="/subject/{rank}/">
                            <span class="title">Movie {rank}</span>
                            <span class="title">&nbsp;/&nbsp;Original {rank}</span>
                            <span class="other">&nbsp;/&nbsp;Alias {rank}</span>
                        </a></div>
                        <div class="bd">
                            <p class="">
                                导演: Someone&nbsp;&nbsp;&nbsp;主演: Someone Else<br>
                                19{year:02}&nbsp;/&nbsp;美国&nbsp;/&nbsp;剧情
                            </p>
                            <div class="star">
                                <span class="rating5-t"></span>
                                <span class="rating_num" property="v:average">8.{digit}</span>
                                <span property="v:best" content="10.0"></span>
                                <span>{rank},000人评价</span>
                            </div>
                            <p class="quote"><span class="inq">Quote {rank}</span></p>
                        </div>
                    </div>
                </div></li>"#,
                rank = rank,
                year = rank % 100,
                digit = rank % 10,
            )
        })
        .collect();

    let links: String = if page == 1 {
        (2..=page_count)
            .map(|n| {
                format!(
                    r#"<a href="?start={}&amp;filter=">{}</a>"#,
                    (n as usize - 1) * ENTRIES_PER_PAGE,
                    n
                )
            })
            .collect()
    } else {
        String::new()
    };

    format!(
        r#"<html><body><div id="content"><h1>Top 250</h1>
           <div class="grid-16-8 clearfix"><div class="article">
               <ol class="grid_view">{}</ol>
               <div class="paginator"><span class="thispage">{}</span>{}</div>
           </div></div></div></body></html>"#,
        entries, page, links
    )
}

/// Mounts every page of a listing at `/top250`
async fn mount_listing(server: &MockServer, page_count: u32) {
    for page in 2..=page_count {
        let start = (page as usize - 1) * ENTRIES_PER_PAGE;
        Mock::given(method("GET"))
            .and(path("/top250"))
            .and(query_param("start", start.to_string().as_str()))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(listing_page(page, page_count))
                    .insert_header("content-type", "text/html; charset=utf-8"),
            )
            .mount(server)
            .await;
    }

    // First page last so the query-specific mocks take precedence
    Mock::given(method("GET"))
        .and(path("/top250"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(listing_page(1, page_count))
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(server)
        .await;
}

fn provider() -> HttpDocumentProvider {
    HttpDocumentProvider::new(&HttpConfig::default()).expect("Failed to build provider")
}

async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .expect("Request recording disabled")
        .len()
}

#[tokio::test]
async fn test_full_crawl_ten_pages() {
    let mock_server = MockServer::start().await;
    mount_listing(&mock_server, 10).await;

    let base_url = format!("{}/top250", mock_server.uri());
    let mut crawler = Crawler::new(base_url, provider());

    let records = crawler.run().await.expect("Crawl failed").to_vec();

    assert_eq!(crawler.pages().len(), 10);
    assert_eq!(records.len(), 250);
    for (index, record) in records.iter().enumerate() {
        assert_eq!(record.title, format!("Movie {}", index + 1));
    }

    // Page 1 is fetched once for discovery and once for its entries
    assert_eq!(request_count(&mock_server).await, 11);

    let again = crawler.run().await.expect("Second run failed").to_vec();
    assert_eq!(again, records);
    assert_eq!(request_count(&mock_server).await, 11);
}

#[tokio::test]
async fn test_record_fields_over_http() {
    let mock_server = MockServer::start().await;
    mount_listing(&mock_server, 2).await;

    let base_url = format!("{}/top250", mock_server.uri());
    let mut crawler = Crawler::new(base_url, provider());
    let records = crawler.run().await.expect("Crawl failed");

    assert_eq!(
        records[26],
        ItemRecord {
            title: "Movie 27".to_string(),
            subtitle: "Original 27".to_string(),
            other_titles: "Alias 27".to_string(),
            description: "导演: Someone\u{a0}\u{a0}\u{a0}主演: Someone Else".to_string(),
            year: "1927".to_string(),
            region: "美国".to_string(),
            genre_tags: "剧情".to_string(),
            rating_score: "8.7".to_string(),
            rating_count: "27000".to_string(),
            quote: "Quote 27".to_string(),
        }
    );
}

#[tokio::test]
async fn test_user_agent_sent_on_every_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/top250"))
        // Matches both halves should the comma in the value be treated as a separator
        .and(header_regex("user-agent", r"Mozilla/5\.0|Safari/537\.36"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_page(1, 1)))
        .expect(2)
        .mount(&mock_server)
        .await;

    let base_url = format!("{}/top250", mock_server.uri());
    let mut crawler = Crawler::new(base_url, provider());
    let records = crawler.run().await.expect("Crawl failed");

    assert_eq!(records.len(), ENTRIES_PER_PAGE);
    assert!(USER_AGENT.starts_with("Mozilla/5.0") && USER_AGENT.ends_with("Safari/537.36"));
}

#[tokio::test]
async fn test_report_writes_ranked_lines() {
    let mock_server = MockServer::start().await;
    mount_listing(&mock_server, 2).await;

    let base_url = format!("{}/top250", mock_server.uri());
    let mut crawler = Crawler::new(base_url, provider());
    let mut reporter = ConsoleReporter::new(Vec::new());

    let count = crawler.report(&mut reporter).await.expect("Report failed");
    assert_eq!(count, 50);

    let output = String::from_utf8(reporter.into_inner()).expect("Output is not UTF-8");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 50);
    assert!(lines[0].starts_with("No.1 {title:Movie 1 subtitle:Original 1 "));
    assert!(lines[49].starts_with("No.50 {title:Movie 50 "));
}

#[tokio::test]
async fn test_failed_page_fails_whole_run() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/top250"))
        .and(query_param("start", "50"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;
    mount_listing(&mock_server, 3).await;

    let base_url = format!("{}/top250", mock_server.uri());
    let mut crawler = Crawler::new(base_url, provider());
    let mut reported: Vec<(usize, ItemRecord)> = Vec::new();

    let err = crawler.report(&mut reported).await.unwrap_err();

    assert!(matches!(err, Top250Error::HttpStatus { status: 500, .. }));
    assert!(reported.is_empty());
    assert!(!crawler.is_populated());
}

#[tokio::test]
async fn test_transport_failure() {
    // Bind then drop a listener so nothing listens on its port
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
        listener.local_addr().expect("No local address").port()
    };

    let mut crawler = Crawler::new(format!("http://127.0.0.1:{}/top250", port), provider());
    let mut reported: Vec<(usize, ItemRecord)> = Vec::new();

    let err = crawler.report(&mut reported).await.unwrap_err();

    assert!(matches!(err, Top250Error::Http { .. }));
    assert!(reported.is_empty());
}

#[tokio::test]
async fn test_undecodable_body_is_markup_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/top250"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0x3c, 0xff, 0xfe, 0x3e]))
        .mount(&mock_server)
        .await;

    let base_url = format!("{}/top250", mock_server.uri());
    let mut crawler = Crawler::new(base_url, provider());

    let err = crawler.run().await.unwrap_err();
    assert!(matches!(err, Top250Error::Markup { .. }));
}

#[tokio::test]
async fn test_malformed_paginator_is_fatal() {
    let mock_server = MockServer::start().await;

    let page = listing_page(1, 1).replace(
        r#"<span class="thispage">1</span>"#,
        r#"<span class="thispage">1</span><a href="?start=25">next</a>"#,
    );
    Mock::given(method("GET"))
        .and(path("/top250"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page))
        .expect(1)
        .mount(&mock_server)
        .await;

    let base_url = format!("{}/top250", mock_server.uri());
    let mut crawler = Crawler::new(base_url, provider());

    let err = crawler.run().await.unwrap_err();
    assert!(matches!(err, Top250Error::InvalidPageNumber { .. }));
}

#[tokio::test]
async fn test_crawl_with_config() {
    let mock_server = MockServer::start().await;
    mount_listing(&mock_server, 3).await;

    let config = Config {
        target: TargetConfig {
            base_url: format!("{}/top250", mock_server.uri()),
        },
        http: HttpConfig {
            timeout_secs: Some(10),
            connect_timeout_secs: Some(5),
        },
    };

    let records = crawl(&config).await.expect("Crawl failed");
    assert_eq!(records.len(), 75);
    assert_eq!(records[74].title, "Movie 75");
}
