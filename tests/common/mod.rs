// tests/common/mod.rs
//
// Shared helpers for tests that talk to an `httpmock` server standing in for
// the bookstore.
//
#![allow(dead_code)]

use std::time::Duration;

use bookshelf::config::options::SiteOptions;
use httpmock::MockServer;
use reqwest::blocking::Client;

/// Client that never goes through a system proxy.
pub fn client() -> Client {
    Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

/// Every site endpoint pointed at the mock server.
pub fn site(server: &MockServer) -> SiteOptions {
    SiteOptions {
        base_url: server.url("/"),
        search_url: server.url("/search"),
        lookup_api_url: server.url("/api"),
    }
}

/// Minimal JPEG header followed by filler; enough for format sniffing.
pub fn jpeg_bytes() -> Vec<u8> {
    let mut v = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00];
    v.extend(std::iter::repeat_n(0xAB, 3000));
    v
}

pub fn search_page(href: &str) -> String {
    format!(r#"<html><body><div class="ss_book_box"><a href="{href}" class="bo3"><b>책</b></a></div></body></html>"#)
}

pub fn detail_page(title: &str, author: &str, isbn: &str, og_image: &str, extra_body: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html><head>
<meta property="og:title" content="{title} - 알라딘">
<meta name="author" content="{author}">
<meta property="books:isbn" content="{isbn}">
<meta property="og:image" content="{og_image}">
</head><body>{extra_body}</body></html>"#
    )
}
