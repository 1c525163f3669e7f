// src/specs/detail.rs
//! Product detail page → title, author, ISBN, cover URL (+ description).
//!
//! Metadata comes from `<meta>` tags, which are far more stable than the
//! visible layout. The cover prefers the 500px variant of the image.

use reqwest::blocking::Client;
use scraper::Html;
use url::Url;

use super::description::Describe;
use crate::catalog::BookRecord;
use crate::core::{html, net};
use crate::error::{Result, ScrapeError};

const OG_TITLE: &str = r#"meta[property="og:title"]"#;
const AUTHOR: &str = r#"meta[name="author"]"#;
const ISBN: &str = r#"meta[property="books:isbn"]"#;
const OG_IMAGE: &str = r#"meta[property="og:image"]"#;
const COVER_IMG: &str = "img.i_cover";

/// Site suffix on `og:title`, e.g. "기도 - 알라딘".
const TITLE_SUFFIX_SEP: &str = " - ";
const COVER_LARGE: &str = "cover500";
const COVER_SMALL: &str = "cover150";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailPage {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub cover_url: Option<String>,
}

/// Fetch and parse a detail page, then fill the description with `describer`.
pub fn fetch_book(client: &Client, detail_url: &str, describer: &dyn Describe) -> Result<BookRecord> {
    let body = net::http_get_text(client, detail_url, &[])?;
    let doc = Html::parse_document(&body);
    let page = parse_detail(&doc, detail_url)?;
    let description = describer.describe(&page.isbn, &doc);

    Ok(BookRecord {
        title: page.title,
        author: page.author,
        isbn: page.isbn,
        cover_url: page.cover_url,
        description,
        detail_url: detail_url.to_string(),
        ..Default::default()
    })
}

pub fn parse_detail(doc: &Html, page_url: &str) -> Result<DetailPage> {
    let og_title = html::meta_content(doc, OG_TITLE)?.ok_or(ScrapeError::MissingMeta("og:title"))?;
    let title = og_title
        .split(TITLE_SUFFIX_SEP)
        .next()
        .unwrap_or_default()
        .to_string();
    let author = html::meta_content(doc, AUTHOR)?.ok_or(ScrapeError::MissingMeta("author"))?;
    let isbn = html::meta_content(doc, ISBN)?.ok_or(ScrapeError::MissingMeta("books:isbn"))?;

    Ok(DetailPage { title, author, isbn, cover_url: cover_url(doc, page_url)? })
}

fn cover_url(doc: &Html, page_url: &str) -> Result<Option<String>> {
    if let Some(og) = html::meta_content(doc, OG_IMAGE)? {
        if og.contains(COVER_LARGE) {
            return Ok(Some(og));
        }
    }
    let src = html::select_first(doc, COVER_IMG)?.and_then(|img| img.value().attr("src"));
    Ok(src.map(|src| {
        let large = src.replace(COVER_SMALL, COVER_LARGE);
        // Protocol-relative or relative `src` → absolute; leave as-is if the page URL won't parse.
        Url::parse(page_url)
            .and_then(|base| base.join(&large))
            .map(|u| u.to_string())
            .unwrap_or(large)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://www.aladin.co.kr/shop/wproduct.aspx?ItemId=2874";

    fn page(head: &str, body: &str) -> Html {
        Html::parse_document(&format!("<html><head>{head}</head><body>{body}</body></html>"))
    }

    const META: &str = r#"
        <meta property="og:title" content="스크루테이프의 편지 - 알라딘">
        <meta name="author" content="C.S. 루이스 (지은이), 김선형 (옮긴이)">
        <meta property="books:isbn" content="9788932919126">"#;

    #[test]
    fn reads_meta_and_strips_title_suffix() {
        let doc = page(META, "");
        let p = parse_detail(&doc, URL).unwrap();
        assert_eq!(p.title, "스크루테이프의 편지");
        assert_eq!(p.author, "C.S. 루이스 (지은이), 김선형 (옮긴이)");
        assert_eq!(p.isbn, "9788932919126");
        assert_eq!(p.cover_url, None);
    }

    #[test]
    fn og_image_used_when_already_large() {
        let head = format!(
            r#"{META}<meta property="og:image" content="https://image.aladin.co.kr/product/28/74/cover500/8932919127_1.jpg">"#
        );
        let doc = page(&head, r#"<img class="i_cover" src="https://image.aladin.co.kr/x/cover150/other.jpg">"#);
        assert_eq!(
            parse_detail(&doc, URL).unwrap().cover_url.as_deref(),
            Some("https://image.aladin.co.kr/product/28/74/cover500/8932919127_1.jpg")
        );
    }

    #[test]
    fn inline_cover_upgraded_to_large() {
        let head = format!(
            r#"{META}<meta property="og:image" content="https://image.aladin.co.kr/product/28/74/coversum/8932919127_1.jpg">"#
        );
        let doc = page(&head, r#"<img class="i_cover" src="//image.aladin.co.kr/product/28/74/cover150/8932919127_1.jpg">"#);
        assert_eq!(
            parse_detail(&doc, URL).unwrap().cover_url.as_deref(),
            Some("https://image.aladin.co.kr/product/28/74/cover500/8932919127_1.jpg")
        );
    }

    #[test]
    fn missing_isbn_is_an_error() {
        let doc = page(
            r#"<meta property="og:title" content="기도 - 알라딘"><meta name="author" content="팀 켈러">"#,
            "",
        );
        assert!(matches!(parse_detail(&doc, URL), Err(ScrapeError::MissingMeta("books:isbn"))));
    }
}
