// src/specs/search.rs
//! Search results page → first detail-page link.

use reqwest::blocking::Client;
use scraper::Html;
use url::Url;

use crate::config::options::SiteOptions;
use crate::core::{html, net};
use crate::error::Result;
use crate::query::BookQuery;

/// Title anchor of each search hit.
pub const RESULT_LINK: &str = "a.bo3";

/// Absolute URL of the first hit, `None` when the page lists nothing.
pub fn find_detail_url(client: &Client, site: &SiteOptions, query: &BookQuery) -> Result<Option<String>> {
    let term = query.search_term();
    let body = net::http_get_text(
        client,
        &site.search_url,
        &[("SearchTarget", "Book"), ("SearchWord", &term), ("x", "0"), ("y", "0")],
    )?;
    parse_first_result(&body, &site.base_url)
}

pub fn parse_first_result(body: &str, base_url: &str) -> Result<Option<String>> {
    let doc = Html::parse_document(body);
    let Some(href) = html::select_first(&doc, RESULT_LINK)?.and_then(|a| a.value().attr("href")) else {
        return Ok(None);
    };
    let base = Url::parse(base_url)?;
    Ok(Some(base.join(href)?.to_string()))
}
