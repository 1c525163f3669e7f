// src/specs/description.rs
//! Long-form book description ("책소개").
//!
//! One capability, two sources:
//! - `LookupApi`: the item lookup API, keyed by ISBN-13.
//! - `IntroBlock`: the intro block of the already-fetched detail page.
//!
//! Neither ever fails: problems degrade to `""` (API) or a placeholder (page).

use reqwest::blocking::Client;
use scraper::{ElementRef, Html, Selector};
use serde_json::Value;

use crate::config::consts::LOG_MSG_MAX;
use crate::config::options::{DescriptionMode, ScrapeOptions};
use crate::core::{html, net, sanitize::truncate_chars};
use crate::error::{Result, ScrapeError};

pub const SECTION_NOT_FOUND: &str = "section not found";
pub const CONTENT_NOT_FOUND: &str = "content not found";
pub const CONTENT_EMPTY: &str = "content empty";
pub const EXTRACTION_ERROR: &str = "extraction error";

const INTRO_LABEL: &str = "책소개";
const HEADING: &str = "div.Ere_prod_mconts_LS";
const CONTENT_CLASS: &str = "Ere_prod_mconts_R";
const BOILERPLATE: &str = ".Ere_subtitle, .Ere_prod_Title, script, style, .Ere_addinfo";
const TEXT_BLOCKS: &str = "p, div";

pub trait Describe {
    fn describe(&self, isbn: &str, page: &Html) -> String;
}

pub fn describer(opts: &ScrapeOptions, client: &Client) -> Result<Box<dyn Describe>> {
    let describer: Box<dyn Describe> = match opts.description {
        DescriptionMode::Page => Box::new(IntroBlock),
        DescriptionMode::Api => {
            let key = opts
                .api_key
                .clone()
                .ok_or_else(|| ScrapeError::Config("missing API key".into()))?;
            Box::new(LookupApi {
                client: client.clone(),
                endpoint: opts.site.lookup_api_url.clone(),
                key,
            })
        }
    };
    Ok(describer)
}

/* ---------------- API ---------------- */

pub struct LookupApi {
    pub client: Client,
    pub endpoint: String,
    pub key: String,
}

impl Describe for LookupApi {
    fn describe(&self, isbn: &str, _page: &Html) -> String {
        match lookup_description(&self.client, &self.endpoint, &self.key, isbn) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("Lookup API error: {}", truncate_chars(&e.to_string(), LOG_MSG_MAX));
                String::new()
            }
        }
    }
}

pub fn lookup_description(client: &Client, endpoint: &str, key: &str, isbn: &str) -> Result<String> {
    let data = net::http_get_json(
        client,
        endpoint,
        &[
            ("TTBKey", key),
            ("ItemId", isbn),
            ("ItemIdType", "ISBN13"),
            ("Output", "JS"),
            ("Version", "20131101"),
            ("OptResult", "description"),
        ],
    )?;
    Ok(first_item_description(&data))
}

fn first_item_description(data: &Value) -> String {
    data.get("item")
        .and_then(|items| items.get(0))
        .and_then(|item| item.get("description"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/* ---------------- Page ---------------- */

pub struct IntroBlock;

impl Describe for IntroBlock {
    fn describe(&self, _isbn: &str, page: &Html) -> String {
        extract_intro(page)
    }
}

pub fn extract_intro(doc: &Html) -> String {
    try_extract_intro(doc).unwrap_or_else(|e| {
        log::warn!("Intro extraction error: {}", truncate_chars(&e.to_string(), LOG_MSG_MAX));
        EXTRACTION_ERROR.into()
    })
}

fn try_extract_intro(doc: &Html) -> Result<String> {
    let heading_sel = html::selector(HEADING)?;
    let strip_sel = html::selector(BOILERPLATE)?;
    let blocks_sel = html::selector(TEXT_BLOCKS)?;

    // Several headings share the class; the label picks the right one.
    let heading = doc
        .select(&heading_sel)
        .find(|el| el.text().map(str::trim).collect::<String>() == INTRO_LABEL);
    let Some(heading) = heading else {
        return Ok(SECTION_NOT_FOUND.into());
    };

    let content = heading
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "div" && html::has_class(*el, CONTENT_CLASS));
    let Some(content) = content else {
        return Ok(CONTENT_NOT_FOUND.into());
    };

    let parts: Vec<String> = content
        .select(&blocks_sel)
        .filter(|el| !is_boilerplate(*el, content, &strip_sel))
        .map(|el| visible_text(el, content, &strip_sel).trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    if parts.is_empty() {
        Ok(CONTENT_EMPTY.into())
    } else {
        Ok(parts.join("\n\n"))
    }
}

/// `el` or one of its ancestors below `root` is boilerplate.
fn is_boilerplate(el: ElementRef<'_>, root: ElementRef<'_>, strip: &Selector) -> bool {
    std::iter::successors(Some(el), |e| e.parent().and_then(ElementRef::wrap))
        .take_while(|e| e.id() != root.id())
        .any(|e| strip.matches(&e))
}

fn visible_text(el: ElementRef<'_>, root: ElementRef<'_>, strip: &Selector) -> String {
    let mut out = String::new();
    for node in el.descendants() {
        let Some(text) = node.value().as_text() else { continue };
        let parent = node.parent().and_then(ElementRef::wrap);
        if parent.is_some_and(|p| !is_boilerplate(p, root, strip)) {
            out.push_str(text);
        }
    }
    out
}
