// src/core/html.rs

// Thin helpers over `scraper` so page specs read as selector lookups.

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ScrapeError};

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Config(format!("bad selector {css:?}: {e}")))
}

pub fn select_first<'a>(doc: &'a Html, css: &str) -> Result<Option<ElementRef<'a>>> {
    let sel = selector(css)?;
    Ok(doc.select(&sel).next())
}

/// `content` attribute of the first element matching `css`, if present.
pub fn meta_content(doc: &Html, css: &str) -> Result<Option<String>> {
    Ok(select_first(doc, css)?
        .and_then(|el| el.value().attr("content"))
        .map(|s| s.to_string()))
}

pub fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}
