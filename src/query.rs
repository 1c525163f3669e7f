// src/query.rs
//! Raw "author, title" strings → validated, deduplicated, sorted queries.

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::config::options::QueryFormat;
use crate::core::sanitize::normalize_ws;

static BRACKETED: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(.+?),\s*《(.+?)》").ok());

/// One validated query. `author`/`title` are the halves exactly as split.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookQuery {
    pub raw: String,
    pub author: String,
    pub title: String,
}

impl BookQuery {
    /// Search box input: `"{title} {author}"`.
    pub fn search_term(&self) -> String {
        format!("{} {}", self.title.trim(), self.author.trim())
    }
}

/// Split a raw query into author and title. `None` when the shape doesn't match.
pub fn extract(raw: &str, format: QueryFormat) -> Option<BookQuery> {
    let raw = raw.trim();
    let (author, title) = match format {
        QueryFormat::Plain => raw.split_once(',')?,
        QueryFormat::Bracketed => {
            let caps = BRACKETED.as_ref()?.captures(raw)?;
            let (a, t) = (caps.get(1)?, caps.get(2)?);
            (a.as_str(), t.as_str())
        }
    };
    if author.trim().is_empty() || title.trim().is_empty() {
        return None;
    }
    Some(BookQuery { raw: raw.to_string(), author: author.to_string(), title: title.to_string() })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RejectedQuery {
    pub raw: String,
    pub reason: &'static str,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryPlan {
    /// Deduplicated, ascending by normalized raw string.
    pub queries: Vec<BookQuery>,
    pub rejected: Vec<RejectedQuery>,
    /// Accepted, but look like two entries fused together.
    pub suspicious: Vec<String>,
}

/// Normalize, validate, dedup and sort the input list.
pub fn plan(raw: &[String], format: QueryFormat) -> QueryPlan {
    let mut plan = QueryPlan::default();
    let mut accepted: BTreeMap<String, BookQuery> = BTreeMap::new();
    let mut seen: HashSet<String> = HashSet::new();

    for entry in raw {
        let norm = normalize_ws(entry);
        // Duplicates collapse whether or not the entry turns out valid.
        if !seen.insert(norm.clone()) {
            continue;
        }
        if norm.is_empty() {
            plan.rejected.push(RejectedQuery { raw: entry.clone(), reason: "empty entry" });
            continue;
        }
        let Some(query) = extract(&norm, format) else {
            let reason = match format {
                QueryFormat::Plain => "expected `author, title`",
                QueryFormat::Bracketed => "expected `author, 《title》`",
            };
            plan.rejected.push(RejectedQuery { raw: entry.clone(), reason });
            continue;
        };
        if format == QueryFormat::Plain && norm.matches(',').count() > 1 {
            log::warn!("Query has more than one separator (missing comma in list?): {norm}");
            plan.suspicious.push(norm.clone());
        }
        accepted.insert(norm, query);
    }

    plan.queries = accepted.into_values().collect();
    plan
}
