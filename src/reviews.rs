// src/reviews.rs
//! Attach reader reviews from a CSV sheet to an existing catalog.
//!
//! Sheet layout (no header row, ragged rows allowed):
//! `key, reviewer1, text1, reviewer2, text2, …` where `key` is
//! `"{first author}, {title}"`.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::catalog::{BookRecord, Catalog, ReviewRecord};
use crate::config::options::MergeOptions;
use crate::error::Result;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergeSummary {
    pub rows: usize,
    /// Rows with fewer than three cells.
    pub short_rows: usize,
    /// Distinct books whose `reviews` were set.
    pub updated: usize,
    pub unmatched: Vec<String>,
}

/// Load, merge, write. The input catalog is never modified in place.
pub fn run(opts: &MergeOptions) -> Result<MergeSummary> {
    let mut catalog = Catalog::load(&opts.catalog)?;
    let rows = read_rows(&opts.reviews)?;
    let summary = merge(&mut catalog, rows);
    catalog.save(&opts.out)?;
    log::info!(
        "Reviews added to {}/{} books; written to {}",
        summary.updated,
        catalog.books.len(),
        opts.out.display()
    );
    Ok(summary)
}

/// `"{author up to the first comma}, {title}"`, both trimmed.
pub fn lookup_key(book: &BookRecord) -> String {
    let first_author = book.author.split(',').next().unwrap_or_default().trim();
    format!("{first_author}, {}", book.title.trim())
}

pub fn read_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    let mut rows = Vec::new();
    for record in rdr.records() {
        rows.push(record?.iter().map(String::from).collect());
    }
    Ok(rows)
}

/// Reviewer/text pairs; a pair counts only if both halves are non-blank.
/// A dangling reviewer without text is dropped.
pub fn parse_pairs(cells: &[String]) -> Vec<ReviewRecord> {
    cells
        .chunks_exact(2)
        .filter_map(|pair| {
            let (author, text) = (pair[0].trim(), pair[1].trim());
            (!author.is_empty() && !text.is_empty())
                .then(|| ReviewRecord { author: author.into(), text: text.into() })
        })
        .collect()
}

pub fn merge<I>(catalog: &mut Catalog, rows: I) -> MergeSummary
where
    I: IntoIterator<Item = Vec<String>>,
{
    // Later books win on a key collision.
    let index: HashMap<String, usize> = catalog
        .books
        .iter()
        .enumerate()
        .map(|(i, b)| (lookup_key(b), i))
        .collect();

    let mut summary = MergeSummary::default();
    let mut touched = HashSet::new();

    for row in rows {
        summary.rows += 1;
        if row.len() < 3 {
            summary.short_rows += 1;
            continue;
        }
        let key = row[0].trim();
        let Some(&i) = index.get(key) else {
            log::info!("{key} not found in book data. Skipping review addition.");
            summary.unmatched.push(key.to_string());
            continue;
        };
        let reviews = parse_pairs(&row[1..]);
        if !reviews.is_empty() {
            catalog.books[i].reviews = Some(reviews);
            touched.insert(i);
        }
    }

    summary.updated = touched.len();
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    fn book(author: &str, title: &str) -> BookRecord {
        BookRecord { author: author.into(), title: title.into(), ..Default::default() }
    }

    #[test]
    fn key_uses_first_author_segment() {
        let b = book("C.S. 루이스 (지은이), 김선형 (옮긴이)", " 스크루테이프의 편지 ");
        assert_eq!(lookup_key(&b), "C.S. 루이스 (지은이), 스크루테이프의 편지");
        assert_eq!(lookup_key(&book("Lewis", "The Screwtape Letters")), "Lewis, The Screwtape Letters");
    }

    #[test]
    fn empty_text_pair_dropped() {
        let reviews = parse_pairs(&row(&["Alice", "Great book", "Bob", ""]));
        assert_eq!(reviews, vec![ReviewRecord { author: "Alice".into(), text: "Great book".into() }]);
    }

    #[test]
    fn dangling_reviewer_dropped() {
        assert!(parse_pairs(&row(&["Alice"])).is_empty());
        assert_eq!(parse_pairs(&row(&[" Carol ", " ok ", "Dan"])).len(), 1);
    }

    #[test]
    fn merge_example_row() {
        let mut cat = Catalog::default();
        cat.books.push(book("Lewis", "The Screwtape Letters"));
        let summary = merge(
            &mut cat,
            vec![row(&["Lewis, The Screwtape Letters", "Alice", "Great book", "Bob", ""])],
        );
        assert_eq!(summary.updated, 1);
        let reviews = cat.books[0].reviews.as_ref().unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].author, "Alice");
        assert_eq!(reviews[0].text, "Great book");
    }

    #[test]
    fn short_unmatched_and_empty_rows() {
        let mut cat = Catalog::default();
        cat.books.push(book("팀 켈러", "기도"));
        let summary = merge(
            &mut cat,
            vec![
                row(&["팀 켈러, 기도", "only reviewer"]),
                row(&["없는 책, 제목", "A", "B"]),
                row(&["팀 켈러, 기도", "A", " ", "", "text"]),
            ],
        );
        assert_eq!(summary.rows, 3);
        assert_eq!(summary.short_rows, 1);
        assert_eq!(summary.unmatched, vec!["없는 책, 제목".to_string()]);
        assert_eq!(summary.updated, 0);
        assert!(cat.books[0].reviews.is_none());
    }

    #[test]
    fn later_row_overwrites_reviews() {
        let mut cat = Catalog::default();
        cat.books.push(book("A", "X"));
        cat.books[0].reviews = Some(vec![ReviewRecord { author: "old".into(), text: "old".into() }]);
        merge(&mut cat, vec![row(&["A, X", "r1", "t1"]), row(&["A, X", "r2", "t2"])]);
        let reviews = cat.books[0].reviews.as_ref().unwrap();
        assert_eq!(reviews, &vec![ReviewRecord { author: "r2".into(), text: "t2".into() }]);
    }

    #[test]
    fn duplicate_keys_resolve_to_last_book() {
        let mut cat = Catalog::default();
        cat.books.push(book("A", "X"));
        cat.books.push(book("A, B", "X"));
        merge(&mut cat, vec![row(&["A, X", "r", "t"])]);
        assert!(cat.books[0].reviews.is_none());
        assert!(cat.books[1].reviews.is_some());
    }
}
