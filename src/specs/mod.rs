// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific knowledge of the bookstore site: *where the ground truth lives
//! in the HTML* and *how to extract it*.
//!
//! ## What lives here
//! - **Selectors and markup markers** (`a.bo3`, `meta[property="books:isbn"]`,
//!   `div.Ere_prod_mconts_R`, …).
//! - **Precedence rules** (e.g. prefer the 500px `og:image` over the inline cover).
//! - **Request shapes** for the search page and the item lookup API.
//!
//! ## What does **not** live here
//! - Pacing, dedup, file naming, persistence – that's `scrape`.
//! - Logging per item – specs return `Result`; the pipeline decides what to skip.
//!
//! ## Typical call chain
//! ```text
//! scrape::collect → search::find_detail_url → detail::fetch_book
//!                                              ↘ description::Describe
//! ```
//!
//! When the site changes its markup, only this module should need edits.
pub mod description;
pub mod detail;
pub mod search;
