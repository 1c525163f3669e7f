// src/scrape.rs
use std::{
    path::{Path, PathBuf},
    thread,
    time::Duration,
};

use reqwest::blocking::Client;

use crate::{
    catalog::{BookRecord, Catalog},
    config::{consts::LOG_MSG_MAX, options::{ScrapeOptions, SiteOptions}},
    core::{net, sanitize::truncate_chars},
    download,
    error::Result,
    file::{cover_file_name, ensure_directory},
    progress::Progress,
    query::{self, BookQuery, QueryPlan},
    specs::{self, description::Describe},
};

/// Everything the pipeline needs from the outside world, per book.
/// The live implementation is [`Aladin`]; tests plug in fakes.
pub trait BookSource {
    fn find_detail_url(&self, query: &BookQuery) -> Result<Option<String>>;
    fn fetch_book(&self, detail_url: &str) -> Result<BookRecord>;
    fn download_cover(&self, url: &str, dest: &Path) -> bool;
}

pub struct Aladin {
    client: Client,
    site: SiteOptions,
    describer: Box<dyn Describe>,
}

impl Aladin {
    pub fn new(opts: &ScrapeOptions) -> Result<Self> {
        let client = net::build_client(&opts.user_agent, opts.timeout)?;
        Self::with_client(opts, client)
    }

    pub fn with_client(opts: &ScrapeOptions, client: Client) -> Result<Self> {
        let describer = specs::description::describer(opts, &client)?;
        Ok(Self { client, site: opts.site.clone(), describer })
    }
}

impl BookSource for Aladin {
    fn find_detail_url(&self, query: &BookQuery) -> Result<Option<String>> {
        specs::search::find_detail_url(&self.client, &self.site, query)
    }
    fn fetch_book(&self, detail_url: &str) -> Result<BookRecord> {
        specs::detail::fetch_book(&self.client, detail_url, &*self.describer)
    }
    fn download_cover(&self, url: &str, dest: &Path) -> bool {
        download::download_image(&self.client, url, dest)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    SkippedBadFormat,
    SkippedNoSearchResult,
    SkippedExtractionFailed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemReport {
    /// 1-based position in the planned list; `None` for entries rejected before planning.
    pub index: Option<usize>,
    pub query: String,
    pub outcome: Outcome,
}

/// Summary of what was produced.
pub struct RunSummary {
    pub catalog: Catalog,
    pub catalog_path: PathBuf,
    pub items: Vec<ItemReport>,
}

/// Top-level: validate options, hit the live site, write the catalog.
pub fn run(opts: &ScrapeOptions, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    opts.validate()?;
    let source = Aladin::new(opts)?;
    run_with(opts, &source, progress)
}

/// Same as [`run`] against any [`BookSource`].
pub fn run_with(
    opts: &ScrapeOptions,
    source: &dyn BookSource,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    ensure_directory(&opts.out_dir)?;

    let plan = query::plan(&opts.books, opts.query_format);
    let (catalog, items) = collect(&plan, source, &opts.out_dir, opts.delay, progress);

    let catalog_path = opts.catalog_path();
    catalog.save(&catalog_path)?;
    log::info!("Catalog written to {}", catalog_path.display());

    Ok(RunSummary { catalog, catalog_path, items })
}

/// Walk the plan in order, one book at a time, pausing `delay` between items.
/// Per-item failures are reported and skipped; nothing here is fatal.
pub fn collect(
    plan: &QueryPlan,
    source: &dyn BookSource,
    out_dir: &Path,
    delay: Duration,
    mut progress: Option<&mut dyn Progress>,
) -> (Catalog, Vec<ItemReport>) {
    let total = plan.queries.len();
    let mut catalog = Catalog::new(total);
    let mut items = Vec::with_capacity(total + plan.rejected.len());

    for rejected in &plan.rejected {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Bad format, skipped: {:?} ({})", rejected.raw, rejected.reason));
        }
        items.push(ItemReport {
            index: None,
            query: rejected.raw.clone(),
            outcome: Outcome::SkippedBadFormat,
        });
    }

    if let Some(p) = progress.as_deref_mut() {
        p.begin(total);
    }

    for (i, query) in plan.queries.iter().enumerate() {
        let index = i + 1;
        if i > 0 && !delay.is_zero() {
            thread::sleep(delay); // be polite
        }
        log::debug!("[{index}/{total}] {}", query.raw);

        let outcome = match collect_one(index, query, source, out_dir) {
            Ok(book) => {
                log::debug!("Description length: {} chars", book.description.chars().count());
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(index, &book.title);
                }
                catalog.books.push(book);
                Outcome::Completed
            }
            Err((outcome, reason)) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(index, &query.raw, &reason);
                }
                outcome
            }
        };
        items.push(ItemReport { index: Some(index), query: query.raw.clone(), outcome });
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    (catalog, items)
}

fn collect_one(
    index: usize,
    query: &BookQuery,
    source: &dyn BookSource,
    out_dir: &Path,
) -> std::result::Result<BookRecord, (Outcome, String)> {
    let short = |e: crate::error::ScrapeError| truncate_chars(&e.to_string(), LOG_MSG_MAX).to_string();

    let detail_url = match source.find_detail_url(query) {
        Ok(Some(url)) => url,
        Ok(None) => return Err((Outcome::SkippedNoSearchResult, "no search result".into())),
        Err(e) => return Err((Outcome::SkippedNoSearchResult, short(e))),
    };

    let mut book = source
        .fetch_book(&detail_url)
        .map_err(|e| (Outcome::SkippedExtractionFailed, short(e)))?;

    match book.cover_url.as_deref() {
        Some(cover) => {
            let name = cover_file_name(index, &book.title, &book.author);
            if source.download_cover(cover, &out_dir.join(&name)) {
                log::debug!("Saved cover {name}");
                book.image_file = Some(name);
            } else {
                log::warn!("Cover download failed for {}", book.title);
            }
        }
        None => log::warn!("No cover URL for {}", book.title),
    }

    Ok(book)
}
