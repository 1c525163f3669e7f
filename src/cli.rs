// src/cli.rs
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};

use crate::config::consts::{API_KEY_ENV, DEFAULT_CONFIG_FILE, MERGED_FILE};
use crate::config::file;
use crate::config::options::{delay_from_secs, DescriptionMode, MergeOptions, QueryFormat, ScrapeOptions};
use crate::progress::LogProgress;
use crate::scrape::Outcome;

#[derive(Debug, Parser)]
#[command(name = "bookshelf", version, about = "Collect book metadata and covers from Aladin")]
pub struct Cli {
    /// Debug-level logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search, scrape and download every book in the list; write books_data.json
    Collect(CollectArgs),
    /// Attach reviews from a CSV sheet to an existing catalog
    MergeReviews(MergeArgs),
}

#[derive(Debug, Args)]
pub struct CollectArgs {
    /// TOML config (defaults to ./bookshelf.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Book list, one "author, title" per line (replaces `books` from the config)
    #[arg(long)]
    pub books: Option<PathBuf>,

    /// Output directory for covers and the catalog
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Pause between books, in seconds
    #[arg(long)]
    pub delay: Option<f64>,

    /// Description source
    #[arg(long, value_enum)]
    pub description: Option<DescriptionMode>,

    /// Query string format
    #[arg(long, value_enum)]
    pub format: Option<QueryFormat>,

    /// Item lookup API key
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,
}

#[derive(Debug, Args)]
pub struct MergeArgs {
    /// Catalog produced by `collect`
    #[arg(long)]
    pub catalog: PathBuf,

    /// Reviews sheet (CSV, no header row)
    #[arg(long)]
    pub reviews: PathBuf,

    /// Merged catalog path
    #[arg(short, long, default_value = MERGED_FILE)]
    pub out: PathBuf,
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Collect(args) => collect(args),
        Command::MergeReviews(args) => merge_reviews(args),
    }
}

fn collect(args: CollectArgs) -> Result<()> {
    let opts = scrape_options(&args)?;
    let mut progress = LogProgress::default();
    let summary = crate::scrape::run(&opts, Some(&mut progress))?;

    let rejected = summary
        .items
        .iter()
        .filter(|i| i.outcome == Outcome::SkippedBadFormat)
        .count();
    if rejected > 0 {
        log::warn!("{rejected} malformed entries were skipped; fix them in the book list");
    }
    println!("{}", summary.catalog_path.display());
    Ok(())
}

fn merge_reviews(args: MergeArgs) -> Result<()> {
    let opts = MergeOptions { catalog: args.catalog, reviews: args.reviews, out: args.out };
    let summary = crate::reviews::run(&opts)
        .wrap_err_with(|| format!("merging {} into {}", opts.reviews.display(), opts.catalog.display()))?;
    if !summary.unmatched.is_empty() {
        log::warn!("{} review rows matched no book", summary.unmatched.len());
    }
    println!("{}", opts.out.display());
    Ok(())
}

/// Defaults ← config file ← book list file ← flags.
pub fn scrape_options(args: &CollectArgs) -> Result<ScrapeOptions> {
    let mut opts = ScrapeOptions::default();

    let config_path = match &args.config {
        Some(p) => Some(p.clone()),
        None => Some(PathBuf::from(DEFAULT_CONFIG_FILE)).filter(|p| p.is_file()),
    };
    if let Some(path) = config_path {
        let cfg = file::load(&path).wrap_err_with(|| format!("reading config {}", path.display()))?;
        log::debug!("Loaded config {}", path.display());
        opts
            .apply_file(cfg)
            .wrap_err_with(|| format!("applying config {}", path.display()))?;
    }

    if let Some(path) = &args.books {
        opts.books = read_books(path)?;
    }
    if let Some(out) = &args.out { opts.out_dir = out.clone(); }
    if let Some(secs) = args.delay { opts.delay = delay_from_secs(secs)?; }
    if let Some(mode) = args.description { opts.description = mode; }
    if let Some(format) = args.format { opts.query_format = format; }
    if let Some(key) = &args.api_key { opts.api_key = Some(key.clone()); }

    Ok(opts)
}

fn read_books(path: &Path) -> Result<Vec<String>> {
    file::read_book_list(path).wrap_err_with(|| format!("reading book list {}", path.display()))
}
