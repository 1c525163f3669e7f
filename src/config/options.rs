// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use super::consts::*;
use super::file::ConfigFile;
use crate::error::{Result, ScrapeError};

/// Where a book's long-form description comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum DescriptionMode {
    /// Item lookup API keyed by ISBN (needs an API key).
    #[default]
    Api,
    /// "책소개" block scraped from the detail page.
    Page,
}

/// Shape of one raw query string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum QueryFormat {
    /// `author, title`
    #[default]
    Plain,
    /// `author, 《title》`
    Bracketed,
}

/// Remote endpoints. Overridable so tests can point at a local fixture server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteOptions {
    pub base_url: String,
    pub search_url: String,
    pub lookup_api_url: String,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.into(),
            search_url: SEARCH_URL.into(),
            lookup_api_url: LOOKUP_API_URL.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub site: SiteOptions,
    pub out_dir: PathBuf,
    pub delay: Duration,
    pub timeout: Duration,
    pub user_agent: String,
    pub description: DescriptionMode,
    pub query_format: QueryFormat,
    pub api_key: Option<String>,
    pub books: Vec<String>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            site: SiteOptions::default(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            delay: Duration::from_secs(REQUEST_PAUSE_SECS),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            user_agent: USER_AGENT.into(),
            description: DescriptionMode::default(),
            query_format: QueryFormat::default(),
            api_key: None,
            books: Vec::new(),
        }
    }
}

impl ScrapeOptions {
    pub fn catalog_path(&self) -> PathBuf {
        self.out_dir.join(CATALOG_FILE)
    }

    /// Layer values from a config file over the current ones.
    pub fn apply_file(&mut self, file: ConfigFile) -> Result<()> {
        if let Some(v) = file.output_dir { self.out_dir = v; }
        if let Some(v) = file.delay_secs { self.delay = delay_from_secs(v)?; }
        if let Some(v) = file.timeout_secs { self.timeout = Duration::from_secs(v); }
        if let Some(v) = file.user_agent { self.user_agent = v; }
        if let Some(v) = file.description { self.description = v; }
        if let Some(v) = file.query_format { self.query_format = v; }
        if let Some(v) = file.api_key { self.api_key = Some(v); }
        if let Some(v) = file.books { self.books = v; }
        Ok(())
    }

    /// Setup checks that must hold before any request goes out.
    pub fn validate(&self) -> Result<()> {
        if self.description == DescriptionMode::Api
            && self.api_key.as_deref().map_or(true, |k| k.trim().is_empty())
        {
            return Err(ScrapeError::Config(format!(
                "description source `api` needs an API key (config `api_key` or ${API_KEY_ENV})"
            )));
        }
        if self.books.is_empty() {
            return Err(ScrapeError::Config("no books to collect".into()));
        }
        Ok(())
    }
}

/// Inter-item delay from fractional seconds. Negative values mean no delay;
/// infinite or out-of-range values are rejected.
pub fn delay_from_secs(secs: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(secs.max(0.0))
        .map_err(|e| ScrapeError::Config(format!("invalid delay {secs}: {e}")))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeOptions {
    pub catalog: PathBuf,
    pub reviews: PathBuf,
    pub out: PathBuf,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from(CATALOG_FILE),
            reviews: PathBuf::from("reviews.csv"),
            out: PathBuf::from(MERGED_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_mode_requires_key() {
        let mut opts = ScrapeOptions { books: vec!["A, X".into()], ..Default::default() };
        assert!(opts.validate().is_err());
        opts.api_key = Some("  ".into());
        assert!(opts.validate().is_err());
        opts.api_key = Some("ttb-key".into());
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn page_mode_needs_no_key() {
        let opts = ScrapeOptions {
            description: DescriptionMode::Page,
            books: vec!["A, X".into()],
            ..Default::default()
        };
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn file_values_override_defaults() {
        let mut opts = ScrapeOptions::default();
        opts.apply_file(ConfigFile {
            output_dir: Some(PathBuf::from("covers")),
            delay_secs: Some(0.5),
            description: Some(DescriptionMode::Page),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(opts.out_dir, PathBuf::from("covers"));
        assert_eq!(opts.delay, Duration::from_millis(500));
        assert_eq!(opts.description, DescriptionMode::Page);
        assert_eq!(opts.query_format, QueryFormat::Plain);
        assert_eq!(opts.catalog_path(), PathBuf::from("covers").join(CATALOG_FILE));
    }

    #[test]
    fn unrepresentable_delay_is_a_config_error() {
        for text in ["delay_secs = inf\n", "delay_secs = 1e300\n"] {
            let mut opts = ScrapeOptions::default();
            let cfg = crate::config::file::parse(text).unwrap();
            let err = opts.apply_file(cfg).unwrap_err();
            assert!(matches!(err, ScrapeError::Config(_)), "{text}: {err}");
            assert_eq!(opts.delay, Duration::from_secs(REQUEST_PAUSE_SECS));
        }
    }

    #[test]
    fn negative_delay_means_none() {
        assert_eq!(delay_from_secs(-3.0).unwrap(), Duration::ZERO);
        assert_eq!(delay_from_secs(1.5).unwrap(), Duration::from_millis(1500));
    }
}
