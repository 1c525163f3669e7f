// src/config/file.rs
//! On-disk configuration: an optional `bookshelf.toml` and plain-text book lists.

use std::{fs, path::{Path, PathBuf}};

use serde::Deserialize;

use super::options::{DescriptionMode, QueryFormat};
use crate::error::Result;

/// Every field is optional; absent ones keep the built-in default.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub output_dir: Option<PathBuf>,
    pub delay_secs: Option<f64>,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
    pub description: Option<DescriptionMode>,
    pub query_format: Option<QueryFormat>,
    pub api_key: Option<String>,
    pub books: Option<Vec<String>>,
}

pub fn load(path: &Path) -> Result<ConfigFile> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}

pub fn parse(text: &str) -> Result<ConfigFile> {
    Ok(toml::from_str(text)?)
}

/// One query per line; blank lines and `#` comments are ignored.
pub fn read_book_list(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(String::from)
        .collect())
}
