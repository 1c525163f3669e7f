// src/file.rs

use std::{fs, path::Path};

use crate::core::sanitize::sanitize_filename;
use crate::error::{Result, ScrapeError};

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::Config(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// `{index:03}_{title}_{author}.jpg`, both parts sanitized.
pub fn cover_file_name(index: usize, title: &str, author: &str) -> String {
    format!("{index:03}_{}_{}.jpg", sanitize_filename(title), sanitize_filename(author))
}
