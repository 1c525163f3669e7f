// src/lib.rs

pub mod catalog;
pub mod config;
pub mod core;
pub mod download;
pub mod error;
pub mod file;
pub mod logging;
pub mod progress;
pub mod query;
pub mod reviews;
pub mod scrape;
pub mod specs;

#[cfg(feature = "cli")]
pub mod cli;
