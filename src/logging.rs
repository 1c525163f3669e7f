// src/logging.rs
use log::LevelFilter;

/// Install the console logger. `verbose` turns on debug lines
/// (per-request detail, cover formats, description lengths).
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    let mut builder = colog::default_builder();
    builder.filter_level(level);
    // Dependency chatter (connection pools, html5ever) stays quiet unless asked for.
    builder.filter_module("reqwest", LevelFilter::Warn);
    builder.filter_module("html5ever", LevelFilter::Warn);
    let _ = builder.try_init();
}
