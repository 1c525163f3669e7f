// src/config/consts.rs

// Site
pub const BASE_URL: &str = "https://www.aladin.co.kr/";
pub const SEARCH_URL: &str = "https://www.aladin.co.kr/search/wsearchresult.aspx";
pub const LOOKUP_API_URL: &str = "http://www.aladin.co.kr/ttb/api/ItemLookUp.aspx";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const API_KEY_ENV: &str = "BOOKSHELF_API_KEY";

// Output
pub const DEFAULT_OUT_DIR: &str = "aladin_book_data";
pub const CATALOG_FILE: &str = "books_data.json";
pub const MERGED_FILE: &str = "books_data_with_reviews.json";
pub const CATALOG_SOURCE: &str = "Aladin";
pub const DEFAULT_CONFIG_FILE: &str = "bookshelf.toml";

// Network
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
pub const REQUEST_PAUSE_SECS: u64 = 2; // be polite
pub const DOWNLOAD_CHUNK: usize = 1024;

// Logging
pub const LOG_MSG_MAX: usize = 100;
