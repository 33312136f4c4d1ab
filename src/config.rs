use std::path::PathBuf;

/// Rows shown per page when pagination is active.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Number of page links offered around the current page.
pub const DEFAULT_NAV_WINDOW: usize = 4;

/// HTTP timeout for remote feed downloads, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Feed files fetched when no explicit sources are configured, in merge order.
pub fn default_feed_files() -> Vec<&'static str> {
    vec!["branch1.json", "branch2.json", "branch3.json"]
}

pub fn default_cache_dir() -> PathBuf {
    if let Some(cache) = dirs::cache_dir() {
        cache.join("revenue-ledger")
    } else {
        PathBuf::from(".revenue-ledger-cache")
    }
}
