//! Revenue ledger for Rust.
//!
//! Merges per-product sales lines from several feeds into one revenue entry
//! per product, then serves filtered, sorted and paginated views over the
//! result together with the grand total of the filtered set.
//!
//! # Quick start
//!
//! ```no_run
//! use revenue_ledger::{FeedSource, RevenueLedger, ViewState};
//!
//! let mut ledger = RevenueLedger::builder()
//!     .source(FeedSource::file("data/branch1.json"))
//!     .source(FeedSource::file("data/branch2.json"))
//!     .build()
//!     .unwrap();
//!
//! ledger.load().unwrap();
//! let page = ledger.page(&ViewState::default()).unwrap();
//! println!("{} of {} pages, total {}", page.window.current_page, page.window.total_pages, page.total);
//! ```

pub mod aggregate;
#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod error;
pub mod feed;
pub mod format;
pub mod models;
pub mod paginate;
pub mod session;
pub mod totals;
pub mod view;

pub use aggregate::{aggregate, AggregatedSet, InvalidRecordPolicy, SourceBatch};
#[cfg(feature = "async")]
pub use async_client::AsyncRevenueLedger;
pub use error::{LedgerError, Result};
pub use feed::{FeedLoader, FeedSource};
pub use models::{
    FeedDocument, LedgerPage, PageWindow, RawRecord, RevenueEntry, SortOrder, ViewState,
};
pub use paginate::paginate;
pub use session::ViewSession;
pub use totals::total;
pub use view::{build_view, OrderedView};

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

/// Memoized views kept before the cache is flushed.
const VIEW_CACHE_LIMIT: usize = 64;

// ---------------------------------------------------------------------------
// SourceFailurePolicy
// ---------------------------------------------------------------------------

/// What [`RevenueLedger::load`] does when a source cannot be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceFailurePolicy {
    /// Fail the load with the first failure and keep the previous data.
    #[default]
    Abort,
    /// Aggregate the remaining sources and report the excluded ones.
    Partial,
}

// ---------------------------------------------------------------------------
// LoadReport
// ---------------------------------------------------------------------------

/// Outcome of a successful [`RevenueLedger::load`].
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Sources whose records were merged, in merge order.
    pub merged: Vec<String>,
    /// Sources left out under [`SourceFailurePolicy::Partial`].
    pub excluded: Vec<(String, LedgerError)>,
    /// Records skipped under [`InvalidRecordPolicy::SkipRecord`].
    pub rejected: Vec<LedgerError>,
    /// Number of aggregated entries.
    pub entries: usize,
    /// Revenue over all aggregated entries.
    pub total_revenue: f64,
}

// ---------------------------------------------------------------------------
// RevenueLedgerBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`RevenueLedger`] instance.
///
/// Use [`RevenueLedger::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](RevenueLedgerBuilder::build).
pub struct RevenueLedgerBuilder {
    sources: Option<Vec<FeedSource>>,
    base_url: Option<String>,
    cache_dir: Option<PathBuf>,
    offline: bool,
    timeout: Duration,
    page_size: usize,
    nav_window: usize,
    record_policy: InvalidRecordPolicy,
    failure_policy: SourceFailurePolicy,
}

impl Default for RevenueLedgerBuilder {
    fn default() -> Self {
        Self {
            sources: None,
            base_url: None,
            cache_dir: None,
            offline: false,
            timeout: Duration::from_secs(config::DEFAULT_TIMEOUT_SECS),
            page_size: config::DEFAULT_PAGE_SIZE,
            nav_window: config::DEFAULT_NAV_WINDOW,
            record_policy: InvalidRecordPolicy::default(),
            failure_policy: SourceFailurePolicy::default(),
        }
    }
}

impl RevenueLedgerBuilder {
    /// Append a feed source. Sources are merged in the order they are added.
    pub fn source(mut self, source: FeedSource) -> Self {
        self.sources.get_or_insert_with(Vec::new).push(source);
        self
    }

    /// Replace the configured sources.
    pub fn sources(mut self, sources: Vec<FeedSource>) -> Self {
        self.sources = Some(sources);
        self
    }

    /// Base URL for remote feeds.
    ///
    /// If no sources are configured, the default branch feeds
    /// (see [`config::default_feed_files`]) are fetched from this URL.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    /// Set a custom directory for downloaded feeds.
    ///
    /// If not set, the platform cache directory is used (e.g.
    /// `~/.cache/revenue-ledger` on Linux).
    pub fn cache_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.cache_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// When offline, remote feeds are served from the cache only.
    /// Defaults to `false`.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// HTTP timeout for remote feeds. Defaults to 120 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Rows per page. Defaults to 10.
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Width of the page-number window. Defaults to 4.
    pub fn nav_window(mut self, nav_window: usize) -> Self {
        self.nav_window = nav_window;
        self
    }

    pub fn invalid_record_policy(mut self, policy: InvalidRecordPolicy) -> Self {
        self.record_policy = policy;
        self
    }

    pub fn source_failure_policy(mut self, policy: SourceFailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Build the ledger. No feed is retrieved until [`RevenueLedger::load`].
    pub fn build(self) -> Result<RevenueLedger> {
        if self.page_size == 0 {
            return Err(LedgerError::InvalidArgument(
                "page size must be positive".into(),
            ));
        }
        if self.nav_window == 0 {
            return Err(LedgerError::InvalidArgument(
                "navigation window size must be positive".into(),
            ));
        }

        let sources = match self.sources {
            Some(sources) => sources,
            None if self.base_url.is_some() => config::default_feed_files()
                .into_iter()
                .map(FeedSource::remote)
                .collect(),
            None => Vec::new(),
        };

        let has_remote = sources
            .iter()
            .any(|s| matches!(s, FeedSource::Remote { .. }));
        if has_remote && self.base_url.is_none() {
            return Err(LedgerError::InvalidArgument(
                "remote feed sources need a base URL".into(),
            ));
        }

        let loader = FeedLoader::new(self.base_url, self.cache_dir, self.offline, self.timeout);
        Ok(RevenueLedger {
            loader,
            sources,
            page_size: self.page_size,
            nav_window: self.nav_window,
            record_policy: self.record_policy,
            failure_policy: self.failure_policy,
            set: None,
            generation: 0,
            views: RefCell::new(HashMap::new()),
        })
    }
}

// ---------------------------------------------------------------------------
// RevenueLedger
// ---------------------------------------------------------------------------

/// Aggregated revenue over a fixed list of feeds.
///
/// Every [`load`](Self::load) retrieves all sources and rebuilds the
/// aggregated set from scratch. Views are derived on demand and memoized
/// per `(filter, order)` until the next load.
///
/// Created via [`RevenueLedger::builder()`].
pub struct RevenueLedger {
    loader: FeedLoader,
    sources: Vec<FeedSource>,
    page_size: usize,
    nav_window: usize,
    record_policy: InvalidRecordPolicy,
    failure_policy: SourceFailurePolicy,
    set: Option<AggregatedSet>,
    generation: u64,
    views: RefCell<HashMap<(String, SortOrder), Arc<OrderedView>>>,
}

impl RevenueLedger {
    /// Create a new builder for configuring the ledger.
    pub fn builder() -> RevenueLedgerBuilder {
        RevenueLedgerBuilder::default()
    }

    // -- Loading -----------------------------------------------------------

    /// Retrieve every source, then aggregate them in one pass.
    ///
    /// Under [`SourceFailurePolicy::Abort`] the first failing source is
    /// returned as the error and the previously loaded data stays in place.
    pub fn load(&mut self) -> Result<LoadReport> {
        let fetched = self.loader.fetch_all(&self.sources);

        let mut report = LoadReport::default();
        let mut batches = Vec::with_capacity(fetched.len());

        for (name, result) in fetched {
            let parsed = result
                .and_then(|doc| SourceBatch::from_document(&name, &doc, self.record_policy));
            match parsed {
                Ok((batch, rejected)) => {
                    report.merged.push(name);
                    report.rejected.extend(rejected);
                    batches.push(batch);
                }
                Err(e) => {
                    warn!(source = %name, %e, "source excluded from aggregation");
                    report.excluded.push((name, e));
                }
            }
        }

        if self.failure_policy == SourceFailurePolicy::Abort {
            if let Some((_, e)) = report.excluded.into_iter().next() {
                return Err(e);
            }
            report.excluded = Vec::new();
        }

        let set = aggregate(&batches);
        report.entries = set.len();
        report.total_revenue = set.total_revenue();
        info!(
            sources = report.merged.len(),
            excluded = report.excluded.len(),
            rejected = report.rejected.len(),
            entries = report.entries,
            "ledger loaded"
        );

        self.replace_set(set);
        Ok(report)
    }

    /// Aggregate batches obtained outside the ledger's own loader.
    pub fn load_batches(&mut self, batches: &[SourceBatch]) -> usize {
        let set = aggregate(batches);
        let entries = set.len();
        self.replace_set(set);
        entries
    }

    fn replace_set(&mut self, set: AggregatedSet) {
        self.set = Some(set);
        self.generation += 1;
        self.views.borrow_mut().clear();
    }

    // -- Queries -----------------------------------------------------------

    /// The aggregated set from the latest load.
    pub fn aggregated(&self) -> Result<&AggregatedSet> {
        self.set.as_ref().ok_or(LedgerError::NotLoaded)
    }

    /// Filtered and sorted view, memoized until the next load.
    pub fn view(&self, filter_text: &str, order: SortOrder) -> Result<Arc<OrderedView>> {
        let set = self.aggregated()?;
        let key = (filter_text.to_string(), order);

        if let Some(view) = self.views.borrow().get(&key) {
            return Ok(Arc::clone(view));
        }

        let view = Arc::new(build_view(set, filter_text, order));
        let mut views = self.views.borrow_mut();
        if views.len() >= VIEW_CACHE_LIMIT {
            views.clear();
        }
        views.insert(key, Arc::clone(&view));
        Ok(view)
    }

    /// Page window and filtered total for a view state.
    pub fn page(&self, state: &ViewState) -> Result<LedgerPage> {
        let view = self.view(&state.filter_text, state.sort_order)?;
        let window = paginate(
            &view,
            state.current_page,
            self.page_size,
            state.view_all,
            self.nav_window,
        )?;
        Ok(LedgerPage {
            window,
            total: total(&view),
            matched: view.len(),
        })
    }

    /// Revenue over all entries matching `filter_text`.
    pub fn total(&self, filter_text: &str) -> Result<f64> {
        let view = self.view(filter_text, SortOrder::Ascending)?;
        Ok(total(&view))
    }

    /// Entry for an exact product name.
    pub fn entry(&self, name: &str) -> Result<Option<RevenueEntry>> {
        Ok(self.aggregated()?.get(name).cloned())
    }

    /// All entries in ascending name order.
    pub fn entries(&self) -> Result<Vec<RevenueEntry>> {
        Ok(self.view("", SortOrder::Ascending)?.entries().to_vec())
    }

    // -- Metadata ----------------------------------------------------------

    pub fn is_loaded(&self) -> bool {
        self.set.is_some()
    }

    /// Number of completed loads.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn sources(&self) -> &[FeedSource] {
        &self.sources
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn nav_window(&self) -> usize {
        self.nav_window
    }

    /// Number of memoized views.
    pub fn cached_views(&self) -> usize {
        self.views.borrow().len()
    }

    /// Return a reference to the underlying [`FeedLoader`].
    pub fn loader(&self) -> &FeedLoader {
        &self.loader
    }

    /// Return a mutable reference to the underlying [`FeedLoader`].
    pub fn loader_mut(&mut self) -> &mut FeedLoader {
        &mut self.loader
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for RevenueLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.sources.iter().map(|s| s.name()).collect();
        write!(
            f,
            "RevenueLedger(sources=[{}], entries={}, page_size={}, offline={})",
            names.join(", "),
            self.set.as_ref().map_or(0, |s| s.len()),
            self.page_size,
            self.loader.offline
        )
    }
}
