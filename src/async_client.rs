//! Async wrapper around [`RevenueLedger`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all ledger operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! feeds download and aggregate.
//!
//! # Example
//!
//! ```no_run
//! use revenue_ledger::{AsyncRevenueLedger, RevenueLedger, ViewState};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let builder = RevenueLedger::builder().base_url("https://example.com/api");
//!     let ledger = AsyncRevenueLedger::build(builder).await.unwrap();
//!     ledger.load().await.unwrap();
//!     let page = ledger.page(ViewState::default()).await.unwrap();
//! }
//! ```

use std::sync::{Arc, Mutex};

use crate::error::{LedgerError, Result};
use crate::models::{LedgerPage, ViewState};
use crate::{LoadReport, RevenueLedger, RevenueLedgerBuilder};

/// Async wrapper around [`RevenueLedger`].
///
/// The ledger memoizes views through a `RefCell`, so it is kept behind a
/// [`Mutex`] and every call is dispatched to the blocking pool.
#[derive(Clone)]
pub struct AsyncRevenueLedger {
    inner: Arc<Mutex<RevenueLedger>>,
}

impl AsyncRevenueLedger {
    /// Build the ledger on the blocking thread pool.
    pub async fn build(builder: RevenueLedgerBuilder) -> Result<Self> {
        tokio::task::spawn_blocking(move || {
            let ledger = builder.build()?;
            Ok(AsyncRevenueLedger {
                inner: Arc::new(Mutex::new(ledger)),
            })
        })
        .await
        .map_err(|e| LedgerError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Wrap an already built ledger.
    pub fn new(ledger: RevenueLedger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    /// Run a sync ledger operation on the blocking thread pool.
    ///
    /// The closure receives exclusive access to the ledger.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut RevenueLedger) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let ledger = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let mut guard = ledger
                .lock()
                .map_err(|_| LedgerError::InvalidArgument("ledger lock poisoned".into()))?;
            f(&mut guard)
        })
        .await
        .map_err(|e| LedgerError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Retrieve all sources and re-aggregate.
    pub async fn load(&self) -> Result<LoadReport> {
        self.run(|l| l.load()).await
    }

    /// Page window and filtered total for a view state.
    pub async fn page(&self, state: ViewState) -> Result<LedgerPage> {
        self.run(move |l| l.page(&state)).await
    }

    /// Revenue over all entries matching `filter_text`.
    pub async fn total(&self, filter_text: &str) -> Result<f64> {
        let filter_text = filter_text.to_string();
        self.run(move |l| l.total(&filter_text)).await
    }

    pub async fn is_loaded(&self) -> Result<bool> {
        self.run(|l| Ok(l.is_loaded())).await
    }
}
