//! Async wrapper tests.

#![cfg(feature = "async")]

mod common;

use revenue_ledger::{AsyncRevenueLedger, LedgerError, ViewState};

#[tokio::test]
async fn load_and_page_on_blocking_pool() {
    let (builder, _tmp) = common::builder_for(&common::branch_feeds());
    let ledger = AsyncRevenueLedger::build(builder).await.unwrap();

    assert!(!ledger.is_loaded().await.unwrap());
    let report = ledger.load().await.unwrap();
    assert_eq!(report.entries, 5);

    let page = ledger.page(ViewState::default()).await.unwrap();
    assert_eq!(page.window.items.len(), 5);
    assert_eq!(page.total, common::BRANCH_TOTAL);
    assert_eq!(ledger.total("banana").await.unwrap(), 16.0);
}

#[tokio::test]
async fn errors_cross_the_blocking_boundary() {
    let (builder, _tmp) = common::builder_for(&common::branch_feeds());
    let ledger = AsyncRevenueLedger::build(builder).await.unwrap();
    let err = ledger.page(ViewState::default()).await.unwrap_err();
    assert!(matches!(err, LedgerError::NotLoaded));
}
