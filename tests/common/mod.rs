//! Shared test fixtures for the revenue ledger integration tests.
//!
//! Feeds are written as JSON files into a temporary directory and loaded
//! through file sources, the same way a deployment reads branch exports.

#![allow(dead_code)]

use revenue_ledger::{FeedSource, RevenueLedger, RevenueLedgerBuilder};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Three branch feeds modelled on the shop's real exports.
pub fn branch_feeds() -> Vec<(&'static str, Value)> {
    vec![
        (
            "branch1.json",
            json!({ "products": [
                { "name": "Apple", "unitPrice": 1.5, "sold": 10 },
                { "name": "Banana", "unitPrice": 0.25, "sold": 40 },
                { "name": "Cherry", "unitPrice": 4.0, "sold": 3 }
            ]}),
        ),
        (
            "branch2.json",
            json!({ "products": [
                { "name": "Apple", "unitPrice": 2.0, "sold": 5 },
                { "name": "Dragonfruit", "unitPrice": 8.5, "sold": 2 }
            ]}),
        ),
        (
            "branch3.json",
            json!({ "products": [
                { "name": "banana bread", "unitPrice": 6.0, "sold": 1 },
                { "name": "Cherry", "unitPrice": 4.0, "sold": 1 }
            ]}),
        ),
    ]
}

/// Σ unitPrice × sold over [`branch_feeds`].
pub const BRANCH_TOTAL: f64 = 15.0 + 10.0 + 12.0 + 10.0 + 17.0 + 6.0 + 4.0;

/// A feed of `n` distinct products named `Product 01`, `Product 02`, ...
/// each worth `1.0 × index`.
pub fn numbered_feed(n: usize) -> Value {
    let products: Vec<Value> = (1..=n)
        .map(|i| json!({ "name": format!("Product {:02}", i), "unitPrice": i as f64, "sold": 1 }))
        .collect();
    json!({ "products": products })
}

/// Write `doc` as `<dir>/<name>` and return the path.
pub fn write_feed(dir: &Path, name: &str, doc: &Value) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string_pretty(doc).unwrap()).unwrap();
    path
}

/// Builder with one file source per feed, written into a fresh temp dir.
///
/// The caller must keep the returned `TempDir` alive for the test.
pub fn builder_for(feeds: &[(&str, Value)]) -> (RevenueLedgerBuilder, tempfile::TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let mut builder = RevenueLedger::builder()
        .cache_dir(tmp_dir.path().join("cache"))
        .offline(true);
    for (name, doc) in feeds {
        let path = write_feed(tmp_dir.path(), name, doc);
        builder = builder.source(FeedSource::file(path));
    }
    (builder, tmp_dir)
}

/// Loaded ledger over `feeds`.
pub fn loaded_ledger(feeds: &[(&str, Value)]) -> (RevenueLedger, tempfile::TempDir) {
    let (builder, tmp_dir) = builder_for(feeds);
    let mut ledger = builder.build().unwrap();
    ledger.load().unwrap();
    (ledger, tmp_dir)
}
