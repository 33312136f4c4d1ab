//! Merges sale records from every source into one revenue entry per product.
//!
//! Feed documents are validated into [`SourceBatch`]es first; [`aggregate`]
//! then folds the batches, in source order, into an [`AggregatedSet`].

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::{LedgerError, Result};
use crate::models::{FeedDocument, RawRecord, RevenueEntry};

// ---------------------------------------------------------------------------
// InvalidRecordPolicy
// ---------------------------------------------------------------------------

/// What to do with a source that contains a malformed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidRecordPolicy {
    /// Exclude only the malformed record and report it.
    #[default]
    SkipRecord,
    /// Fail the whole source with the first malformed record.
    RejectSource,
}

// ---------------------------------------------------------------------------
// SourceBatch
// ---------------------------------------------------------------------------

/// Validated records of one named source.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceBatch {
    pub name: String,
    pub records: Vec<RawRecord>,
}

impl SourceBatch {
    pub fn new(name: impl Into<String>, records: Vec<RawRecord>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }

    /// Validate every entry of a feed document.
    ///
    /// Returns the batch plus the records that were rejected under
    /// [`InvalidRecordPolicy::SkipRecord`]. Under
    /// [`InvalidRecordPolicy::RejectSource`] the first malformed entry is
    /// returned as the error instead.
    pub fn from_document(
        name: &str,
        doc: &FeedDocument,
        policy: InvalidRecordPolicy,
    ) -> Result<(Self, Vec<LedgerError>)> {
        let mut records = Vec::with_capacity(doc.products.len());
        let mut rejected = Vec::new();

        for (index, value) in doc.products.iter().enumerate() {
            match RawRecord::from_json(name, index, value) {
                Ok(record) => records.push(record),
                Err(e) => match policy {
                    InvalidRecordPolicy::RejectSource => return Err(e),
                    InvalidRecordPolicy::SkipRecord => {
                        warn!(source = %name, %e, "skipping invalid record");
                        rejected.push(e);
                    }
                },
            }
        }

        Ok((Self::new(name, records), rejected))
    }
}

// ---------------------------------------------------------------------------
// AggregatedSet
// ---------------------------------------------------------------------------

/// Product name to cumulative revenue. Names are unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregatedSet {
    entries: HashMap<String, RevenueEntry>,
}

impl AggregatedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `revenue` to the entry for `name`, creating it if absent.
    pub fn add(&mut self, name: &str, revenue: f64) {
        match self.entries.get_mut(name) {
            Some(entry) => entry.revenue += revenue,
            None => {
                self.entries
                    .insert(name.to_string(), RevenueEntry::new(name, revenue));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&RevenueEntry> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &RevenueEntry> {
        self.entries.values()
    }

    /// Sum of every entry's revenue.
    pub fn total_revenue(&self) -> f64 {
        self.entries.values().map(|e| e.revenue).sum()
    }
}

/// Merge every batch into a fresh [`AggregatedSet`].
///
/// Batches are visited in the order given and records in feed order, so
/// repeated calls on the same input accumulate in the same sequence.
pub fn aggregate(sources: &[SourceBatch]) -> AggregatedSet {
    let mut set = AggregatedSet::new();
    for batch in sources {
        for record in &batch.records {
            set.add(&record.name, record.revenue());
        }
        debug!(source = %batch.name, records = batch.records.len(), "merged source");
    }
    set
}
