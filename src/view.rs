//! Filtered, sorted projection of an [`AggregatedSet`].

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};

use crate::aggregate::AggregatedSet;
use crate::models::{RevenueEntry, SortOrder};

/// Entries that passed the name filter, in display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderedView {
    entries: Vec<RevenueEntry>,
}

impl OrderedView {
    pub fn entries(&self) -> &[RevenueEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn into_entries(self) -> Vec<RevenueEntry> {
        self.entries
    }
}

/// Case-insensitive substring match. An empty filter matches everything.
pub fn matches_filter(name: &str, filter_text: &str) -> bool {
    contains_folded(&name.to_lowercase(), &filter_text.to_lowercase())
}

fn contains_folded(name_lower: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || name_lower.contains(needle_lower)
}

thread_local! {
    // Root-locale collator at secondary strength: accents count, case does not.
    static NAME_COLLATOR: Option<Collator> = {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Secondary);
        Collator::try_new(&Default::default(), options).ok()
    };
}

fn compare_with(collator: Option<&Collator>, a: &str, b: &str) -> Ordering {
    let primary = match collator {
        Some(c) => c.compare(a, b),
        // Compiled root data always loads; lower-cased code points otherwise.
        None => a.to_lowercase().cmp(&b.to_lowercase()),
    };
    primary.then_with(|| a.cmp(b))
}

/// Compare two names the way a reader expects them alphabetised.
///
/// Uses Unicode collation, so `Éclair` sits between `apple` and `Zebra`,
/// and ignores case. Names that collate equal fall back to their exact
/// spelling so that the ordering stays total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    NAME_COLLATOR.with(|c| compare_with(c.as_ref(), a, b))
}

/// Filter `set` on `filter_text` and sort by name in `order`.
pub fn build_view(set: &AggregatedSet, filter_text: &str, order: SortOrder) -> OrderedView {
    let needle = filter_text.to_lowercase();

    let mut entries: Vec<RevenueEntry> = set
        .iter()
        .filter(|e| contains_folded(&e.name.to_lowercase(), &needle))
        .cloned()
        .collect();

    NAME_COLLATOR.with(|c| {
        entries.sort_by(|a, b| {
            let ord = compare_with(c.as_ref(), &a.name, &b.name);
            match order {
                SortOrder::Ascending => ord,
                SortOrder::Descending => ord.reverse(),
            }
        });
    });

    OrderedView { entries }
}
