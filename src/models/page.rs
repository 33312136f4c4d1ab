use serde::{Deserialize, Serialize};

use super::entry::RevenueEntry;

// ---------------------------------------------------------------------------
// PageWindow — Visible slice of an ordered view plus navigation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWindow {
    pub items: Vec<RevenueEntry>,
    pub page_numbers: Vec<usize>,
    pub has_prev: bool,
    pub has_next: bool,
    pub current_page: usize,
    pub total_pages: usize,
}

// ---------------------------------------------------------------------------
// LedgerPage — Page window together with the filtered grand total
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerPage {
    pub window: PageWindow,
    /// Revenue summed over the whole filtered view, not just `window.items`.
    pub total: f64,
    /// Number of entries in the filtered view.
    pub matched: usize,
}
