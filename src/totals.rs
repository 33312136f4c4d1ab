//! Grand total over the filtered view.

use crate::view::OrderedView;

/// Sum of revenue over every entry of `view`.
///
/// Takes the whole filtered view, so the result follows the search filter
/// but never the current page or the view-all toggle.
pub fn total(view: &OrderedView) -> f64 {
    view.entries().iter().map(|e| e.revenue).sum()
}
