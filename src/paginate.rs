//! Page-window arithmetic over an [`OrderedView`].

use crate::error::{LedgerError, Result};
use crate::models::PageWindow;
use crate::view::OrderedView;

/// Number of pages needed for `len` items, `0` when there are none.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Contiguous run of page links around `current_page`.
///
/// The run is at most `width` wide, never leaves `[1, total_pages]`, and
/// shifts left near the last page instead of shrinking. Empty when there
/// are no pages.
pub fn nav_window(current_page: usize, total_pages: usize, width: usize) -> Vec<usize> {
    if total_pages == 0 || width == 0 {
        return Vec::new();
    }
    let mut start = current_page.saturating_sub(width / 2).max(1);
    let end = start.saturating_add(width - 1).min(total_pages);
    let shown = if end >= start { end - start + 1 } else { 0 };
    if shown < width {
        start = (end + 1).saturating_sub(width).max(1);
    }
    (start..=end).collect()
}

/// Slice `view` into the window for `current_page`.
///
/// `current_page` is not clamped: a page past the end yields no items.
/// With `view_all` the whole view is one page.
pub fn paginate(
    view: &OrderedView,
    current_page: usize,
    page_size: usize,
    view_all: bool,
    nav_window_size: usize,
) -> Result<PageWindow> {
    if current_page == 0 {
        return Err(LedgerError::InvalidArgument(
            "current page starts at 1".into(),
        ));
    }
    if page_size == 0 {
        return Err(LedgerError::InvalidArgument(
            "page size must be positive".into(),
        ));
    }
    if nav_window_size == 0 {
        return Err(LedgerError::InvalidArgument(
            "navigation window size must be positive".into(),
        ));
    }

    if view_all {
        return Ok(PageWindow {
            items: view.entries().to_vec(),
            page_numbers: vec![1],
            has_prev: false,
            has_next: false,
            current_page: 1,
            total_pages: 1,
        });
    }

    let entries = view.entries();
    let pages = total_pages(entries.len(), page_size);

    let first = (current_page - 1).saturating_mul(page_size).min(entries.len());
    let last = current_page.saturating_mul(page_size).min(entries.len());

    Ok(PageWindow {
        items: entries[first..last].to_vec(),
        page_numbers: nav_window(current_page, pages, nav_window_size),
        has_prev: current_page > 1,
        has_next: current_page < pages,
        current_page,
        total_pages: pages,
    })
}
