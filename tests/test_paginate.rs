//! Paginator tests: slicing, navigation window and view-all.

use revenue_ledger::paginate::{nav_window, total_pages};
use revenue_ledger::{
    aggregate, build_view, paginate, LedgerError, OrderedView, RawRecord, SortOrder, SourceBatch,
};

/// Ordered view of `n` products `P001`, `P002`, ...
fn view_of(n: usize) -> OrderedView {
    let records = (1..=n)
        .map(|i| RawRecord::new(format!("P{:03}", i), 1.0, 1).unwrap())
        .collect();
    build_view(
        &aggregate(&[SourceBatch::new("b", records)]),
        "",
        SortOrder::Ascending,
    )
}

// ---------------------------------------------------------------------------
// Slicing
// ---------------------------------------------------------------------------

#[test]
fn first_page_of_25() {
    let w = paginate(&view_of(25), 1, 10, false, 4).unwrap();
    assert_eq!(w.items.len(), 10);
    assert_eq!(w.items[0].name, "P001");
    assert!(!w.has_prev);
    assert!(w.has_next);
    assert_eq!(w.total_pages, 3);
}

#[test]
fn last_partial_page_of_25() {
    let w = paginate(&view_of(25), 3, 10, false, 4).unwrap();
    assert_eq!(w.items.len(), 5);
    assert_eq!(w.items[0].name, "P021");
    assert_eq!(w.items[4].name, "P025");
    assert!(w.has_prev);
    assert!(!w.has_next);
}

#[test]
fn page_past_the_end_is_empty_not_an_error() {
    let w = paginate(&view_of(25), 4, 10, false, 4).unwrap();
    assert!(w.items.is_empty());
    assert!(w.has_prev);
    assert!(!w.has_next);
    assert_eq!(w.current_page, 4);
}

#[test]
fn far_out_of_range_page_does_not_overflow() {
    let w = paginate(&view_of(5), usize::MAX, 10, false, 4).unwrap();
    assert!(w.items.is_empty());
    assert_eq!(w.page_numbers, vec![1]);
}

#[test]
fn exact_multiple_has_no_trailing_page() {
    let w = paginate(&view_of(20), 2, 10, false, 4).unwrap();
    assert_eq!(w.items.len(), 10);
    assert_eq!(w.total_pages, 2);
    assert!(!w.has_next);
}

#[test]
fn empty_view_has_no_pages() {
    let w = paginate(&OrderedView::default(), 1, 10, false, 4).unwrap();
    assert!(w.items.is_empty());
    assert!(w.page_numbers.is_empty());
    assert_eq!(w.total_pages, 0);
    assert!(!w.has_prev);
    assert!(!w.has_next);
}

#[test]
fn zero_arguments_are_rejected() {
    let view = view_of(3);
    assert!(matches!(
        paginate(&view, 0, 10, false, 4),
        Err(LedgerError::InvalidArgument(_))
    ));
    assert!(matches!(
        paginate(&view, 1, 0, false, 4),
        Err(LedgerError::InvalidArgument(_))
    ));
    assert!(matches!(
        paginate(&view, 1, 10, false, 0),
        Err(LedgerError::InvalidArgument(_))
    ));
}

#[test]
fn total_pages_rounds_up() {
    assert_eq!(total_pages(0, 10), 0);
    assert_eq!(total_pages(1, 10), 1);
    assert_eq!(total_pages(10, 10), 1);
    assert_eq!(total_pages(11, 10), 2);
    assert_eq!(total_pages(25, 10), 3);
}

// ---------------------------------------------------------------------------
// Navigation window
// ---------------------------------------------------------------------------

#[test]
fn window_is_clipped_when_fewer_pages_than_width() {
    for page in 1..=3 {
        assert_eq!(nav_window(page, 3, 4), vec![1, 2, 3], "page {}", page);
    }
}

#[test]
fn window_is_centred_in_the_middle() {
    assert_eq!(nav_window(5, 10, 4), vec![3, 4, 5, 6]);
    assert_eq!(nav_window(6, 10, 5), vec![4, 5, 6, 7, 8]);
}

#[test]
fn window_starts_at_one_near_the_beginning() {
    assert_eq!(nav_window(1, 10, 4), vec![1, 2, 3, 4]);
    assert_eq!(nav_window(2, 10, 4), vec![1, 2, 3, 4]);
    assert_eq!(nav_window(3, 10, 4), vec![1, 2, 3, 4]);
}

#[test]
fn window_shifts_left_at_the_end() {
    assert_eq!(nav_window(10, 10, 4), vec![7, 8, 9, 10]);
    assert_eq!(nav_window(9, 10, 4), vec![7, 8, 9, 10]);
}

#[test]
fn window_past_the_end_stays_in_range() {
    assert_eq!(nav_window(20, 10, 4), vec![7, 8, 9, 10]);
    assert_eq!(nav_window(4, 3, 4), vec![1, 2, 3]);
}

#[test]
fn window_of_width_one() {
    assert_eq!(nav_window(1, 5, 1), vec![1]);
    assert_eq!(nav_window(5, 5, 1), vec![5]);
}

#[test]
fn window_is_empty_without_pages() {
    assert!(nav_window(1, 0, 4).is_empty());
}

#[test]
fn window_is_always_contiguous_and_in_bounds() {
    for total in 0..12 {
        for width in 1..7 {
            for page in 1..15 {
                let pages = nav_window(page, total, width);
                assert!(pages.len() <= width);
                assert_eq!(pages.len(), width.min(total));
                for pair in pages.windows(2) {
                    assert_eq!(pair[1], pair[0] + 1);
                }
                for p in &pages {
                    assert!(*p >= 1 && *p <= total);
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// View all
// ---------------------------------------------------------------------------

#[test]
fn view_all_returns_everything_on_one_page() {
    let view = view_of(25);
    for page in [1, 2, 3, 7] {
        let w = paginate(&view, page, 10, true, 4).unwrap();
        assert_eq!(w.items.len(), 25);
        assert_eq!(w.page_numbers, vec![1]);
        assert!(!w.has_prev);
        assert!(!w.has_next);
        assert_eq!(w.total_pages, 1);
    }
}

#[test]
fn view_all_on_empty_view() {
    let w = paginate(&OrderedView::default(), 1, 10, true, 4).unwrap();
    assert!(w.items.is_empty());
    assert_eq!(w.page_numbers, vec![1]);
}
