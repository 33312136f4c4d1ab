//! Owner of a [`ViewState`] and the control actions that mutate it.
//!
//! Changing the filter or flipping view-all sends the user back to page 1,
//! since either can shrink the page count below the current page. Changing
//! the sort order keeps the current page.

use tracing::trace;

use crate::error::{LedgerError, Result};
use crate::models::{SortOrder, ViewState};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewSession {
    state: ViewState,
}

impl ViewSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from an existing state.
    pub fn with_state(state: ViewState) -> Result<Self> {
        if state.current_page == 0 {
            return Err(LedgerError::InvalidArgument(
                "current page starts at 1".into(),
            ));
        }
        Ok(Self { state })
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.state.filter_text = text.into();
        self.state.current_page = 1;
        trace!(filter = %self.state.filter_text, "filter changed");
    }

    /// Leaves the current page untouched.
    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.state.sort_order = order;
    }

    pub fn toggle_view_all(&mut self) {
        self.state.view_all = !self.state.view_all;
        self.state.current_page = 1;
        trace!(view_all = self.state.view_all, "view-all toggled");
    }

    pub fn go_to_page(&mut self, page: usize) -> Result<()> {
        if page == 0 {
            return Err(LedgerError::InvalidArgument(
                "current page starts at 1".into(),
            ));
        }
        self.state.current_page = page;
        Ok(())
    }

    /// Move one page forward. The caller checks `has_next` first.
    pub fn next_page(&mut self) {
        self.state.current_page = self.state.current_page.saturating_add(1);
    }

    /// Move one page back, stopping at page 1.
    pub fn prev_page(&mut self) {
        if self.state.current_page > 1 {
            self.state.current_page -= 1;
        }
    }
}
