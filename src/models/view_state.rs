use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SortOrder — Direction of the name ordering
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

// ---------------------------------------------------------------------------
// ViewState — Transient filter/sort/page selection of one session
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub filter_text: String,
    pub sort_order: SortOrder,
    pub current_page: usize,
    pub view_all: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            filter_text: String::new(),
            sort_order: SortOrder::Ascending,
            current_page: 1,
            view_all: false,
        }
    }
}
