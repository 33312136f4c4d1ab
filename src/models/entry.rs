use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RevenueEntry — Cumulative revenue for one product name
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueEntry {
    pub name: String,
    pub revenue: f64,
}

impl RevenueEntry {
    pub fn new(name: impl Into<String>, revenue: f64) -> Self {
        Self {
            name: name.into(),
            revenue,
        }
    }
}
