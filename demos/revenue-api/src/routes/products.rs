use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;
use revenue_ledger::format::{format_currency, format_number};
use revenue_ledger::{SortOrder, ViewState};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ListProductsParams {
    pub filter: Option<String>,
    pub order: Option<SortOrder>,
    pub page: Option<usize>,
    pub view_all: Option<bool>,
}

/// GET /api/products?filter=ban&order=desc&page=2&view_all=false
///
/// One page of the filtered, sorted revenue view plus the filtered total.
pub async fn list_products(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListProductsParams>,
) -> Result<Json<Value>, AppError> {
    let view_state = ViewState {
        filter_text: params.filter.unwrap_or_default(),
        sort_order: params.order.unwrap_or_default(),
        current_page: params.page.unwrap_or(1),
        view_all: params.view_all.unwrap_or(false),
    };

    let page = state.ledger.page(view_state).await?;

    let rows: Vec<Value> = page
        .window
        .items
        .iter()
        .map(|e| {
            json!({
                "name": e.name,
                "revenue": e.revenue,
                "display": format_currency(e.revenue),
            })
        })
        .collect();

    Ok(Json(json!({
        "data": rows,
        "pageNumbers": page.window.page_numbers,
        "currentPage": page.window.current_page,
        "totalPages": page.window.total_pages,
        "hasPrev": page.window.has_prev,
        "hasNext": page.window.has_next,
        "matched": page.matched,
        "total": page.total,
        "totalDisplay": format_currency(page.total),
    })))
}

/// POST /api/reload
///
/// Re-fetch every feed and rebuild the ledger.
pub async fn reload(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    let report = state.ledger.load().await?;

    let excluded: Vec<Value> = report
        .excluded
        .iter()
        .map(|(name, e)| json!({ "source": name, "error": e.to_string() }))
        .collect();
    let rejected: Vec<String> = report.rejected.iter().map(|e| e.to_string()).collect();

    Ok(Json(json!({
        "merged": report.merged,
        "excluded": excluded,
        "rejected": rejected,
        "entries": report.entries,
        "totalRevenue": format_number(report.total_revenue),
    })))
}
