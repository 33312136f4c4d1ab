use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use revenue_ledger::LedgerError;
use serde_json::json;

/// Unified error type that renders as a JSON `{"error": "..."}` response
/// with an appropriate HTTP status code.
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            status,
            message: msg.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<LedgerError> for AppError {
    fn from(e: LedgerError) -> Self {
        let status = match &e {
            LedgerError::NotFound(_) => StatusCode::NOT_FOUND,
            LedgerError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            LedgerError::SourceUnavailable { .. } | LedgerError::InvalidRecord { .. } => {
                StatusCode::BAD_GATEWAY
            }
            LedgerError::NotLoaded => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        AppError::new(status, e.to_string())
    }
}
