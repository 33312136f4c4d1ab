/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// The async ledger. Dispatches blocking loads and queries to a thread
    /// pool internally.
    pub ledger: revenue_ledger::AsyncRevenueLedger,
}
