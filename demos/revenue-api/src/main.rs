mod error;
mod routes;
mod state;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use revenue_ledger::{config, AsyncRevenueLedger, FeedSource, RevenueLedger};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // FEED_DIR reads the branch exports from disk; otherwise they are
    // downloaded from FEED_BASE_URL.
    let builder = match std::env::var("FEED_DIR") {
        Ok(dir) => {
            let dir = std::path::PathBuf::from(dir);
            config::default_feed_files()
                .into_iter()
                .fold(RevenueLedger::builder(), |b, f| {
                    b.source(FeedSource::file(dir.join(f)))
                })
        }
        Err(_) => {
            let base = std::env::var("FEED_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080/api".to_string());
            RevenueLedger::builder().base_url(&base)
        }
    };

    info!("Initializing revenue ledger...");
    let ledger = AsyncRevenueLedger::build(builder)
        .await
        .expect("Failed to initialize revenue ledger");
    match ledger.load().await {
        Ok(report) => info!(entries = report.entries, "ledger ready"),
        Err(e) => warn!(%e, "initial load failed; POST /api/reload to retry"),
    }

    let state = Arc::new(AppState { ledger });

    let app = Router::new()
        .route("/api/products", get(routes::products::list_products))
        .route("/api/reload", post(routes::products::reload))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    info!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
