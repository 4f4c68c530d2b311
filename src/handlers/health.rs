use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "wellness-hub-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn readyz(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ready",
        "checks": {
            "store": "ok",
            "entries": state.store.len().await,
            "ws_subscribers": state.ws_tx.receiver_count(),
        },
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::handlers::testing::{get, send};
    use crate::AppState;

    #[tokio::test]
    async fn test_health_reports_service() {
        let (status, body) = send(&AppState::for_tests(), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "wellness-hub-api");
    }

    #[tokio::test]
    async fn test_readyz_counts_entries() {
        let (status, body) = send(&AppState::for_tests(), get("/readyz")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["checks"]["entries"], 0);
    }
}
