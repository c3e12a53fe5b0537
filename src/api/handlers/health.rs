//! Handler for the health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: store reachable
/// - **503 Service Unavailable**: store ping failed
pub async fn health_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let store_ok = state.store.health_check().await;

    let (status_code, status, store_check) = if store_ok {
        (
            StatusCode::OK,
            "healthy",
            CheckStatus {
                status: "ok",
                message: "Store reachable",
            },
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            "degraded",
            CheckStatus {
                status: "error",
                message: "Store unreachable",
            },
        )
    };

    (
        status_code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks: HealthChecks { store: store_check },
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use crate::application::services::{LinkService, RateLimitService};
    use crate::domain::store::{KeyValueStore, MockKeyValueStore};

    fn state_with_store(store: Arc<dyn KeyValueStore>) -> AppState {
        AppState {
            link_service: Arc::new(LinkService::new(store.clone())),
            rate_limiter: Arc::new(RateLimitService::new(
                store.clone(),
                100,
                Duration::from_secs(3600),
            )),
            store,
            base_url: "https://lmctfy.ai".to_string(),
        }
    }

    #[tokio::test]
    async fn test_healthy_when_store_reachable() {
        let mut mock_store = MockKeyValueStore::new();
        mock_store.expect_health_check().returning(|| true);

        let (status, Json(body)) =
            health_handler(State(state_with_store(Arc::new(mock_store)))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status, "healthy");
        assert_eq!(body.checks.store.status, "ok");
    }

    #[tokio::test]
    async fn test_degraded_when_store_unreachable() {
        let mut mock_store = MockKeyValueStore::new();
        mock_store.expect_health_check().returning(|| false);

        let (status, Json(body)) =
            health_handler(State(state_with_store(Arc::new(mock_store)))).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.status, "degraded");
        assert_eq!(body.checks.store.status, "error");
    }
}
