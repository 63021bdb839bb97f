use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use clearance_catalog::CatalogProvider;
use serde::Serialize;

#[derive(Clone)]
pub struct HealthState {
    catalog: Arc<dyn CatalogProvider>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub catalog: HealthCheck,
    pub item_count: usize,
    pub checked_at: String,
}

pub fn router(catalog: Arc<dyn CatalogProvider>) -> Router {
    Router::new().route("/health", get(health)).with_state(HealthState { catalog })
}

pub async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let (catalog, item_count) = catalog_check(state.catalog.as_ref()).await;
    let ready = catalog.status == "ready";

    let payload = HealthResponse {
        status: if ready { "ready" } else { "degraded" },
        service: HealthCheck {
            status: "ready",
            detail: "clearance-server runtime initialized".to_string(),
        },
        catalog,
        item_count,
        checked_at: Utc::now().to_rfc3339(),
    };

    let status_code = if ready { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status_code, Json(payload))
}

async fn catalog_check(catalog: &dyn CatalogProvider) -> (HealthCheck, usize) {
    match catalog.list_items().await {
        Ok(items) if items.is_empty() => (
            HealthCheck { status: "degraded", detail: "catalog has no items".to_string() },
            0,
        ),
        Ok(items) => (
            HealthCheck { status: "ready", detail: format!("{} items loaded", items.len()) },
            items.len(),
        ),
        Err(error) => (
            HealthCheck { status: "degraded", detail: format!("catalog listing failed: {error}") },
            0,
        ),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{extract::State, http::StatusCode, Json};
    use clearance_catalog::{CatalogError, CatalogProvider, StaticCatalog};
    use clearance_core::domain::item::{ClearanceItem, ItemId};

    use crate::health::{health, HealthState};

    struct OfflineCatalog;

    #[async_trait]
    impl CatalogProvider for OfflineCatalog {
        async fn list_items(&self) -> Result<Vec<ClearanceItem>, CatalogError> {
            Err(CatalogError::Unavailable("upstream offline".to_string()))
        }

        async fn find_by_id(&self, _id: &ItemId) -> Result<Option<ClearanceItem>, CatalogError> {
            Err(CatalogError::Unavailable("upstream offline".to_string()))
        }
    }

    #[tokio::test]
    async fn health_returns_ready_when_catalog_is_loaded() {
        let catalog = StaticCatalog::seeded().expect("seed catalog");

        let (status, Json(payload)) = health(State(HealthState { catalog: Arc::new(catalog) })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.status, "ready");
        assert_eq!(payload.catalog.status, "ready");
        assert_eq!(payload.item_count, 75);
    }

    #[tokio::test]
    async fn health_returns_service_unavailable_when_catalog_fails() {
        let (status, Json(payload)) =
            health(State(HealthState { catalog: Arc::new(OfflineCatalog) })).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(payload.status, "degraded");
        assert_eq!(payload.catalog.status, "degraded");
        assert_eq!(payload.service.status, "ready");
    }

    #[tokio::test]
    async fn empty_catalog_is_degraded() {
        let catalog = StaticCatalog::new(Vec::new()).expect("empty catalog");

        let (status, Json(payload)) = health(State(HealthState { catalog: Arc::new(catalog) })).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(payload.item_count, 0);
    }
}
