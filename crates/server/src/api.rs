//! Popup HTTP API.
//!
//! Endpoints:
//! - `GET  /`                          service banner
//! - `POST /api/popup`                 popup decision for one page view
//! - `GET  /api/clearance-items`       full catalog
//! - `GET  /api/clearance-items/{id}`  single catalog item
//! - `POST /api/track-interaction`     record a client interaction
//! - `GET  /api/analytics/summary`     dashboard figures

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use clearance_catalog::{CatalogProvider, InteractionEvent, InteractionLog};
use clearance_core::domain::item::{ClearanceItem, ItemId};
use clearance_core::domain::profile::UserProfile;
use clearance_core::domain::recommendation::PopupDecision;
use clearance_core::domain::session::SessionContext;
use clearance_core::engine::ClearanceEngine;
use clearance_core::errors::{ApplicationError, InterfaceError};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct ApiState {
    pub engine: Arc<ClearanceEngine>,
    pub catalog: Arc<dyn CatalogProvider>,
    pub interactions: Arc<dyn InteractionLog>,
}

// ---------------------------------------------------------------------------
// Request / Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct PopupRequest {
    pub user_profile: UserProfile,
    pub current_page: String,
    #[serde(default)]
    pub target_category: Option<String>,
    #[serde(default)]
    pub session_data: Map<String, Value>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PopupResponse {
    pub show_popup: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ClearanceItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentages: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency_messages: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sustainability_messages: Option<Vec<String>>,
    #[serde(default)]
    pub timer_seconds: u32,
}

impl From<PopupDecision> for PopupResponse {
    fn from(decision: PopupDecision) -> Self {
        match decision.into_recommendation() {
            Some(recommendation) => Self {
                show_popup: true,
                items: Some(recommendation.items),
                discount_percentages: Some(recommendation.discount_percentages),
                urgency_messages: Some(recommendation.urgency_messages),
                sustainability_messages: Some(recommendation.sustainability_messages),
                timer_seconds: recommendation.timer_seconds,
            },
            None => Self::default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub detail: String,
    pub correlation_id: String,
}

/// Boundary error: an [`InterfaceError`] rendered as a JSON response.
#[derive(Debug)]
pub struct ApiError(InterfaceError);

impl ApiError {
    fn from_application(error: ApplicationError, correlation_id: &str) -> Self {
        Self(error.into_interface(correlation_id))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            InterfaceError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            InterfaceError::NotFound { .. } => StatusCode::NOT_FOUND,
            InterfaceError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            InterfaceError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(
                event_name = "api.request.failed",
                correlation_id = %self.0.correlation_id(),
                status = status.as_u16(),
                error = %self.0,
                "request failed"
            );
        }

        let body = ErrorBody {
            error: self.0.user_message().to_string(),
            detail: self.0.message().to_string(),
            correlation_id: self.0.correlation_id().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn router(state: ApiState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/popup", post(popup))
        .route("/api/clearance-items", get(list_items))
        .route("/api/clearance-items/{item_id}", get(get_item))
        .route("/api/track-interaction", post(track_interaction))
        .route("/api/analytics/summary", get(analytics_summary))
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(event_name = "system.cors.invalid_origin", origin = %origin, "skipping origin");
                None
            }
        })
        .collect();

    CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn root() -> Json<Value> {
    Json(json!({ "message": "Smart Clearance Pop-ups API", "status": "running" }))
}

async fn popup(
    State(state): State<ApiState>,
    body: Result<Json<PopupRequest>, JsonRejection>,
) -> Result<Json<PopupResponse>, ApiError> {
    let correlation_id = new_correlation_id();
    let Json(request) = body.map_err(|rejection| {
        ApiError::from_application(
            ApplicationError::Validation(rejection.body_text()),
            &correlation_id,
        )
    })?;

    info!(
        event_name = "popup.request.received",
        correlation_id = %correlation_id,
        user_id = %request.user_profile.user_id,
        current_page = %request.current_page,
        target_category = ?request.target_category,
        browsing_history = ?request.user_profile.browsing_history,
        "popup request received"
    );

    let shown_items = shown_popups(&request.session_data)
        .map_err(|error| ApiError::from_application(error, &correlation_id))?;

    let mut session = SessionContext::new(request.current_page).with_shown(shown_items);
    if let Some(category) = request.target_category {
        session = session.with_target_category(category);
    }

    let items = state
        .catalog
        .list_items()
        .await
        .map_err(|error| ApiError::from_application(error.into(), &correlation_id))?;

    let decision = state
        .engine
        .recommend(&items, &request.user_profile, &session)
        .map_err(|error| ApiError::from_application(error, &correlation_id))?;

    match &decision {
        PopupDecision::Suppressed { reason } => debug!(
            event_name = "popup.gate.suppressed",
            correlation_id = %correlation_id,
            reason = ?reason,
            "popup not shown"
        ),
        PopupDecision::NoCandidates => info!(
            event_name = "popup.declined.no_candidates",
            correlation_id = %correlation_id,
            "no clearance items available"
        ),
        PopupDecision::Shown(recommendation) => info!(
            event_name = "popup.selection.completed",
            correlation_id = %correlation_id,
            items = ?recommendation.items.iter().map(|item| item.id.as_str()).collect::<Vec<_>>(),
            discounts = ?recommendation.discount_percentages,
            timer_seconds = recommendation.timer_seconds,
            "popup response created"
        ),
    }

    Ok(Json(PopupResponse::from(decision)))
}

/// Reads `session_data.shown_popups`. Missing or null means nothing shown yet.
fn shown_popups(session_data: &Map<String, Value>) -> Result<Vec<ItemId>, ApplicationError> {
    match session_data.get("shown_popups") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(entries)) => entries
            .iter()
            .map(|entry| {
                entry.as_str().map(ItemId::new).ok_or_else(|| {
                    ApplicationError::Validation(
                        "session_data.shown_popups entries must be item id strings".to_string(),
                    )
                })
            })
            .collect(),
        Some(_) => Err(ApplicationError::Validation(
            "session_data.shown_popups must be a list".to_string(),
        )),
    }
}

async fn list_items(State(state): State<ApiState>) -> Result<Json<Vec<ClearanceItem>>, ApiError> {
    let correlation_id = new_correlation_id();
    let items = state
        .catalog
        .list_items()
        .await
        .map_err(|error| ApiError::from_application(error.into(), &correlation_id))?;
    Ok(Json(items))
}

async fn get_item(
    Path(item_id): Path<String>,
    State(state): State<ApiState>,
) -> Result<Json<ClearanceItem>, ApiError> {
    let correlation_id = new_correlation_id();
    let found = state
        .catalog
        .find_by_id(&ItemId::new(item_id.as_str()))
        .await
        .map_err(|error| ApiError::from_application(error.into(), &correlation_id))?;

    match found {
        Some(item) => Ok(Json(item)),
        None => {
            warn!(
                event_name = "catalog.item.not_found",
                correlation_id = %correlation_id,
                item_id = %item_id,
                "clearance item not found"
            );
            Err(ApiError::from_application(
                ApplicationError::NotFound { resource: "clearance item", id: item_id },
                &correlation_id,
            ))
        }
    }
}

async fn track_interaction(
    State(state): State<ApiState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let correlation_id = new_correlation_id();
    let Json(payload) = body.map_err(|rejection| {
        ApiError::from_application(
            ApplicationError::Validation(rejection.body_text()),
            &correlation_id,
        )
    })?;

    if !payload.is_object() {
        return Err(ApiError::from_application(
            ApplicationError::Validation("interaction payload must be a JSON object".to_string()),
            &correlation_id,
        ));
    }

    let event = InteractionEvent::from_payload(payload);
    info!(
        event_name = "interaction.tracked",
        correlation_id = %correlation_id,
        interaction_id = %event.id,
        user_id = ?event.user_id,
        action = ?event.action,
        "interaction tracked"
    );
    state
        .interactions
        .record(event)
        .await
        .map_err(|error| ApiError::from_application(error.into(), &correlation_id))?;

    Ok(Json(json!({ "status": "success", "message": "Interaction tracked" })))
}

async fn analytics_summary() -> Json<Value> {
    Json(json!({
        "total_popups_shown": 1247,
        "conversion_rate": 0.23,
        "average_discount": 35,
        "items_saved_from_waste": 89,
        "revenue_generated": 15678.45,
        "top_categories": [
            { "category": "electronics", "conversions": 45 },
            { "category": "clothing", "conversions": 38 },
            { "category": "home", "conversions": 29 }
        ]
    }))
}

fn new_correlation_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use clearance_catalog::{
        CatalogError, CatalogProvider, InMemoryInteractionLog, InteractionLog, StaticCatalog,
    };
    use clearance_core::config::EngineConfig;
    use clearance_core::domain::item::{Category, ClearanceItem, ItemId};
    use clearance_core::engine::ClearanceEngine;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::{router, ApiState};

    const ORIGIN: &str = "http://localhost:5173";

    struct FixedCatalog(Vec<ClearanceItem>);

    #[async_trait]
    impl CatalogProvider for FixedCatalog {
        async fn list_items(&self) -> Result<Vec<ClearanceItem>, CatalogError> {
            Ok(self.0.clone())
        }

        async fn find_by_id(&self, id: &ItemId) -> Result<Option<ClearanceItem>, CatalogError> {
            Ok(self.0.iter().find(|item| &item.id == id).cloned())
        }
    }

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

    fn engine() -> Arc<ClearanceEngine> {
        Arc::new(ClearanceEngine::new(EngineConfig {
            rng_seed: Some(2024),
            ..EngineConfig::default()
        }))
    }

    fn app_with(catalog: Arc<dyn CatalogProvider>, log: Arc<InMemoryInteractionLog>) -> Router {
        let state = ApiState { engine: engine(), catalog, interactions: log };
        router(state, &[ORIGIN.to_string()])
    }

    fn app() -> Router {
        let catalog = StaticCatalog::seeded().expect("seed catalog");
        app_with(Arc::new(catalog), Arc::new(InMemoryInteractionLog::default()))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.expect("router is infallible");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).expect("request")
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        post_raw(uri, body.to_string())
    }

    fn post_raw(uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .expect("request")
    }

    fn popup_body(page: &str, target: Option<&str>, shown: Value) -> Value {
        json!({
            "user_profile": {
                "user_id": "user123",
                "browsing_history": ["electronics", "home"],
                "purchase_history": ["electronics"]
            },
            "current_page": page,
            "target_category": target,
            "session_data": { "shown_popups": shown }
        })
    }

    /// Retries until the probabilistic gate lets the popup through.
    async fn shown_popup(app: &Router, body: &Value) -> Value {
        for _ in 0..100 {
            let (status, payload) = send(app, post_json("/api/popup", body)).await;
            assert_eq!(status, StatusCode::OK);
            if payload["show_popup"] == true {
                return payload;
            }
        }
        panic!("popup gate never opened");
    }

    #[tokio::test]
    async fn root_reports_running() {
        let (status, body) = send(&app(), get("/")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "running");
    }

    #[tokio::test]
    async fn catalog_endpoints_list_and_fetch_items() {
        let app = app();

        let (status, items) = send(&app, get("/api/clearance-items")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(items.as_array().map(Vec::len), Some(75));
        assert_eq!(items[0]["id"], "e1");

        let (status, lamp) = send(&app, get("/api/clearance-items/o1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(lamp["name"], "LED Desk Lamp");
        assert_eq!(lamp["category"], "office");
    }

    #[tokio::test]
    async fn missing_item_is_not_found_with_correlation_id() {
        let (status, body) = send(&app(), get("/api/clearance-items/zz9")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "The requested resource was not found.");
        assert!(body["detail"].as_str().is_some_and(|detail| detail.contains("zz9")));
        assert!(body["correlation_id"].as_str().is_some_and(|id| !id.is_empty()));
    }

    #[tokio::test]
    async fn blocked_page_never_shows_popup() {
        let app = app();

        for page in ["checkout", "cart", "payment"] {
            let (status, body) =
                send(&app, post_json("/api/popup", &popup_body(page, None, json!([])))).await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["show_popup"], false);
            assert_eq!(body["timer_seconds"], 0);
            assert!(body.get("items").is_none());
        }
    }

    #[tokio::test]
    async fn shown_popup_carries_parallel_metadata() {
        let app = app();
        let body = shown_popup(&app, &popup_body("home", None, json!([]))).await;

        let items = body["items"].as_array().expect("items array");
        assert_eq!(items.len(), 1);
        assert_eq!(body["discount_percentages"].as_array().map(Vec::len), Some(1));
        assert_eq!(body["urgency_messages"].as_array().map(Vec::len), Some(1));
        assert_eq!(body["sustainability_messages"].as_array().map(Vec::len), Some(1));

        let discount = body["discount_percentages"][0].as_u64().expect("discount");
        assert!(discount <= 70);
        let timer = body["timer_seconds"].as_u64().expect("timer");
        assert!((30..=180).contains(&timer));
    }

    #[tokio::test]
    async fn target_category_and_shown_list_are_honoured() {
        let app = app();
        let shown = json!(["o1", "o2", "o3"]);
        let body = shown_popup(&app, &popup_body("product", Some("office"), shown)).await;

        let item = &body["items"][0];
        assert_eq!(item["category"], "office");
        assert!(!["o1", "o2", "o3"].contains(&item["id"].as_str().unwrap_or_default()));
    }

    #[tokio::test]
    async fn unknown_target_category_declines_popup() {
        let app = app();

        for _ in 0..20 {
            let (status, body) = send(
                &app,
                post_json("/api/popup", &popup_body("home", Some("garden"), json!([]))),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["show_popup"], false);
        }
    }

    #[tokio::test]
    async fn non_list_shown_popups_is_bad_request() {
        let (status, body) = send(
            &app(),
            post_json("/api/popup", &popup_body("home", None, json!("o1"))),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].as_str().is_some_and(|detail| detail.contains("shown_popups")));
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let app = app();

        let (status, body) = send(&app, post_raw("/api/popup", "{not json".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "The request could not be processed. Check inputs and try again.");

        let missing_page = json!({ "user_profile": { "user_id": "u" } });
        let (status, _) = send(&app, post_json("/api/popup", &missing_page)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn invalid_catalog_item_is_internal_error() {
        let broken = ClearanceItem {
            id: ItemId::new("bad"),
            name: "Broken".to_string(),
            original_price: 10.0,
            current_price: 25.0,
            category: Category::Home,
            stock_count: 1,
            days_until_removal: 1,
            urgency_score: 0.9,
            image_url: None,
            description: None,
        };
        let app = app_with(
            Arc::new(FixedCatalog(vec![broken])),
            Arc::new(InMemoryInteractionLog::default()),
        );

        let mut saw_failure = false;
        for _ in 0..50 {
            let (status, body) =
                send(&app, post_json("/api/popup", &popup_body("home", None, json!([])))).await;
            if status == StatusCode::INTERNAL_SERVER_ERROR {
                assert_eq!(body["error"], "An unexpected internal error occurred.");
                saw_failure = true;
                break;
            }
            assert_eq!(body["show_popup"], false);
        }
        assert!(saw_failure);
    }

    #[tokio::test]
    async fn catalog_outage_is_service_unavailable() {
        let app = app_with(Arc::new(OfflineCatalog), Arc::new(InMemoryInteractionLog::default()));

        let (status, body) = send(&app, get("/api/clearance-items")).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body["correlation_id"].as_str().is_some());
    }

    #[tokio::test]
    async fn track_interaction_records_event() {
        let log = Arc::new(InMemoryInteractionLog::default());
        let catalog = StaticCatalog::seeded().expect("seed catalog");
        let app = app_with(Arc::new(catalog), log.clone());

        let payload = json!({ "user_id": "user123", "action": "popup_clicked", "item_id": "o1" });
        let (status, body) = send(&app, post_json("/api/track-interaction", &payload)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "success", "message": "Interaction tracked" }));

        let recorded = log.recent(10).await.expect("recent events");
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].action.as_deref(), Some("popup_clicked"));
    }

    #[tokio::test]
    async fn track_interaction_rejects_non_objects() {
        let (status, _) = send(&app(), post_json("/api/track-interaction", &json!([1, 2]))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn analytics_summary_returns_dashboard_figures() {
        let (status, body) = send(&app(), get("/api/analytics/summary")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_popups_shown"], 1247);
        assert_eq!(body["top_categories"].as_array().map(Vec::len), Some(3));
    }

    #[tokio::test]
    async fn cors_allows_configured_origin() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/popup")
            .header(header::ORIGIN, ORIGIN)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .expect("request");

        let response = app().oneshot(request).await.expect("router is infallible");

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).map(|v| v.as_bytes()),
            Some(ORIGIN.as_bytes())
        );
    }
}
