use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json};
use lending_care::workflows::intake::{intake_router, IntakeService, RecordLedger};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_intake_routes<L>(service: Arc<IntakeService<L>>) -> axum::Router
where
    L: RecordLedger + 'static,
{
    intake_router(service)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/portal/links", get(portal_links))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Static outbound links carried over from the customer portal menu.
/// Opaque redirects with no logic behind them.
pub(crate) async fn portal_links() -> Json<serde_json::Value> {
    Json(json!({
        "apply_online": "https://online.lendingcare.in/signup/new-customer",
        "payment": "https://www.lendingcare.in/onlineservices/",
        "customer_login": "https://portal.lendingcare.in/customer/login",
        "deposits": "https://deposits.lendingcare.in/login",
        "document_upload": "https://online.lendingcare.in/docupload/",
    }))
}
