use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::attendance::use_cases::import_attendance::inbound::http as upload_http;
use crate::modules::attendance::use_cases::monthly_summary::inbound::http as dashboard_http;
use crate::shell::state::AppState;

async fn health() -> Json<Value> {
    Json(json!({ "status": "OK", "message": "Server is running" }))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/upload", post(upload_http::handle))
        .route("/dashboard", get(dashboard_http::handle))
        .route("/dashboard/employees", get(dashboard_http::list_employees))
        .route(
            "/dashboard/months/{employee_name}",
            get(dashboard_http::list_months),
        )
        .route("/health", get(health))
}

/// Every route lives under `/api`; the dashboard frontend calls it cross-origin.
pub fn router(state: AppState, upload_limit_bytes: usize) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .layer(DefaultBodyLimit::max(upload_limit_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
