// Uploads a small sheet through the router and reads it back from the dashboard.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::modules::attendance::core::calendar::WorkPolicy;
use crate::shell::http::router;
use crate::shell::state::AppState;

const SHEET: &str = "Employee Name,Date,In-Time,Out-Time\n\
                     Alice Smith,2024-01-01,10:00,18:30\n\
                     Alice Smith,02/01/2024,10:00 AM,2:00 PM\n\
                     Alice Smith,2024-01-03,,\n\
                     Alice Smith,2024-01-06,09:00,14:00\n\
                     ,2024-01-08,10:00,18:30\n\
                     Bob,2024-02-01,22:00,02:00\n";

const BOB_ON_LEAVE: &str = "Name,Date,In,Out\nBob,2024-02-01,,\n";
const BOB_AT_WORK: &str = "Name,Date,In,Out\nBob,2024-02-01,10:00,18:30\n";

fn app(upload_limit_bytes: usize) -> Router {
    let state = AppState::in_memory(WorkPolicy::default());
    router(state, upload_limit_bytes)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn upload(body: &str) -> Request<Body> {
    Request::post("/api/upload")
        .header("content-type", "text/csv")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn dashboard(query: &str) -> Request<Body> {
    get(&format!("/api/dashboard?{query}"))
}

#[tokio::test]
async fn it_should_serve_the_summary_of_an_uploaded_sheet() {
    let app = app(1024 * 1024);

    let (status, report) = send(&app, upload(SHEET)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["recordsProcessed"], 5);
    assert_eq!(report["employees"], 2);
    assert_eq!(report["errors"][0], "Row 6: Missing Employee Name");

    let query = "employeeName=Alice%20Smith&year=2024&month=1";
    let (status, summary) = send(&app, dashboard(query)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["totalExpectedHours"], 211.5);
    // 8.5 + 4 + 0 + 4 (Saturday capped at its expected hours)
    assert_eq!(summary["totalActualHours"], 16.5);
    assert_eq!(summary["leavesUsed"], 1);
    assert_eq!(summary["productivity"], 7.8);
    assert_eq!(summary["dailyBreakdown"][3]["dayOfWeek"], "Saturday");
    assert_eq!(summary["dailyBreakdown"][3]["workedHours"], 4.0);

    let (_, bob) = send(&app, dashboard("employeeName=Bob&year=2024&month=2")).await;
    assert_eq!(bob["totalExpectedHours"], 194.5);
    assert_eq!(bob["totalActualHours"], 4.0);

    let (_, employees) = send(&app, get("/api/dashboard/employees")).await;
    let expected = serde_json::json!(["Alice Smith", "Bob"]);
    assert_eq!(employees["employees"], expected);
}

#[tokio::test]
async fn it_should_replace_a_day_on_reupload() {
    let app = app(1024 * 1024);
    send(&app, upload(BOB_ON_LEAVE)).await;
    send(&app, upload(BOB_AT_WORK)).await;

    let (_, months) = send(&app, get("/api/dashboard/months/Bob")).await;
    assert_eq!(months["monthYearCombos"][0]["recordCount"], 1);

    let (_, summary) = send(&app, dashboard("employeeName=Bob&year=2024&month=2")).await;
    assert_eq!(summary["leavesUsed"], 0);
    assert_eq!(summary["totalActualHours"], 8.5);
}

#[tokio::test]
async fn it_should_reject_uploads_over_the_body_limit() {
    let response = app(16).oneshot(upload(SHEET)).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn it_should_report_health() {
    let (status, json) = send(&app(1024), get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "OK");
    assert_eq!(json["message"], "Server is running");
}

#[tokio::test]
async fn it_should_only_serve_routes_under_the_api_prefix() {
    for uri in ["/health", "/upload", "/dashboard/employees"] {
        let response = app(1024).oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

#[tokio::test]
async fn it_should_allow_cross_origin_requests() {
    let request = Request::get("/api/dashboard/employees")
        .header("origin", "http://localhost:3000")
        .body(Body::empty())
        .unwrap();

    let response = app(1024).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn it_should_answer_a_cors_preflight() {
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/upload")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();

    let response = app(1024).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert!(headers.contains_key("access-control-allow-methods"));
    assert_eq!(headers["access-control-allow-origin"], "*");
}
