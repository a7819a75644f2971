use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use crate::modules::attendance::use_cases::monthly_summary::handler::SummaryError;
use crate::modules::attendance::use_cases::monthly_summary::queries_port::MonthRecordCount;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardParams {
    pub employee_name: Option<String>,
    pub year: Option<String>,
    pub month: Option<String>,
}

#[derive(Serialize)]
pub struct EmployeesResponse {
    pub employees: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthsResponse {
    pub month_year_combos: Vec<MonthRecordCount>,
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn summary_error_response(error: SummaryError) -> Response {
    match error {
        SummaryError::InvalidQuery(_) => {
            error_response(StatusCode::BAD_REQUEST, "Invalid year or month")
        }
        SummaryError::Repository(reason) => {
            error!(%reason, "dashboard query failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch dashboard data",
            )
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> impl IntoResponse {
    let name = params.employee_name.filter(|name| !name.trim().is_empty());
    let (Some(employee_name), Some(year), Some(month)) = (name, params.year, params.month) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Missing required parameters: employeeName, year, month",
        );
    };
    let (Ok(year), Ok(month)) = (year.trim().parse::<i32>(), month.trim().parse::<u32>()) else {
        return error_response(StatusCode::BAD_REQUEST, "Invalid year or month");
    };

    match state
        .summary_handler
        .handle(&employee_name, year, month)
        .await
    {
        Ok(summary) => Json(summary).into_response(),
        Err(e) => summary_error_response(e),
    }
}

pub async fn list_employees(State(state): State<AppState>) -> impl IntoResponse {
    match state.summary_handler.list_employees().await {
        Ok(employees) => Json(EmployeesResponse { employees }).into_response(),
        Err(e) => summary_error_response(e),
    }
}

pub async fn list_months(
    State(state): State<AppState>,
    Path(employee_name): Path<String>,
) -> impl IntoResponse {
    match state.summary_handler.list_months(&employee_name).await {
        Ok(month_year_combos) => Json(MonthsResponse { month_year_combos }).into_response(),
        Err(e) => summary_error_response(e),
    }
}
