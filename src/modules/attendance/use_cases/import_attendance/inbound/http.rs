use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{error, info};

use crate::modules::attendance::adapters::inbound::csv_rows::rows_from_csv;
use crate::modules::attendance::use_cases::import_attendance::handler::ImportError;
use crate::modules::attendance::use_cases::import_attendance::raw_row::RawRow;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UploadRowsBody {
    pub rows: Vec<Map<String, Value>>,
}

#[derive(Serialize)]
pub struct UploadErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

fn bad_request(error: impl Into<String>, errors: Option<Vec<String>>) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(UploadErrorResponse {
            error: error.into(),
            errors,
        }),
    )
        .into_response()
}

fn decode_rows(headers: &HeaderMap, body: &[u8]) -> Result<Vec<RawRow>, String> {
    let is_csv = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("text/csv"));

    if is_csv {
        let text = std::str::from_utf8(body).map_err(|e| e.to_string())?;
        return rows_from_csv(text).map_err(|e| e.to_string());
    }

    let body: UploadRowsBody = serde_json::from_slice(body).map_err(|e| e.to_string())?;
    Ok(body
        .rows
        .into_iter()
        .map(|row| row.into_iter().collect())
        .collect())
}

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    if body.is_empty() {
        return bad_request("No file uploaded", None);
    }

    let rows = match decode_rows(&headers, &body) {
        Ok(rows) => rows,
        Err(reason) => {
            info!(%reason, "rejected unreadable upload");
            return bad_request(format!("Failed to parse upload: {reason}"), None);
        }
    };

    match state.import_handler.handle(rows).await {
        Ok(report) => Json(report).into_response(),
        Err(ImportError::NoValidRecords { errors }) => {
            bad_request("No valid records found in upload", Some(errors))
        }
        Err(e @ ImportError::Repository(_)) => {
            error!(error = %e, "failed to store attendance records");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(UploadErrorResponse {
                    error: "Failed to store attendance records".into(),
                    errors: None,
                }),
            )
                .into_response()
        }
    }
}
