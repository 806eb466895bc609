use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::AppState;

use super::models::{AnalysisRequest, AnalysisResponse, ErrorResponse};

/// `POST /analyze-code`. Both fields empty is the only 400; every other
/// outcome, including upstream failures, is a 200 with the envelope.
pub async fn analyze_code(
    State(state): State<AppState>,
    Json(payload): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResponse>, (StatusCode, Json<ErrorResponse>)> {
    let query = payload.query.as_deref().unwrap_or("");
    if payload.code.trim().is_empty() && query.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No code or query provided".to_string(),
            }),
        ));
    }

    Ok(Json(state.assistant.analyze(&payload.code, query).await))
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "route not found".to_string(),
        }),
    )
        .into_response()
}
