use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.completions.handle().await {
        Ok(counts) => Json(counts).into_response(),
        Err(error) => {
            tracing::error!(%error, "GET /completions failed");
            (StatusCode::INTERNAL_SERVER_ERROR, error.to_string()).into_response()
        }
    }
}
