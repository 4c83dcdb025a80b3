use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::completions::core::window::DEFAULT_WINDOW_DAYS;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SummaryParams {
    pub days: Option<u32>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<SummaryParams>,
) -> impl IntoResponse {
    match state
        .summary
        .handle(params.days.unwrap_or(DEFAULT_WINDOW_DAYS))
        .await
    {
        Ok(summary) => Json(summary).into_response(),
        Err(error) => {
            tracing::error!(%error, "GET /completions/summary failed");
            (StatusCode::INTERNAL_SERVER_ERROR, error.to_string()).into_response()
        }
    }
}
