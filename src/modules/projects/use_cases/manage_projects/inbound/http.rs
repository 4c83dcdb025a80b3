use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use crate::modules::projects::core::project::NewProject;
use crate::modules::projects::use_cases::manage_projects::handler::ProjectError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateProjectBody {
    pub name: String,
    pub color: Option<String>,
    pub owner: Option<String>,
}

fn failure(route: &str, error: ProjectError) -> axum::response::Response {
    match error {
        ProjectError::Invalid(reason) => (StatusCode::BAD_REQUEST, reason).into_response(),
        ProjectError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Not found", "id": id })),
        )
            .into_response(),
        ProjectError::Store(error) => {
            tracing::error!(%error, "{route} failed");
            (StatusCode::INTERNAL_SERVER_ERROR, error.to_string()).into_response()
        }
    }
}

pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    match state.projects.list().await {
        Ok(projects) => Json(projects).into_response(),
        Err(error) => failure("GET /projects", error),
    }
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateProjectBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state
        .projects
        .create(NewProject::new(body.name, body.color, body.owner))
        .await
    {
        Ok(project) => Json(project).into_response(),
        Err(error) => failure("POST /projects", error),
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.projects.delete(&id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => failure("DELETE /projects/{id}", error),
    }
}

pub async fn exists(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.projects.exists(&id).await {
        Ok(true) => StatusCode::OK,
        Ok(false) => StatusCode::NOT_FOUND,
        Err(error) => {
            tracing::error!(%error, "HEAD /projects/{{id}} failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
