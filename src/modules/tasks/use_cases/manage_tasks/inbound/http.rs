use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use crate::modules::tasks::core::task::{NewTask, TaskPatch};
use crate::modules::tasks::use_cases::manage_tasks::handler::TaskError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateTaskBody {
    pub title: String,
    pub notes: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<i64>,
}

// Project-scoped routes answer `{ error: <code>, details }`, single-task
// routes answer `{ error: <message> }`.
fn project_failure(code: &str, error: TaskError) -> Response {
    match error {
        TaskError::Invalid(reason) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": code, "details": reason })),
        )
            .into_response(),
        TaskError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Not found", "id": id })),
        )
            .into_response(),
        TaskError::Store(error) => {
            tracing::error!(%error, code, "project task request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": code, "details": error.to_string() })),
            )
                .into_response()
        }
    }
}

fn task_failure(error: TaskError) -> Response {
    match error {
        TaskError::NotFound(_) => {
            (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" }))).into_response()
        }
        TaskError::Invalid(reason) => {
            (StatusCode::BAD_REQUEST, Json(json!({ "error": reason }))).into_response()
        }
        TaskError::Store(error) => {
            tracing::error!(%error, "task request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": error.to_string() })),
            )
                .into_response()
        }
    }
}

pub async fn list_for_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> impl IntoResponse {
    match state.tasks.list_for_project(&project_id).await {
        Ok(tasks) => Json(tasks).into_response(),
        Err(error) => project_failure("failed_to_fetch_tasks", error),
    }
}

pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    body: Result<Json<CreateTaskBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let task = NewTask {
        notes: body.notes,
        due_date: body.due_date,
        priority: body.priority,
        ..NewTask::new(project_id, body.title)
    };
    match state.tasks.create(task).await {
        Ok(task) => Json(task).into_response(),
        Err(error) => project_failure("failed_to_create_task", error),
    }
}

pub async fn clear_done(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> impl IntoResponse {
    match state.tasks.clear_done(&project_id).await {
        Ok(_) => Json(json!({ "ok": true })).into_response(),
        Err(error) => project_failure("failed_to_clear_done", error),
    }
}

pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.tasks.get(&id).await {
        Ok(task) => Json(task).into_response(),
        Err(error) => task_failure(error),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<TaskPatch>, JsonRejection>,
) -> impl IntoResponse {
    let Json(patch) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.tasks.update(&id, patch).await {
        Ok(task) => Json(task).into_response(),
        Err(error) => task_failure(error),
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.tasks.delete(&id).await {
        Ok(()) => Json(json!({ "ok": true })).into_response(),
        Err(error) => task_failure(error),
    }
}
