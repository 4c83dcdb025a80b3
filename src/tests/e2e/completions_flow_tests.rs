use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::completions::adapters::outbound::completion_log_store::COMPLETIONS_TABLE;
use crate::shared::infrastructure::store::in_memory::InMemoryStore;
use crate::shell::http::router;
use crate::tests::fixtures::state::{fixed_clock, make_test_state};

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = app.clone().oneshot(request.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or_default())
}

#[tokio::test]
async fn finishing_a_task_shows_up_in_daily_completions() {
    let store = Arc::new(InMemoryStore::new());
    let app = router(make_test_state(store.clone()));
    let today = fixed_clock().0.to_string();

    let (status, project) =
        send(&app, "POST", "/projects", Some(json!({ "name": "Inbox" }))).await;
    assert_eq!(status, StatusCode::OK);
    let project_id = project["id"].as_str().unwrap().to_string();

    let (status, task) = send(
        &app,
        "POST",
        &format!("/projects/{project_id}/tasks"),
        Some(json!({ "title": "Write docs" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let task_uri = format!("/tasks/{}", task["id"].as_str().unwrap());

    let (status, _) = send(&app, "PATCH", &task_uri, Some(json!({ "status": "done" }))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, counts) = send(&app, "GET", "/completions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        counts,
        json!([{ "date": today, "project_id": project_id, "count": 1 }])
    );
    assert_eq!(store.count(COMPLETIONS_TABLE).await, 1);

    let (status, summary) = send(&app, "GET", "/completions/summary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["today"], json!(1));
    assert_eq!(summary["yesterday"], json!(0));
    assert_eq!(summary["change"], json!(1));
    assert_eq!(
        summary["per_project"],
        json!([{ "project_id": project_id, "count": 1 }])
    );
}

#[tokio::test]
async fn clearing_done_tasks_keeps_their_completions() {
    let store = Arc::new(InMemoryStore::new());
    let app = router(make_test_state(store.clone()));

    let (_, task) = send(
        &app,
        "POST",
        "/projects/p-1/tasks",
        Some(json!({ "title": "Ship it" })),
    )
    .await;
    let task_uri = format!("/tasks/{}", task["id"].as_str().unwrap());
    send(&app, "PATCH", &task_uri, Some(json!({ "status": "done" }))).await;

    let (status, _) = send(&app, "DELETE", "/projects/p-1/tasks", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "GET", &task_uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, counts) = send(&app, "GET", "/completions", None).await;
    assert_eq!(counts[0]["project_id"], json!("p-1"));
    assert_eq!(counts[0]["count"], json!(1));
}

#[tokio::test]
async fn an_empty_log_is_seeded_once_and_then_read_back_unchanged() {
    let store = Arc::new(InMemoryStore::new());
    let app = router(make_test_state(store.clone()));

    let (status, first) = send(&app, "GET", "/completions", None).await;
    assert_eq!(status, StatusCode::OK);
    let seeded = store.count(COMPLETIONS_TABLE).await;

    let (_, second) = send(&app, "GET", "/completions", None).await;

    assert_eq!(first, second);
    assert_eq!(store.count(COMPLETIONS_TABLE).await, seeded);
    assert!(
        first
            .as_array()
            .unwrap()
            .iter()
            .all(|c| c["project_id"] == json!("00000000-0000-0000-0000-000000000000"))
    );
}

#[tokio::test]
async fn the_graphql_endpoint_lists_projects_and_their_tasks() {
    let app = router(make_test_state(Arc::new(InMemoryStore::new())));
    let (_, project) = send(&app, "POST", "/projects", Some(json!({ "name": "Inbox" }))).await;
    let project_id = project["id"].as_str().unwrap().to_string();
    send(
        &app,
        "POST",
        &format!("/projects/{project_id}/tasks"),
        Some(json!({ "title": "Write docs" })),
    )
    .await;

    let query = format!(
        r#"{{ projects {{ name }} projectTasks(projectId: "{project_id}") {{ title status }} }}"#
    );
    let (status, body) = send(&app, "POST", "/gql", Some(json!({ "query": query }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!({
            "projects": [{ "name": "Inbox" }],
            "projectTasks": [{ "title": "Write docs", "status": "TODO" }]
        })
    );
}
