use axum::{
    Extension, Router,
    routing::{delete, get},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::completions::use_cases::list_daily_completions::inbound::http as completions_http;
use crate::modules::completions::use_cases::summarize_completions::inbound::http as summary_http;
use crate::modules::projects::use_cases::manage_projects::inbound::http as projects_http;
use crate::modules::tasks::use_cases::manage_tasks::inbound::http as tasks_http;
use crate::shell::graphql::{self, build_schema};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    Router::new()
        .route("/completions", get(completions_http::handle))
        .route("/completions/summary", get(summary_http::handle))
        .route("/projects", get(projects_http::list).post(projects_http::create))
        .route(
            "/projects/{id}",
            delete(projects_http::delete).head(projects_http::exists),
        )
        .route(
            "/projects/{id}/tasks",
            get(tasks_http::list_for_project)
                .post(tasks_http::create)
                .delete(tasks_http::clear_done),
        )
        .route(
            "/tasks/{id}",
            get(tasks_http::get)
                .patch(tasks_http::update)
                .delete(tasks_http::delete),
        )
        .route("/gql", get(graphql::graphiql).post(graphql::graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
