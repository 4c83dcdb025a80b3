use async_graphql::{EmptyMutation, EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Extension;

use crate::modules::completions::use_cases::list_daily_completions::inbound::graphql::CompletionsQuery;
use crate::modules::projects::use_cases::manage_projects::inbound::graphql::ProjectsQuery;
use crate::modules::tasks::use_cases::manage_tasks::inbound::graphql::TasksQuery;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(CompletionsQuery, ProjectsQuery, TasksQuery);

pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), EmptyMutation, EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
