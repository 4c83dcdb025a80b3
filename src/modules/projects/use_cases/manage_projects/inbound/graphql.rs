use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::projects::core::project::Project;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlProject {
    pub id: String,
    pub name: String,
    pub color: String,
    pub owner: Option<String>,
    pub created_at: Option<String>,
}

impl From<Project> for GqlProject {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            name: p.name,
            color: p.color,
            owner: p.owner,
            created_at: p.created_at,
        }
    }
}

#[derive(Default)]
pub struct ProjectsQuery;

#[Object]
impl ProjectsQuery {
    async fn projects(&self, context: &Context<'_>) -> GqlResult<Vec<GqlProject>> {
        let state = context.data_unchecked::<AppState>();
        let projects = state.projects.list().await?;
        Ok(projects.into_iter().map(Into::into).collect())
    }
}
