use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::completions::core::daily_count::DailyCount;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlDailyCount {
    pub date: String,
    pub project_id: String,
    pub count: u64,
}

impl From<DailyCount> for GqlDailyCount {
    fn from(c: DailyCount) -> Self {
        Self {
            date: c.date.to_string(),
            project_id: c.project_id,
            count: c.count,
        }
    }
}

#[derive(Default)]
pub struct CompletionsQuery;

#[Object]
impl CompletionsQuery {
    async fn daily_completions(&self, context: &Context<'_>) -> GqlResult<Vec<GqlDailyCount>> {
        let state = context.data_unchecked::<AppState>();
        let counts = state.completions.handle().await?;
        Ok(counts.into_iter().map(Into::into).collect())
    }
}
