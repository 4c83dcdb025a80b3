use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::tasks::core::task::{Task, TaskStatus};
use crate::shell::state::AppState;

#[derive(async_graphql::Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlTaskStatus {
    Todo,
    Doing,
    Done,
}

impl From<TaskStatus> for GqlTaskStatus {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Todo => Self::Todo,
            TaskStatus::Doing => Self::Doing,
            TaskStatus::Done => Self::Done,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlTask {
    pub id: String,
    pub project_id: String,
    pub title: String,
    pub notes: Option<String>,
    pub status: GqlTaskStatus,
    pub priority: Option<i64>,
    pub due_date: Option<String>,
    pub created_at: Option<String>,
}

impl From<Task> for GqlTask {
    fn from(t: Task) -> Self {
        Self {
            id: t.id,
            project_id: t.project_id,
            title: t.title,
            notes: t.notes,
            status: t.status.into(),
            priority: t.priority,
            due_date: t.due_date.map(|d| d.to_string()),
            created_at: t.created_at,
        }
    }
}

#[derive(Default)]
pub struct TasksQuery;

#[Object]
impl TasksQuery {
    async fn project_tasks(
        &self,
        context: &Context<'_>,
        project_id: String,
    ) -> GqlResult<Vec<GqlTask>> {
        let state = context.data_unchecked::<AppState>();
        let tasks = state.tasks.list_for_project(&project_id).await?;
        Ok(tasks.into_iter().map(Into::into).collect())
    }
}
