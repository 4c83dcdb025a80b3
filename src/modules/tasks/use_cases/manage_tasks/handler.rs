// Task CRUD on the `tasks` table.
//
// Responsibilities
// - List, create and clear the done tasks of one project.
// - Read, patch and delete single tasks.
// - Record a completion when a patch moves a task into done.
//
// Deleting tasks never touches the completion log.

use crate::modules::completions::use_cases::record_completion::handler::RecordCompletionHandler;
use crate::modules::tasks::core::task::{NewTask, Task, TaskPatch, TaskStatus};
use crate::shared::infrastructure::store::{
    Direction, Filter, Row, Select, StoreError, TableStore, from_row, to_row,
};
use std::sync::Arc;
use thiserror::Error;

pub const TASKS_TABLE: &str = "tasks";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("invalid task: {0}")]
    Invalid(String),

    #[error("task not found: {0}")]
    NotFound(String),
}

pub struct TasksHandler {
    store: Arc<dyn TableStore>,
    completions: Arc<RecordCompletionHandler>,
}

fn by_id(id: &str) -> [Filter; 1] {
    [Filter::eq("id", id)]
}

fn into_tasks(rows: Vec<Row>) -> Result<Vec<Task>, TaskError> {
    Ok(rows
        .into_iter()
        .map(from_row)
        .collect::<Result<Vec<_>, _>>()?)
}

impl TasksHandler {
    pub fn new(store: Arc<dyn TableStore>, completions: Arc<RecordCompletionHandler>) -> Self {
        Self { store, completions }
    }

    /// Tasks of one project, oldest first.
    pub async fn list_for_project(&self, project_id: &str) -> Result<Vec<Task>, TaskError> {
        let query = Select::all()
            .filter(Filter::eq("project_id", project_id))
            .order_by("created_at", Direction::Ascending);
        into_tasks(self.store.select(TASKS_TABLE, &query).await?)
    }

    pub async fn create(&self, task: NewTask) -> Result<Task, TaskError> {
        if task.title.trim().is_empty() {
            return Err(TaskError::Invalid("title is required".into()));
        }
        let inserted = self.store.insert(TASKS_TABLE, vec![to_row(&task)?]).await?;
        into_tasks(inserted)?
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::Malformed("insert returned no task row".into()).into())
    }

    /// Removes the project's done tasks and returns how many went.
    pub async fn clear_done(&self, project_id: &str) -> Result<usize, TaskError> {
        let removed = self
            .store
            .delete(
                TASKS_TABLE,
                &[
                    Filter::eq("project_id", project_id),
                    Filter::eq("status", "done"),
                ],
            )
            .await?;
        tracing::info!(project_id, removed = removed.len(), "cleared done tasks");
        Ok(removed.len())
    }

    pub async fn get(&self, id: &str) -> Result<Task, TaskError> {
        let rows = self
            .store
            .select(TASKS_TABLE, &Select::all().filter(Filter::eq("id", id)).limit(1))
            .await?;
        into_tasks(rows)?
            .into_iter()
            .next()
            .ok_or_else(|| TaskError::NotFound(id.to_string()))
    }

    pub async fn update(&self, id: &str, patch: TaskPatch) -> Result<Task, TaskError> {
        let before = self.get(id).await?;
        if patch.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(TaskError::Invalid("title must not be blank".into()));
        }
        if patch.is_empty() {
            return Ok(before);
        }

        // Record first: a failed append must leave the task short of done.
        if before.status != TaskStatus::Done && patch.status == Some(TaskStatus::Done) {
            self.completions
                .handle(&before.project_id, &before.id)
                .await?;
        }

        let updated = self
            .store
            .update(TASKS_TABLE, &by_id(id), to_row(&patch)?)
            .await?;
        into_tasks(updated)?
            .into_iter()
            .next()
            .ok_or_else(|| TaskError::NotFound(id.to_string()))
    }

    pub async fn delete(&self, id: &str) -> Result<(), TaskError> {
        self.store.delete(TASKS_TABLE, &by_id(id)).await?;
        Ok(())
    }
}
