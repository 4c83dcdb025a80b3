// CompletionLog backed by the `task_completions` table.

use crate::modules::completions::core::completion_event::CompletionEvent;
use crate::modules::completions::core::ports::CompletionLog;
use crate::shared::infrastructure::store::{
    Direction, Select, StoreError, TableStore, from_row, to_row,
};
use async_trait::async_trait;
use std::sync::Arc;

pub const COMPLETIONS_TABLE: &str = "task_completions";

#[derive(Clone)]
pub struct StoreCompletionLog {
    store: Arc<dyn TableStore>,
}

impl StoreCompletionLog {
    pub fn new(store: Arc<dyn TableStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CompletionLog for StoreCompletionLog {
    async fn has_any(&self) -> Result<bool, StoreError> {
        let rows = self
            .store
            .select(COMPLETIONS_TABLE, &Select::all().columns(&["id"]).limit(1))
            .await?;
        Ok(!rows.is_empty())
    }

    async fn read_all(&self) -> Result<Vec<CompletionEvent>, StoreError> {
        let query = Select::all()
            .columns(&["project_id", "task_id", "completed_at"])
            .order_by("completed_at", Direction::Ascending);
        self.store
            .select(COMPLETIONS_TABLE, &query)
            .await?
            .into_iter()
            .map(from_row)
            .collect()
    }

    async fn append(&self, events: &[CompletionEvent]) -> Result<(), StoreError> {
        if events.is_empty() {
            return Ok(());
        }
        let rows = events.iter().map(to_row).collect::<Result<Vec<_>, _>>()?;
        self.store.insert(COMPLETIONS_TABLE, rows).await?;
        Ok(())
    }
}
