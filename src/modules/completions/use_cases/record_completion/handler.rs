// Appends one completion to the log when a task is marked done.

use crate::modules::completions::core::completion_event::CompletionEvent;
use crate::modules::completions::core::ports::CompletionLog;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::store::StoreError;
use std::sync::Arc;

pub struct RecordCompletionHandler {
    log: Arc<dyn CompletionLog>,
    clock: Arc<dyn Clock>,
}

impl RecordCompletionHandler {
    pub fn new(log: Arc<dyn CompletionLog>, clock: Arc<dyn Clock>) -> Self {
        Self { log, clock }
    }

    /// Records that `task_id` reached done today.
    pub async fn handle(
        &self,
        project_id: &str,
        task_id: &str,
    ) -> Result<CompletionEvent, StoreError> {
        let event = CompletionEvent::new(project_id, task_id, self.clock.today());
        self.log.append(std::slice::from_ref(&event)).await?;
        tracing::debug!(project_id, task_id, day = %event.completed_at, "recorded completion");
        Ok(event)
    }
}
