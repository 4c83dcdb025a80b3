// What the completion statistics need from the outside world.
//
// The log is append-only from here: nothing in this module updates or
// deletes a completion.

use crate::modules::completions::core::completion_event::CompletionEvent;
use crate::shared::infrastructure::store::StoreError;
use async_trait::async_trait;

#[async_trait]
pub trait CompletionLog: Send + Sync {
    /// Whether at least one completion has been recorded.
    async fn has_any(&self) -> Result<bool, StoreError>;

    /// Every recorded completion, oldest day first.
    async fn read_all(&self) -> Result<Vec<CompletionEvent>, StoreError>;

    /// Appends all events in a single write.
    async fn append(&self, events: &[CompletionEvent]) -> Result<(), StoreError>;
}
