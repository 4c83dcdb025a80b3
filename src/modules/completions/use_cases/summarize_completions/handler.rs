// Zero-filled window of daily totals ending today, plus per-project totals.
//
// Runs the same read, seed and aggregate flow as the daily listing.

use crate::modules::completions::core::window::{CompletionSummary, summarize};
use crate::modules::completions::use_cases::list_daily_completions::handler::{
    ApplicationError, ListDailyCompletionsHandler,
};
use std::sync::Arc;

pub const MAX_WINDOW_DAYS: u32 = 366;

pub struct SummarizeCompletionsHandler {
    daily: Arc<ListDailyCompletionsHandler>,
}

impl SummarizeCompletionsHandler {
    pub fn new(daily: Arc<ListDailyCompletionsHandler>) -> Self {
        Self { daily }
    }

    pub async fn handle(&self, days: u32) -> Result<CompletionSummary, ApplicationError> {
        let counts = self.daily.handle().await?;
        let today = self.daily.clock().today();
        Ok(summarize(&counts, today, days.clamp(1, MAX_WINDOW_DAYS)))
    }
}
