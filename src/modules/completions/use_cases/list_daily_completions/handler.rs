// Daily completion counts per project.
//
// Responsibilities
// - Check whether the completion log holds anything.
// - Seed fourteen days of demo completions when it does not.
// - Re-read the whole log and count completions per (day, project).
//
// Any store error aborts the remaining steps. A seed that was written before
// a failing re-read stays written.

use crate::modules::completions::core::aggregate::aggregate;
use crate::modules::completions::core::daily_count::DailyCount;
use crate::modules::completions::core::ports::CompletionLog;
use crate::modules::completions::core::seed::seed_events;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::store::StoreError;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct ListDailyCompletionsHandler {
    log: Arc<dyn CompletionLog>,
    clock: Arc<dyn Clock>,
    rng: Mutex<StdRng>,
}

impl ListDailyCompletionsHandler {
    pub fn new(log: Arc<dyn CompletionLog>, clock: Arc<dyn Clock>) -> Self {
        Self::with_rng(log, clock, StdRng::from_entropy())
    }

    pub fn with_rng(log: Arc<dyn CompletionLog>, clock: Arc<dyn Clock>, rng: StdRng) -> Self {
        Self {
            log,
            clock,
            rng: Mutex::new(rng),
        }
    }

    pub fn clock(&self) -> &dyn Clock {
        &*self.clock
    }

    pub async fn handle(&self) -> Result<Vec<DailyCount>, ApplicationError> {
        if !self.log.has_any().await? {
            self.seed().await?;
        }
        let events = self.log.read_all().await?;
        Ok(aggregate(&events))
    }

    async fn seed(&self) -> Result<(), ApplicationError> {
        let events = {
            let mut rng = self.rng.lock().await;
            seed_events(self.clock.today(), &mut *rng)
        };
        if events.is_empty() {
            return Ok(());
        }
        self.log.append(&events).await?;
        tracing::info!(count = events.len(), "seeded demo completions");
        Ok(())
    }
}
