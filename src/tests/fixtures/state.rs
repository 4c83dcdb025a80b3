use crate::shared::core::clock::FixedClock;
use crate::shared::infrastructure::store::in_memory::InMemoryStore;
use crate::shell::state::AppState;
use chrono::NaiveDate;
use std::sync::Arc;

/// Every http and graphql test runs on 2024-03-14.
pub fn fixed_clock() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2024, 3, 14).unwrap())
}

pub fn make_test_state(store: Arc<InMemoryStore>) -> AppState {
    AppState::new(store, Arc::new(fixed_clock()))
}
