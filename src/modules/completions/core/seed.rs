// Demo data for an empty completion log.
//
// Fourteen days ending today, oldest first, each with 0 to 2 completions
// attributed to the placeholder project.

use crate::modules::completions::core::completion_event::CompletionEvent;
use chrono::{Duration, NaiveDate};
use rand::Rng;
use uuid::Uuid;

pub const DEMO_PROJECT_ID: &str = "00000000-0000-0000-0000-000000000000";
pub const SEED_WINDOW_DAYS: i64 = 14;
pub const MAX_SEED_PER_DAY: u32 = 2;

pub fn seed_events<R: Rng>(today: NaiveDate, rng: &mut R) -> Vec<CompletionEvent> {
    let mut events = Vec::new();
    for offset in (0..SEED_WINDOW_DAYS).rev() {
        let day = today - Duration::days(offset);
        let count = rng.gen_range(0..=MAX_SEED_PER_DAY);
        events.extend(
            (0..count)
                .map(|_| CompletionEvent::new(DEMO_PROJECT_ID, Uuid::now_v7().to_string(), day)),
        );
    }
    events
}
