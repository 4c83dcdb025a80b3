// Shared test fixture for completion log entries.

use crate::modules::completions::core::completion_event::{CompletionEvent, parse_day};

/// Event on the day `raw_day` starts with. The task id is derived from the
/// inputs so two calls with the same arguments compare equal.
pub fn completion_event(project_id: &str, raw_day: &str) -> CompletionEvent {
    let day = parse_day(raw_day).unwrap_or_else(|| panic!("fixture day {raw_day:?}"));
    CompletionEvent::new(project_id, format!("task-{project_id}-{day}"), day)
}

#[cfg(test)]
mod completion_event_fixture_tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;

    #[rstest]
    fn it_should_keep_only_the_day() {
        let event = completion_event("A", "2024-01-01T12:00:00Z");
        assert_eq!(
            event.completed_at,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert_eq!(event, completion_event("A", "2024-01-01"));
    }
}
