use crate::modules::completions::core::completion_event::CompletionEvent;
use crate::modules::completions::core::daily_count::DailyCount;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Counts completions per (day, project). One entry per distinct key;
/// entries come out sorted by day, then project id.
pub fn aggregate(events: &[CompletionEvent]) -> Vec<DailyCount> {
    let mut counts: BTreeMap<(NaiveDate, &str), u64> = BTreeMap::new();
    for event in events {
        *counts
            .entry((event.completed_at, event.project_id.as_str()))
            .or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|((date, project_id), count)| DailyCount {
            date,
            project_id: project_id.to_string(),
            count,
        })
        .collect()
}
