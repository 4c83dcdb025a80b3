// One task reaching "done" on a given calendar day.
//
// Rows in the log may carry a full timestamp in `completed_at`; only the
// `YYYY-MM-DD` prefix is kept. `task_id` may be null once its task is gone.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionEvent {
    pub project_id: String,
    #[serde(default)]
    pub task_id: Option<String>,
    #[serde(deserialize_with = "calendar_day")]
    pub completed_at: NaiveDate,
}

impl CompletionEvent {
    pub fn new(
        project_id: impl Into<String>,
        task_id: impl Into<String>,
        completed_at: NaiveDate,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            task_id: Some(task_id.into()),
            completed_at,
        }
    }
}

/// Parses the day a stored `completed_at` value falls on, ignoring any time
/// component after the date.
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    let prefix = raw.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

fn calendar_day<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_day(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("not a calendar day: {raw:?}")))
}
