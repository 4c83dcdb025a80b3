use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of completions a project had on one day. Derived on every read,
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub project_id: String,
    pub count: u64,
}
