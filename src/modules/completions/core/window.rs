// Fixed-width daily series for the stats view.
//
// Days without completions appear with a zero total, so the series always
// holds exactly `days` entries ending today.

use crate::modules::completions::core::daily_count::DailyCount;
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::collections::HashMap;

pub const DEFAULT_WINDOW_DAYS: u32 = 14;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayTotal {
    pub date: NaiveDate,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectTotal {
    pub project_id: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionSummary {
    pub days: Vec<DayTotal>,
    pub total: u64,
    pub today: u64,
    pub yesterday: u64,
    pub change: i64,
    pub per_project: Vec<ProjectTotal>,
}

pub fn daily_totals(counts: &[DailyCount], today: NaiveDate, days: u32) -> Vec<DayTotal> {
    let mut by_date: HashMap<NaiveDate, u64> = HashMap::new();
    for count in counts {
        *by_date.entry(count.date).or_insert(0) += count.count;
    }

    (0..i64::from(days))
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            DayTotal {
                date,
                total: by_date.get(&date).copied().unwrap_or(0),
            }
        })
        .collect()
}

/// Per-project totals over every count given, busiest project first.
pub fn project_totals(counts: &[DailyCount]) -> Vec<ProjectTotal> {
    let mut by_project: HashMap<&str, u64> = HashMap::new();
    for count in counts {
        *by_project.entry(count.project_id.as_str()).or_insert(0) += count.count;
    }

    let mut totals: Vec<ProjectTotal> = by_project
        .into_iter()
        .map(|(project_id, count)| ProjectTotal {
            project_id: project_id.to_string(),
            count,
        })
        .collect();
    totals.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.project_id.cmp(&b.project_id)));
    totals
}

pub fn summarize(counts: &[DailyCount], today: NaiveDate, days: u32) -> CompletionSummary {
    let series = daily_totals(counts, today, days);
    let total = series.iter().map(|d| d.total).sum();
    let today_total = series.last().map_or(0, |d| d.total);
    let yesterday_total = series.iter().rev().nth(1).map_or(0, |d| d.total);
    let change = i64::try_from(today_total).unwrap_or(i64::MAX)
        - i64::try_from(yesterday_total).unwrap_or(i64::MAX);

    CompletionSummary {
        days: series,
        total,
        today: today_total,
        yesterday: yesterday_total,
        change,
        per_project: project_totals(counts),
    }
}
