// In memory implementation of the TableStore port.
//
// Purpose
// - Run the service and its tests without a hosted database.
//
// Responsibilities
// - Keep rows per table in insertion order.
// - Fill `id` and `created_at` on insert the way the hosted tables default them.
// - Simulate an unreachable store, or one that rejects writes.

use super::{Direction, Filter, Row, Select, StoreError, TableStore};
use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<HashMap<String, Vec<Row>>>,
    is_offline: bool,
    rejects_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn toggle_reject_writes(&mut self) {
        self.rejects_writes = !self.rejects_writes;
    }

    /// Number of rows currently held in `table`.
    pub async fn count(&self, table: &str) -> usize {
        self.tables.read().await.get(table).map_or(0, Vec::len)
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Unavailable("Store offline".into()));
        }
        Ok(())
    }

    fn check_writable(&self) -> Result<(), StoreError> {
        self.check_online()?;
        if self.rejects_writes {
            return Err(StoreError::Unavailable("Store rejected the write".into()));
        }
        Ok(())
    }
}

fn matches_all(row: &Row, filters: &[Filter]) -> bool {
    filters.iter().all(|f| f.matches(row))
}

// Nulls and missing values sort first, like an ascending NULLS FIRST.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None | Some(Value::Null), None | Some(Value::Null)) => Ordering::Equal,
        (None | Some(Value::Null), _) => Ordering::Less,
        (_, None | Some(Value::Null)) => Ordering::Greater,
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
    }
}

fn project(row: &Row, columns: &[String]) -> Row {
    if columns.is_empty() {
        return row.clone();
    }
    columns
        .iter()
        .filter_map(|c| row.get(c).map(|v| (c.clone(), v.clone())))
        .collect()
}

#[async_trait::async_trait]
impl TableStore for InMemoryStore {
    async fn select(&self, table: &str, query: &Select) -> Result<Vec<Row>, StoreError> {
        self.check_online()?;
        let guard = self.tables.read().await;
        let mut rows: Vec<&Row> = guard
            .get(table)
            .map(|rows| rows.iter().filter(|r| matches_all(r, &query.filters)).collect())
            .unwrap_or_default();

        if let Some(order) = &query.order {
            rows.sort_by(|a, b| {
                let ordering = compare_values(a.get(&order.column), b.get(&order.column));
                match order.direction {
                    Direction::Ascending => ordering,
                    Direction::Descending => ordering.reverse(),
                }
            });
        }

        let limit = query.limit.unwrap_or(usize::MAX);
        Ok(rows
            .into_iter()
            .take(limit)
            .map(|r| project(r, &query.columns))
            .collect())
    }

    async fn insert(&self, table: &str, rows: Vec<Row>) -> Result<Vec<Row>, StoreError> {
        self.check_writable()?;
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        let stored: Vec<Row> = rows
            .into_iter()
            .map(|mut row| {
                row.entry("id")
                    .or_insert_with(|| Value::String(Uuid::now_v7().to_string()));
                row.entry("created_at")
                    .or_insert_with(|| Value::String(now.clone()));
                row
            })
            .collect();

        self.tables
            .write()
            .await
            .entry(table.to_string())
            .or_default()
            .extend(stored.iter().cloned());
        Ok(stored)
    }

    async fn update(
        &self,
        table: &str,
        filters: &[Filter],
        changes: Row,
    ) -> Result<Vec<Row>, StoreError> {
        self.check_writable()?;
        let mut guard = self.tables.write().await;
        let Some(rows) = guard.get_mut(table) else {
            return Ok(Vec::new());
        };

        let mut updated = Vec::new();
        for row in rows.iter_mut().filter(|r| matches_all(r, filters)) {
            for (column, value) in &changes {
                row.insert(column.clone(), value.clone());
            }
            updated.push(row.clone());
        }
        Ok(updated)
    }

    async fn delete(&self, table: &str, filters: &[Filter]) -> Result<Vec<Row>, StoreError> {
        self.check_writable()?;
        let mut guard = self.tables.write().await;
        let Some(rows) = guard.get_mut(table) else {
            return Ok(Vec::new());
        };

        let (removed, kept): (Vec<Row>, Vec<Row>) =
            rows.drain(..).partition(|r| matches_all(r, filters));
        *rows = kept;
        Ok(removed)
    }
}
