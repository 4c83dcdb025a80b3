// Table store port: the generic client every endpoint talks to.
//
// Purpose
// - Describe the hosted relational store as a handful of row operations
//   (select, insert, update, delete) over JSON rows.
//
// Boundaries
// - Only column equality filters, one ordering column and a limit. Anything
//   richer belongs in the database, not here.
//
// Testing guidance
// - Use `InMemoryStore` for tests and local development.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

pub type Row = serde_json::Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store could not be reached or reported an error. Carries the
    /// store's own message.
    #[error("{0}")]
    Unavailable(String),

    #[error("malformed store response: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub column: String,
    pub value: Value,
}

impl Filter {
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }

    pub fn matches(&self, row: &Row) -> bool {
        row.get(&self.column) == Some(&self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub column: String,
    pub direction: Direction,
}

/// A select query. An empty column list means every column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Select {
    pub columns: Vec<String>,
    pub filters: Vec<Filter>,
    pub order: Option<Order>,
    pub limit: Option<usize>,
}

impl Select {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn columns(mut self, columns: &[&str]) -> Self {
        self.columns = columns.iter().map(|c| (*c).to_string()).collect();
        self
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn order_by(mut self, column: impl Into<String>, direction: Direction) -> Self {
        self.order = Some(Order {
            column: column.into(),
            direction,
        });
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[async_trait]
pub trait TableStore: Send + Sync {
    async fn select(&self, table: &str, query: &Select) -> Result<Vec<Row>, StoreError>;

    /// Inserts all rows in one batch and returns them as stored.
    async fn insert(&self, table: &str, rows: Vec<Row>) -> Result<Vec<Row>, StoreError>;

    /// Applies `changes` to every row matching all `filters` and returns the
    /// updated rows.
    async fn update(
        &self,
        table: &str,
        filters: &[Filter],
        changes: Row,
    ) -> Result<Vec<Row>, StoreError>;

    /// Deletes every row matching all `filters` and returns the removed rows.
    async fn delete(&self, table: &str, filters: &[Filter]) -> Result<Vec<Row>, StoreError>;
}

pub fn from_row<T: DeserializeOwned>(row: Row) -> Result<T, StoreError> {
    serde_json::from_value(Value::Object(row))
        .map_err(|e| StoreError::Malformed(e.to_string()))
}

pub fn to_row<T: Serialize>(value: &T) -> Result<Row, StoreError> {
    match serde_json::to_value(value) {
        Ok(Value::Object(row)) => Ok(row),
        Ok(other) => Err(StoreError::Malformed(format!(
            "expected an object row, got {other}"
        ))),
        Err(e) => Err(StoreError::Malformed(e.to_string())),
    }
}

pub mod in_memory;
pub mod postgrest;
