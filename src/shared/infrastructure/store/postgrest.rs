// PostgREST implementation of the TableStore port, for the hosted database.
//
// Every call is one HTTP round trip to `{base_url}/rest/v1/{table}`. Filters
// become `column=eq.value` query parameters and writes ask for the affected
// rows back with `Prefer: return=representation`.

use super::{Direction, Filter, Row, Select, StoreError, TableStore};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct PostgrestStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl PostgrestStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    fn endpoint(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=representation")
    }

    async fn send(&self, request: RequestBuilder) -> Result<Vec<Row>, StoreError> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        read_rows(response).await
    }
}

fn filter_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn filter_params(filters: &[Filter]) -> Vec<(String, String)> {
    filters
        .iter()
        .map(|f| (f.column.clone(), format!("eq.{}", filter_value(&f.value))))
        .collect()
}

fn select_params(query: &Select) -> Vec<(String, String)> {
    let columns = if query.columns.is_empty() {
        "*".to_string()
    } else {
        query.columns.join(",")
    };

    let mut params = vec![("select".to_string(), columns)];
    params.extend(filter_params(&query.filters));
    if let Some(order) = &query.order {
        let direction = match order.direction {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        };
        params.push(("order".to_string(), format!("{}.{direction}", order.column)));
    }
    if let Some(limit) = query.limit {
        params.push(("limit".to_string(), limit.to_string()));
    }
    params
}

// PostgREST reports failures as `{ "message": ..., "code": ..., ... }`.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

fn parse_rows(body: &str) -> Result<Vec<Row>, StoreError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(row) => Ok(row),
                other => Err(StoreError::Malformed(format!("expected a row, got {other}"))),
            })
            .collect(),
        Ok(Value::Object(row)) => Ok(vec![row]),
        Ok(other) => Err(StoreError::Malformed(format!(
            "expected an array of rows, got {other}"
        ))),
        Err(e) => Err(StoreError::Malformed(e.to_string())),
    }
}

async fn read_rows(response: Response) -> Result<Vec<Row>, StoreError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| StoreError::Unavailable(e.to_string()))?;
    rows_from(status, &body)
}

fn rows_from(status: StatusCode, body: &str) -> Result<Vec<Row>, StoreError> {
    if !status.is_success() {
        return Err(StoreError::Unavailable(error_message(body)));
    }
    parse_rows(body)
}

#[async_trait]
impl TableStore for PostgrestStore {
    async fn select(&self, table: &str, query: &Select) -> Result<Vec<Row>, StoreError> {
        let request = self
            .client
            .get(self.endpoint(table))
            .query(&select_params(query));
        self.send(request).await
    }

    async fn insert(&self, table: &str, rows: Vec<Row>) -> Result<Vec<Row>, StoreError> {
        let request = self.client.post(self.endpoint(table)).json(&rows);
        self.send(request).await
    }

    async fn update(
        &self,
        table: &str,
        filters: &[Filter],
        changes: Row,
    ) -> Result<Vec<Row>, StoreError> {
        let request = self
            .client
            .patch(self.endpoint(table))
            .query(&filter_params(filters))
            .json(&changes);
        self.send(request).await
    }

    async fn delete(&self, table: &str, filters: &[Filter]) -> Result<Vec<Row>, StoreError> {
        let request = self
            .client
            .delete(self.endpoint(table))
            .query(&filter_params(filters));
        self.send(request).await
    }
}
