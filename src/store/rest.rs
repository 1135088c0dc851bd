use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response};
use serde_json::Value;

use super::{Query, Row, Store, writable};
use crate::error::{Error, Result};
use crate::types::Table;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Row client for a hosted PostgREST-style service.
///
/// Tables live under `{url}/rest/v1/{table}`. Filters are sent as
/// `column=eq.value`, ordering as `order=column.asc`, and every write asks
/// for the affected rows back with `Prefer: return=representation`.
pub struct RestStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(Error::Config("service URL is empty".into()));
        }

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.into(),
        })
    }

    fn request(&self, method: Method, table: Table) -> RequestBuilder {
        self.client
            .request(method, format!("{}/rest/v1/{}", self.base_url, table.name()))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    fn returning(&self, method: Method, table: Table) -> RequestBuilder {
        self.request(method, table)
            .header("Prefer", "return=representation")
    }
}

fn filter_value(value: &Value) -> String {
    match value {
        Value::Null => "is.null".to_string(),
        Value::String(s) => format!("eq.{s}"),
        other => format!("eq.{other}"),
    }
}

fn by_id(id: i64) -> [(&'static str, String); 1] {
    [("id", format!("eq.{id}"))]
}

async fn read_rows(response: Response) -> Result<Vec<Row>> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
            .unwrap_or(body);
        return Err(Error::Service {
            status: status.as_u16(),
            message,
        });
    }

    Ok(response.json::<Vec<Row>>().await?)
}

#[async_trait]
impl Store for RestStore {
    async fn select(&self, table: Table, query: &Query) -> Result<Vec<Row>> {
        query.validate(table)?;

        let mut params: Vec<(String, String)> = vec![("select".into(), "*".into())];
        for (column, value) in &query.filters {
            params.push((column.clone(), filter_value(value)));
        }
        if let Some(order) = query.order {
            let dir = if order.ascending { "asc" } else { "desc" };
            params.push(("order".into(), format!("{}.{dir}", order.column)));
        }
        if let Some(limit) = query.limit {
            params.push(("limit".into(), limit.to_string()));
        }

        let response = self.request(Method::GET, table).query(&params).send().await?;
        read_rows(response).await
    }

    async fn insert(&self, table: Table, row: Row) -> Result<Row> {
        let row = writable(table, row)?;
        let response = self
            .returning(Method::POST, table)
            .json(&row)
            .send()
            .await?;

        read_rows(response)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| Error::Service {
                status: 200,
                message: format!("insert into {table} returned no rows"),
            })
    }

    async fn update(&self, table: Table, id: i64, patch: Row) -> Result<Row> {
        let patch = writable(table, patch)?;
        let response = self
            .returning(Method::PATCH, table)
            .query(&by_id(id))
            .json(&patch)
            .send()
            .await?;

        read_rows(response)
            .await?
            .into_iter()
            .next()
            .ok_or(Error::NotFound)
    }

    async fn delete(&self, table: Table, id: i64) -> Result<bool> {
        let response = self
            .returning(Method::DELETE, table)
            .query(&by_id(id))
            .send()
            .await?;

        Ok(!read_rows(response).await?.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_filter_values() {
        assert_eq!(filter_value(&json!(true)), "eq.true");
        assert_eq!(filter_value(&json!(7)), "eq.7");
        assert_eq!(filter_value(&json!("Event")), "eq.Event");
        assert_eq!(filter_value(&Value::Null), "is.null");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let store = RestStore::new("https://db.example.com/", "key").unwrap();
        assert_eq!(store.base_url, "https://db.example.com");
    }

    #[test]
    fn test_empty_url_rejected() {
        assert!(matches!(RestStore::new("", "key"), Err(Error::Config(_))));
    }
}
