mod offline;
mod query;
mod rest;
mod schema;
mod sqlite;

pub use offline::OfflineStore;
pub use query::{Order, Query};
pub use rest::RestStore;
pub use sqlite::SqliteStore;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::types::Table;

/// One row as the store sees it: column name to JSON value.
pub type Row = serde_json::Map<String, Value>;

/// Store is the generic row client every page and admin handler goes through.
#[async_trait]
pub trait Store: Send + Sync {
    async fn select(&self, table: Table, query: &Query) -> Result<Vec<Row>>;

    /// Inserts one row and returns it as stored, including `id` and defaults.
    async fn insert(&self, table: Table, row: Row) -> Result<Row>;

    /// Applies `patch` to the row with `id`. Returns `Error::NotFound` when no
    /// such row exists.
    async fn update(&self, table: Table, id: i64, patch: Row) -> Result<Row>;

    async fn delete(&self, table: Table, id: i64) -> Result<bool>;

    async fn single(&self, table: Table, query: &Query) -> Result<Option<Row>> {
        let query = query.clone().limit(1);
        Ok(self.select(table, &query).await?.into_iter().next())
    }
}

/// Converts a JSON object literal into a `Row`. Anything else yields an empty row.
#[must_use]
pub fn row(value: Value) -> Row {
    match value {
        Value::Object(map) => map,
        _ => Row::new(),
    }
}

/// Rejects rows naming columns the table does not have, and drops `id`.
pub(crate) fn writable(table: Table, mut row: Row) -> Result<Row> {
    row.remove("id");
    if let Some(column) = row.keys().find(|k| table.column(k).is_none()) {
        return Err(Error::UnknownColumn {
            table: table.name(),
            column: column.clone(),
        });
    }
    Ok(row)
}
