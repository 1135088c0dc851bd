use async_trait::async_trait;

use super::{Query, Row, Store};
use crate::error::{Error, Result};
use crate::types::Table;

/// Stand-in used when no backend is configured. Every call fails with
/// `Error::NotConfigured`, so public pages render their built-in content.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineStore;

#[async_trait]
impl Store for OfflineStore {
    async fn select(&self, _table: Table, _query: &Query) -> Result<Vec<Row>> {
        Err(Error::NotConfigured)
    }

    async fn insert(&self, _table: Table, _row: Row) -> Result<Row> {
        Err(Error::NotConfigured)
    }

    async fn update(&self, _table: Table, _id: i64, _patch: Row) -> Result<Row> {
        Err(Error::NotConfigured)
    }

    async fn delete(&self, _table: Table, _id: i64) -> Result<bool> {
        Err(Error::NotConfigured)
    }
}
