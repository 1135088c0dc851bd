//! Typed access to content tables.
//!
//! Rows coming out of a [`Store`] are decoded into the structs in
//! [`crate::types`] here. A row that does not decode is skipped with a
//! warning rather than failing the whole list.

mod feed;

pub use feed::ChangeFeed;

use std::sync::Arc;

use serde_json::{Value, json};

use crate::error::{Error, Result};
use crate::store::{Query, Row, Store, row};
use crate::types::{Record, Table};

#[derive(Clone)]
pub struct ContentRepo {
    store: Arc<dyn Store>,
    feed: ChangeFeed,
}

impl ContentRepo {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            store,
            feed: ChangeFeed::default(),
        }
    }

    #[must_use]
    pub fn store(&self) -> &Arc<dyn Store> {
        &self.store
    }

    #[must_use]
    pub fn feed(&self) -> &ChangeFeed {
        &self.feed
    }

    /// Active rows in the record's natural order.
    pub async fn active<T: Record>(&self) -> Result<Vec<T>> {
        self.list(Query::active()).await
    }

    /// Every row, active or not, in the record's natural order.
    pub async fn all<T: Record>(&self) -> Result<Vec<T>> {
        self.list(Query::new()).await
    }

    pub async fn list<T: Record>(&self, query: Query) -> Result<Vec<T>> {
        let rows = self.store.select(T::TABLE, &query.order(T::ORDER)).await?;
        Ok(decode_rows(rows))
    }

    /// The first active row, for single-row tables such as `hero` or `navbar_info`.
    pub async fn single_active<T: Record>(&self) -> Result<Option<T>> {
        self.store
            .single(T::TABLE, &Query::active().order(T::ORDER))
            .await?
            .map(decode)
            .transpose()
    }

    pub async fn get<T: Record>(&self, id: i64) -> Result<Option<T>> {
        self.find_by("id", id).await
    }

    pub async fn find_by<T: Record>(&self, column: &str, value: impl Into<Value>) -> Result<Option<T>> {
        self.store
            .single(T::TABLE, &Query::new().eq(column, value))
            .await?
            .map(decode)
            .transpose()
    }

    pub async fn count(&self, table: Table) -> Result<usize> {
        Ok(self.store.select(table, &Query::new()).await?.len())
    }

    pub async fn insert<T: Record>(&self, row: Row) -> Result<T> {
        let stored = self.store.insert(T::TABLE, row).await?;
        self.feed.publish(T::TABLE);
        decode(stored)
    }

    pub async fn update<T: Record>(&self, id: i64, patch: Row) -> Result<T> {
        let stored = self.store.update(T::TABLE, id, patch).await?;
        self.feed.publish(T::TABLE);
        decode(stored)
    }

    pub async fn delete(&self, table: Table, id: i64) -> Result<bool> {
        let deleted = self.store.delete(table, id).await?;
        if deleted {
            self.feed.publish(table);
        }
        Ok(deleted)
    }

    /// Flips `is_active` on one row and nothing else.
    pub async fn set_active<T: Record>(&self, id: i64, active: bool) -> Result<T> {
        self.update(id, row(json!({ "is_active": active }))).await
    }
}

pub fn decode<T: Record>(row: Row) -> Result<T> {
    serde_json::from_value(Value::Object(row)).map_err(|e| Error::MalformedRow {
        table: T::TABLE.name(),
        reason: e.to_string(),
    })
}

fn decode_rows<T: Record>(rows: Vec<Row>) -> Vec<T> {
    rows.into_iter()
        .filter_map(|row| match decode::<T>(row) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("Skipping row: {e}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::store::SqliteStore;
    use crate::types::{HeroImage, Stat};

    fn repo() -> (TempDir, ContentRepo) {
        let dir = TempDir::new().unwrap();
        let store = SqliteStore::new(dir.path().join("hilltop.db")).unwrap();
        store.initialize().unwrap();
        (dir, ContentRepo::new(Arc::new(store)))
    }

    #[tokio::test]
    async fn test_malformed_rows_are_skipped() {
        let (_dir, repo) = repo();
        let store = repo.store();
        store
            .insert(
                Table::Stats,
                row(json!({"icon_name": "Users", "value": "2000+", "label": "Students", "display_order": 1})),
            )
            .await
            .unwrap();
        store
            .insert(
                Table::Stats,
                row(json!({"icon_name": "Rocket", "value": "3", "label": "Launches", "display_order": 2})),
            )
            .await
            .unwrap();

        let stats: Vec<Stat> = repo.active().await.unwrap();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].label, "Students");
    }

    #[tokio::test]
    async fn test_writes_publish_changes() {
        let (_dir, repo) = repo();
        let mut rx = repo.feed().subscribe();

        let image: HeroImage = repo
            .insert(row(json!({"image_url": "/a.jpg", "display_order": 1})))
            .await
            .unwrap();
        repo.delete(Table::HeroImages, image.id).await.unwrap();

        assert_eq!(rx.recv().await.unwrap(), Table::HeroImages);
        assert_eq!(rx.recv().await.unwrap(), Table::HeroImages);
    }

    #[tokio::test]
    async fn test_set_active_keeps_display_order() {
        let (_dir, repo) = repo();
        let a: HeroImage = repo
            .insert(row(json!({"image_url": "/a.jpg", "display_order": 1})))
            .await
            .unwrap();
        let b: HeroImage = repo
            .insert(row(json!({"image_url": "/b.jpg", "display_order": 2})))
            .await
            .unwrap();

        let toggled: HeroImage = repo.set_active(a.id, false).await.unwrap();
        assert!(!toggled.is_active);
        assert_eq!(toggled.display_order, 1);

        let all: Vec<HeroImage> = repo.all().await.unwrap();
        let other = all.iter().find(|i| i.id == b.id).unwrap();
        assert_eq!(other.display_order, 2);
        assert!(other.is_active);
    }

    #[tokio::test]
    async fn test_decode_error_names_table() {
        let err = decode::<Stat>(row(json!({"id": 1}))).unwrap_err();
        assert!(matches!(err, Error::MalformedRow { table: "stats", .. }));
    }
}
