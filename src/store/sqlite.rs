use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::types::Value as SqlValue;
use rusqlite::{Connection, OptionalExtension, params, params_from_iter};
use serde_json::{Number, Value};

use super::schema::SCHEMA;
use super::{Query, Row, Store, writable};
use crate::error::{Error, Result};
use crate::types::{Column, ColumnKind, Table};

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open(db_path)?;

        conn.pragma_update(None, "journal_mode", "WAL")?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn initialize(&self) -> Result<()> {
        self.conn().execute_batch(SCHEMA)?;
        Ok(())
    }
}

fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            // SQLite's CURRENT_TIMESTAMP format: "YYYY-MM-DD HH:MM:SS"
            chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").map(|ndt| ndt.and_utc())
        })
        .ok()
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

fn quoted(name: &str) -> String {
    format!("\"{name}\"")
}

fn column_list(table: Table) -> String {
    table
        .columns()
        .iter()
        .map(|c| quoted(c.name))
        .collect::<Vec<_>>()
        .join(", ")
}

fn lookup(table: Table, name: &str) -> Result<&'static Column> {
    table.column(name).ok_or_else(|| Error::UnknownColumn {
        table: table.name(),
        column: name.to_string(),
    })
}

fn to_sql(column: &Column, value: &Value) -> Result<SqlValue> {
    let invalid = |expected: &str| Error::BadRequest(format!("{} expects {expected}", column.name));

    Ok(match (column.kind, value) {
        (_, Value::Null) => SqlValue::Null,
        (_, Value::Bool(b)) => SqlValue::Integer(i64::from(*b)),
        (_, Value::Number(n)) => match n.as_i64() {
            Some(i) => SqlValue::Integer(i),
            None => SqlValue::Real(n.as_f64().unwrap_or_default()),
        },
        (ColumnKind::Integer, Value::String(s)) => {
            SqlValue::Integer(s.trim().parse().map_err(|_| invalid("an integer"))?)
        }
        (ColumnKind::Bool, Value::String(s)) => match s.as_str() {
            "true" | "1" | "on" => SqlValue::Integer(1),
            "false" | "0" | "" => SqlValue::Integer(0),
            _ => return Err(invalid("a boolean")),
        },
        (ColumnKind::Timestamp, Value::String(s)) => {
            let parsed = parse_datetime(s.trim()).ok_or_else(|| invalid("an RFC 3339 timestamp"))?;
            SqlValue::Text(format_datetime(&parsed))
        }
        (_, Value::String(s)) => SqlValue::Text(s.clone()),
        (_, other) => SqlValue::Text(other.to_string()),
    })
}

fn to_json(column: &Column, value: SqlValue) -> Value {
    match (column.kind, value) {
        (_, SqlValue::Null) => Value::Null,
        (ColumnKind::Bool, SqlValue::Integer(i)) => Value::Bool(i != 0),
        (ColumnKind::Timestamp, SqlValue::Text(s)) => match parse_datetime(&s) {
            Some(dt) => Value::String(format_datetime(&dt)),
            None => {
                tracing::error!("Invalid datetime in database: '{s}'");
                Value::String(s)
            }
        },
        (_, SqlValue::Integer(i)) => Value::from(i),
        (_, SqlValue::Real(f)) => Number::from_f64(f).map_or(Value::Null, Value::Number),
        (_, SqlValue::Text(s)) => Value::String(s),
        (_, SqlValue::Blob(b)) => Value::String(String::from_utf8_lossy(&b).into_owned()),
    }
}

fn read_row(table: Table, row: &rusqlite::Row<'_>) -> rusqlite::Result<Row> {
    let mut out = Row::new();
    for (i, column) in table.columns().iter().enumerate() {
        let value: SqlValue = row.get(i)?;
        out.insert(column.name.to_string(), to_json(column, value));
    }
    Ok(out)
}

fn fetch(conn: &Connection, table: Table, id: i64) -> Result<Option<Row>> {
    conn.query_row(
        &format!(
            "SELECT {} FROM {} WHERE id = ?1",
            column_list(table),
            table.name()
        ),
        params![id],
        |row| read_row(table, row),
    )
    .optional()
    .map_err(Error::from)
}

#[async_trait]
impl Store for SqliteStore {
    async fn select(&self, table: Table, query: &Query) -> Result<Vec<Row>> {
        query.validate(table)?;

        let mut sql = format!("SELECT {} FROM {}", column_list(table), table.name());
        let mut clauses = Vec::new();
        let mut values = Vec::new();

        for (name, value) in &query.filters {
            let column = lookup(table, name)?;
            if value.is_null() {
                clauses.push(format!("{} IS NULL", quoted(name)));
            } else {
                values.push(to_sql(column, value)?);
                clauses.push(format!("{} = ?{}", quoted(name), values.len()));
            }
        }

        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }

        if let Some(order) = query.order {
            let dir = if order.ascending { "ASC" } else { "DESC" };
            sql.push_str(&format!(" ORDER BY {} {dir}, id {dir}", quoted(order.column)));
        }

        if let Some(limit) = query.limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }

        let conn = self.conn();
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(values), |row| read_row(table, row))?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    async fn insert(&self, table: Table, row: Row) -> Result<Row> {
        let row = writable(table, row)?;

        let mut names = Vec::with_capacity(row.len());
        let mut values = Vec::with_capacity(row.len());
        for (name, value) in &row {
            let column = lookup(table, name)?;
            names.push(quoted(name));
            values.push(to_sql(column, value)?);
        }

        let conn = self.conn();
        if names.is_empty() {
            conn.execute(&format!("INSERT INTO {} DEFAULT VALUES", table.name()), [])?;
        } else {
            let placeholders = (1..=values.len())
                .map(|i| format!("?{i}"))
                .collect::<Vec<_>>()
                .join(", ");
            conn.execute(
                &format!(
                    "INSERT INTO {} ({}) VALUES ({placeholders})",
                    table.name(),
                    names.join(", ")
                ),
                params_from_iter(values),
            )?;
        }

        let id = conn.last_insert_rowid();
        fetch(&conn, table, id)?.ok_or(Error::NotFound)
    }

    async fn update(&self, table: Table, id: i64, patch: Row) -> Result<Row> {
        let patch = writable(table, patch)?;

        let mut sets = Vec::with_capacity(patch.len());
        let mut values = Vec::with_capacity(patch.len() + 1);
        for (name, value) in &patch {
            let column = lookup(table, name)?;
            values.push(to_sql(column, value)?);
            sets.push(format!("{} = ?{}", quoted(name), values.len()));
        }

        let conn = self.conn();
        if !sets.is_empty() {
            values.push(SqlValue::Integer(id));
            let rows = conn.execute(
                &format!(
                    "UPDATE {} SET {} WHERE id = ?{}",
                    table.name(),
                    sets.join(", "),
                    values.len()
                ),
                params_from_iter(values),
            )?;

            if rows == 0 {
                return Err(Error::NotFound);
            }
        }

        fetch(&conn, table, id)?.ok_or(Error::NotFound)
    }

    async fn delete(&self, table: Table, id: i64) -> Result<bool> {
        let rows = self.conn().execute(
            &format!("DELETE FROM {} WHERE id = ?1", table.name()),
            params![id],
        )?;
        Ok(rows > 0)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;
    use crate::store::{Order, row};

    fn setup() -> (TempDir, SqliteStore) {
        let dir = TempDir::new().unwrap();
        let store = SqliteStore::new(dir.path().join("hilltop.db")).unwrap();
        store.initialize().unwrap();
        (dir, store)
    }

    #[test]
    fn test_schema_matches_table_columns() {
        let (_dir, store) = setup();
        let conn = store.conn();

        for table in Table::ALL {
            let mut stmt = conn
                .prepare(&format!("PRAGMA table_info({})", table.name()))
                .unwrap();
            let names: Vec<String> = stmt
                .query_map([], |row| row.get::<_, String>(1))
                .unwrap()
                .collect::<std::result::Result<_, _>>()
                .unwrap();
            let expected: Vec<&str> = table.columns().iter().map(|c| c.name).collect();
            assert_eq!(names, expected, "column mismatch for {table}");
        }
    }

    #[tokio::test]
    async fn test_insert_returns_row_with_defaults() {
        let (_dir, store) = setup();

        let inserted = store
            .insert(
                Table::Notices,
                row(json!({"message": "Sports Day", "display_order": 2})),
            )
            .await
            .unwrap();

        assert_eq!(inserted["id"], 1);
        assert_eq!(inserted["message"], "Sports Day");
        assert_eq!(inserted["is_active"], true);
        assert_eq!(inserted["start_date"], Value::Null);
    }

    #[tokio::test]
    async fn test_select_filters_and_orders() {
        let (_dir, store) = setup();
        for (order, active) in [(3, true), (1, true), (2, false)] {
            store
                .insert(
                    Table::MenuItems,
                    row(json!({
                        "label": format!("item {order}"),
                        "href": "/",
                        "display_order": order,
                        "is_active": active,
                    })),
                )
                .await
                .unwrap();
        }

        let rows = store
            .select(
                Table::MenuItems,
                &Query::active().order(Order::asc("display_order")),
            )
            .await
            .unwrap();

        let labels: Vec<&str> = rows.iter().map(|r| r["label"].as_str().unwrap()).collect();
        assert_eq!(labels, vec!["item 1", "item 3"]);
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let (_dir, store) = setup();
        let err = store
            .update(Table::Hero, 42, row(json!({"title": "x"})))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound));
    }

    #[tokio::test]
    async fn test_update_only_touches_patch_columns() {
        let (_dir, store) = setup();
        let a = store
            .insert(
                Table::HeroImages,
                row(json!({"image_url": "/a.jpg", "display_order": 1})),
            )
            .await
            .unwrap();

        let updated = store
            .update(
                Table::HeroImages,
                a["id"].as_i64().unwrap(),
                row(json!({"is_active": false})),
            )
            .await
            .unwrap();

        assert_eq!(updated["is_active"], false);
        assert_eq!(updated["display_order"], 1);
        assert_eq!(updated["image_url"], "/a.jpg");
    }

    #[tokio::test]
    async fn test_delete() {
        let (_dir, store) = setup();
        let item = store
            .insert(
                Table::Circulars,
                row(json!({"title": "Fee Reminder", "circular_date": "2025-11-12"})),
            )
            .await
            .unwrap();
        let id = item["id"].as_i64().unwrap();

        assert!(store.delete(Table::Circulars, id).await.unwrap());
        assert!(!store.delete(Table::Circulars, id).await.unwrap());
        assert!(
            store
                .select(Table::Circulars, &Query::new())
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_timestamps_are_rfc3339() {
        let (_dir, store) = setup();
        let msg = store
            .insert(
                Table::ContactSubmissions,
                row(json!({
                    "name": "Ayaan",
                    "email": "ayaan@example.com",
                    "subject": "Fees",
                    "message": "Hello",
                })),
            )
            .await
            .unwrap();

        let created = msg["created_at"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(created).is_ok());
        assert_eq!(msg["status"], "pending");
    }

    #[tokio::test]
    async fn test_unparsable_timestamp_is_rejected() {
        let (_dir, store) = setup();
        let err = store
            .insert(
                Table::ContactSubmissions,
                row(json!({
                    "name": "Ayaan",
                    "email": "ayaan@example.com",
                    "subject": "Fees",
                    "message": "Hello",
                    "created_at": "last tuesday",
                })),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)), "{err}");
        assert!(
            store
                .select(Table::ContactSubmissions, &Query::new())
                .await
                .unwrap()
                .is_empty()
        );

        let kept = store
            .insert(
                Table::ContactSubmissions,
                row(json!({
                    "name": "Ayaan",
                    "email": "ayaan@example.com",
                    "subject": "Fees",
                    "message": "Hello",
                    "created_at": "2025-11-20 09:30:00",
                })),
            )
            .await
            .unwrap();
        assert_eq!(kept["created_at"], "2025-11-20T09:30:00+00:00");
    }

    #[tokio::test]
    async fn test_null_filter() {
        let (_dir, store) = setup();
        store
            .insert(
                Table::GalleryPhotos,
                row(json!({"title": "Loose", "image_url": "/l.jpg"})),
            )
            .await
            .unwrap();
        store
            .insert(
                Table::GalleryPhotos,
                row(json!({"title": "Filed", "image_url": "/f.jpg", "category_id": 4})),
            )
            .await
            .unwrap();

        let loose = store
            .select(Table::GalleryPhotos, &Query::new().eq("category_id", Value::Null))
            .await
            .unwrap();
        assert_eq!(loose.len(), 1);
        assert_eq!(loose[0]["title"], "Loose");

        let filed = store
            .single(Table::GalleryPhotos, &Query::new().eq("category_id", "4"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(filed["title"], "Filed");
    }
}
