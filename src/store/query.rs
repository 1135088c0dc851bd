use serde_json::Value;

use crate::error::{Error, Result};
use crate::types::Table;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub column: &'static str,
    pub ascending: bool,
}

impl Order {
    #[must_use]
    pub const fn asc(column: &'static str) -> Self {
        Self {
            column,
            ascending: true,
        }
    }

    #[must_use]
    pub const fn desc(column: &'static str) -> Self {
        Self {
            column,
            ascending: false,
        }
    }
}

/// A select over one table: equality filters, one sort column, optional limit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub filters: Vec<(String, Value)>,
    pub order: Option<Order>,
    pub limit: Option<usize>,
}

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows with `is_active = true`.
    #[must_use]
    pub fn active() -> Self {
        Self::new().eq("is_active", true)
    }

    #[must_use]
    pub fn eq(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push((column.into(), value.into()));
        self
    }

    #[must_use]
    pub fn order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Rejects filters or orderings on columns the table does not have.
    pub fn validate(&self, table: Table) -> Result<()> {
        let named = self
            .filters
            .iter()
            .map(|(column, _)| column.as_str())
            .chain(self.order.map(|o| o.column));

        for column in named {
            if table.column(column).is_none() {
                return Err(Error::UnknownColumn {
                    table: table.name(),
                    column: column.to_string(),
                });
            }
        }
        Ok(())
    }
}
