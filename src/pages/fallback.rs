use crate::error::Result;
use crate::types::Table;

/// Maps fetched rows into view items, or returns the built-in list when the
/// fetch failed or came back empty.
pub fn rows_or<T, V>(
    table: Table,
    result: Result<Vec<T>>,
    convert: impl FnMut(T) -> V,
    fallback: impl FnOnce() -> Vec<V>,
) -> Vec<V> {
    match result {
        Ok(rows) if !rows.is_empty() => rows.into_iter().map(convert).collect(),
        Ok(_) => {
            tracing::debug!("No active rows in {table}, using built-in content");
            fallback()
        }
        Err(e) => {
            tracing::warn!("Failed to load {table}, using built-in content: {e}");
            fallback()
        }
    }
}

/// Single-row counterpart of [`rows_or`].
pub fn single_or<T, V>(
    table: Table,
    result: Result<Option<T>>,
    convert: impl FnOnce(T) -> V,
    fallback: impl FnOnce() -> V,
) -> V {
    match result {
        Ok(Some(row)) => convert(row),
        Ok(None) => {
            tracing::debug!("No active row in {table}, using built-in content");
            fallback()
        }
        Err(e) => {
            tracing::warn!("Failed to load {table}, using built-in content: {e}");
            fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_rows_or_uses_rows() {
        let got = rows_or(Table::Notices, Ok(vec![1, 2]), |n| n * 10, || vec![0]);
        assert_eq!(got, vec![10, 20]);
    }

    #[test]
    fn test_rows_or_empty_falls_back() {
        let got = rows_or(Table::Notices, Ok(Vec::<i32>::new()), |n| n, || vec![7, 8]);
        assert_eq!(got, vec![7, 8]);
    }

    #[test]
    fn test_rows_or_error_falls_back() {
        let got = rows_or::<i32, i32>(Table::Notices, Err(Error::NotConfigured), |n| n, || vec![9]);
        assert_eq!(got, vec![9]);
    }

    #[test]
    fn test_single_or() {
        assert_eq!(single_or(Table::Hero, Ok(Some(3)), |n| n + 1, || 0), 4);
        assert_eq!(single_or::<i32, i32>(Table::Hero, Ok(None), |n| n, || 5), 5);
    }
}
