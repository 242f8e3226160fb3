//! Startup check that the store has the tables and columns we query.

use sqlx::SqliteConnection;
use tracing::debug;

use super::error::StoreError;
use super::models::{Measurement, Station, TableSchema};

/// Check both tables, failing on the first missing column.
pub(crate) async fn validate(conn: &mut SqliteConnection) -> Result<(), StoreError> {
    check_table::<Measurement>(conn).await?;
    check_table::<Station>(conn).await?;
    Ok(())
}

async fn check_table<T: TableSchema>(conn: &mut SqliteConnection) -> Result<(), StoreError> {
    let columns: Vec<String> = sqlx::query_scalar("SELECT name FROM pragma_table_info(?)")
        .bind(T::TABLE)
        .fetch_all(&mut *conn)
        .await?;

    debug!(table = T::TABLE, ?columns, "Read table columns");

    match missing_column(&columns, T::COLUMNS) {
        Some(column) => Err(StoreError::SchemaMismatch {
            table: T::TABLE,
            column,
        }),
        None => Ok(()),
    }
}

/// First required column not present in `columns`.
///
/// SQLite column names are case-insensitive. A missing table reports no
/// columns at all, so it surfaces as its first required column.
fn missing_column(columns: &[String], required: &[&'static str]) -> Option<&'static str> {
    required
        .iter()
        .copied()
        .find(|req| !columns.iter().any(|c| c.eq_ignore_ascii_case(req)))
}
