//! Store error types.

/// Errors that can occur when reading the observation store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The database could not be opened or no connection could be acquired
    #[error("store unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    /// A query failed after a connection was acquired
    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),

    /// The measurement table has no rows
    #[error("measurement table is empty")]
    EmptyDataset,

    /// A date read back from the store is not `YYYY-MM-DD`
    #[error("stored date {value:?} is not a valid date")]
    InvalidStoredDate { value: String },

    /// A required table or column is missing
    #[error("schema mismatch: table {table} has no column {column}")]
    SchemaMismatch {
        table: &'static str,
        column: &'static str,
    },
}
