use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("cannot connect to database: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("query failed: {0}")]
    Query(#[source] sqlx::Error),

    #[error("user {0} not found")]
    NotFound(i32),

    #[error("cannot map row to user: {0}")]
    Scan(#[source] sqlx::Error),
}

impl UserStoreError {
    /// Classify an error returned while running a statement. `id` is the key
    /// that was looked up, reported when no row matched.
    pub fn from_query(err: sqlx::Error, id: Option<i32>) -> Self {
        match err {
            sqlx::Error::RowNotFound => match id {
                Some(id) => Self::NotFound(id),
                None => Self::Query(sqlx::Error::RowNotFound),
            },
            e @ (sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::Decode(_)) => Self::Scan(e),
            e => Self::Query(e),
        }
    }
}
