use sqlx::{postgres::PgConnectOptions, Connection, PgConnection};
use tracing::{debug, warn};

use crate::users::error::UserStoreError;

/// Open a single connection. Callers own it and must hand it back to [`close`].
pub async fn connect(options: &PgConnectOptions) -> Result<PgConnection, UserStoreError> {
    let conn = PgConnection::connect_with(options)
        .await
        .map_err(UserStoreError::Connection)?;
    debug!(host = options.get_host(), port = options.get_port(), "db connection opened");
    Ok(conn)
}

/// Close a connection gracefully. A failed close is only logged; dropping the
/// connection still releases the socket.
pub async fn close(conn: PgConnection) {
    if let Err(e) = conn.close().await {
        warn!(error = %e, "db connection close failed");
    } else {
        debug!("db connection closed");
    }
}
