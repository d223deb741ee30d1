use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbKind};
use crate::error::AppError;

/// Lifetime of the in-memory SQLite connection: the process lifetime in
/// practice. Retiring it would drop the database with it.
const MEMORY_CONN_LIFETIME: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Pool settings per storage kind.
fn connect_options(kind: DbKind) -> Result<ConnectOptions, AppError> {
    let mut opts = ConnectOptions::new(db_url(kind)?);
    opts.connect_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    match kind {
        // Every connection to `sqlite::memory:` opens its own empty database,
        // so the pool holds exactly one and never recycles it
        DbKind::SqliteMemory => {
            opts.max_connections(1)
                .min_connections(1)
                .idle_timeout(MEMORY_CONN_LIFETIME)
                .max_lifetime(MEMORY_CONN_LIFETIME);
        }
        // SQLite serialises writers; a small pool keeps "database is locked" rare
        DbKind::SqliteFile => {
            opts.max_connections(4);
        }
        DbKind::Postgres => {
            opts.max_connections(16);
        }
    }

    Ok(opts)
}

/// Open the process-wide connection pool. Does NOT bootstrap the schema.
pub async fn connect_db(kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let conn = Database::connect(connect_options(kind)?).await?;
    info!(db_kind = ?kind, "database connected");
    Ok(conn)
}

/// Single entrypoint used at startup: connect, then create the schema if
/// absent. Safe to run against an already-initialised database.
pub async fn bootstrap_db(kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(kind).await?;
    migration::bootstrap(&conn).await?;
    Ok(conn)
}
