use std::env;
use std::str::FromStr;

use crate::error::AppError;

/// Default location of the file-backed SQLite database
pub const DEFAULT_SQLITE_PATH: &str = "./expenses.db";

/// Storage engine backing the `expenses` table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    /// SQLite database file on disk (default)
    SqliteFile,
    /// Private in-memory SQLite database, gone when the process exits
    SqliteMemory,
    /// PostgreSQL server
    Postgres,
}

impl DbKind {
    /// Read the engine from `EXPENSES_DB`, defaulting to `SqliteFile`.
    pub fn from_env() -> Result<Self, AppError> {
        match env::var("EXPENSES_DB") {
            Ok(value) => value.parse(),
            Err(_) => Ok(DbKind::SqliteFile),
        }
    }
}

impl FromStr for DbKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite-file" | "sqlite" => Ok(DbKind::SqliteFile),
            "sqlite-memory" => Ok(DbKind::SqliteMemory),
            "postgres" | "postgresql" => Ok(DbKind::Postgres),
            other => Err(AppError::config(format!(
                "Unsupported EXPENSES_DB value '{other}' (expected sqlite-file, sqlite-memory or postgres)"
            ))),
        }
    }
}

/// Builds the database URL for the given engine.
///
/// `DATABASE_URL` wins when set, except for `SqliteMemory`, which is always
/// a private in-memory database.
pub fn db_url(kind: DbKind) -> Result<String, AppError> {
    if kind != DbKind::SqliteMemory {
        if let Ok(url) = env::var("DATABASE_URL") {
            return Ok(url);
        }
    }

    match kind {
        DbKind::SqliteFile => {
            let path =
                env::var("EXPENSES_SQLITE_PATH").unwrap_or_else(|_| DEFAULT_SQLITE_PATH.to_string());
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
        DbKind::Postgres => {
            let host = env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
            let db_name = must_var("POSTGRES_DB")?;
            let username = must_var("POSTGRES_USER")?;
            let password = must_var("POSTGRES_PASSWORD")?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
    }
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
