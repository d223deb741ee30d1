use sea_orm::DatabaseConnection;

/// Application state shared with every handler through `web::Data`.
///
/// The connection pool is created once at startup and injected here; no
/// handler reaches for a global.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database pool (absent in tests that never touch storage)
    db: Option<DatabaseConnection>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Some(db) }
    }

    /// State without a database; only storage-free routes work.
    pub fn without_db() -> Self {
        Self { db: None }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
