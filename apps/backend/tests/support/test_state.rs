use expenses::config::db::DbKind;
use expenses::infra::state::build_state;
use expenses::state::app_state::AppState;

/// Fresh, bootstrapped in-memory database private to the calling test.
pub async fn build_test_state() -> AppState {
    build_state()
        .with_db(DbKind::SqliteMemory)
        .build()
        .await
        .expect("build in-memory test state")
}
