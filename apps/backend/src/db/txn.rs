use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseTransaction, TransactionTrait};
use tracing::warn;

use super::require_db;
use super::txn_policy::{self, TxnPolicy};
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Future returned by a [`with_txn`] body; it may borrow the transaction.
pub type TxnFuture<'c, R> = Pin<Box<dyn Future<Output = Result<R, AppError>> + 'c>>;

/// Run `f` inside a per-request database session.
///
/// Acquires a connection from the pool and begins a transaction, hands it to
/// `f`, then commits (or rolls back, per [`TxnPolicy`]) on `Ok` and rolls
/// back on `Err`. If `f` panics or the request future is dropped, SeaORM
/// rolls the transaction back when it is dropped, so the connection goes
/// back to the pool on every path.
pub async fn with_txn<R, F>(state: &AppState, f: F) -> Result<R, AppError>
where
    F: for<'c> FnOnce(&'c DatabaseTransaction) -> TxnFuture<'c, R>,
{
    let db = require_db(state)?;
    let txn = db.begin().await?;

    match f(&txn).await {
        Ok(val) => {
            match txn_policy::current() {
                TxnPolicy::CommitOnOk => txn.commit().await?,
                TxnPolicy::RollbackOnOk => txn.rollback().await?,
            }
            Ok(val)
        }
        Err(err) => {
            // Best-effort rollback; preserve original error
            if let Err(rollback_err) = txn.rollback().await {
                warn!(error = %rollback_err, "transaction rollback failed");
            }
            Err(err)
        }
    }
}
