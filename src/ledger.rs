use std::fmt::Display;

use anyhow::anyhow;
use chrono::Utc;

use crate::store::Store;

#[derive(Debug)]
pub enum LedgerError {
    InsufficientBalance { points: u64, requested: u64 },
    Storage(anyhow::Error),
}

impl Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return match self {
            LedgerError::InsufficientBalance { points, requested } => {
                write!(f, "insufficient balance: requested {requested} of {points}")
            }
            LedgerError::Storage(err) => write!(f, "{err}"),
        };
    }
}

impl std::error::Error for LedgerError {}

/// Adds `amount` to the account and stamps its last played time. Returns
/// the new balance.
pub async fn credit(store: &dyn Store, account_id: &str, amount: u64) -> Result<u64, LedgerError> {
    let points = store
        .credit_points(account_id, amount, Utc::now())
        .await
        .map_err(LedgerError::Storage)?;

    return Ok(points);
}

/// Subtracts `amount` from the account. The store's conditional update
/// either applies the whole debit or leaves the balance untouched, so a
/// losing caller sees `InsufficientBalance` and no change.
pub async fn debit(store: &dyn Store, account_id: &str, amount: u64) -> Result<u64, LedgerError> {
    if let Some(points) = store
        .debit_points(account_id, amount)
        .await
        .map_err(LedgerError::Storage)?
    {
        return Ok(points);
    }

    let points = balance(store, account_id).await?;

    return Err(LedgerError::InsufficientBalance {
        points,
        requested: amount,
    });
}

pub async fn balance(store: &dyn Store, account_id: &str) -> Result<u64, LedgerError> {
    let account = store
        .find_account(account_id)
        .await
        .map_err(LedgerError::Storage)?
        .ok_or_else(|| LedgerError::Storage(anyhow!("account not found: {account_id}")))?;

    let points = u64::try_from(account.points)
        .map_err(|_| LedgerError::Storage(anyhow!("negative balance for {account_id}")))?;

    return Ok(points);
}
