use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx;

/// The one account the observed deployment uses; every ledger operation
/// still takes an explicit id.
pub const DEFAULT_ACCOUNT_ID: &str = "default";

// Balances are bigint in Postgres; the schema keeps them non-negative and
// the ledger only ever applies signed deltas through credit/debit.
#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub account_id: String,
    pub points: i64,
    pub last_game_played: Option<DateTime<Utc>>,
}
