mod memory;
pub use memory::MemoryStore;

mod postgres;
pub use postgres::PostgresStore;

use crate::models::{Account, KindWord};

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Durable backing for accounts and the kind word catalog.
///
/// Balance mutations are atomic per call in every implementation, so
/// concurrent credits and debits against one account serialize here and
/// callers never read-modify-write a balance themselves.
#[async_trait]
pub trait Store: Send + Sync {
    async fn find_account(&self, account_id: &str) -> Result<Option<Account>>;

    async fn insert_account(&self, account_id: &str, points: u64) -> Result<Account>;

    /// Adds points and stamps the account's last played time. Returns the
    /// new balance.
    async fn credit_points(
        &self,
        account_id: &str,
        amount: u64,
        played_at: DateTime<Utc>,
    ) -> Result<u64>;

    /// Subtracts points only when the balance covers the full amount.
    /// Returns the new balance, or None when the balance is short, in which
    /// case nothing changed.
    async fn debit_points(&self, account_id: &str, amount: u64) -> Result<Option<u64>>;

    async fn count_kind_words(&self) -> Result<u64>;

    async fn insert_kind_word(&self, message: &str) -> Result<KindWord>;

    /// One active kind word drawn uniformly at random, or None when the
    /// catalog has no active entries.
    async fn random_kind_word(&self) -> Result<Option<KindWord>>;
}
