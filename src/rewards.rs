use std::fmt::Display;

use crate::ledger::{self, LedgerError};
use crate::models::KindWord;
use crate::store::Store;

pub const POINTS_NEEDED_FOR_WORD: u64 = 15;

#[derive(Debug)]
pub struct Redemption {
    pub word: KindWord,
    /// Balance after the debit.
    pub points: u64,
}

#[derive(Debug)]
pub enum RedeemError {
    NotEligible { points: u64, points_needed: u64 },
    CatalogEmpty,
    Storage(anyhow::Error),
}

impl Display for RedeemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return match self {
            RedeemError::NotEligible {
                points,
                points_needed,
            } => write!(f, "not enough points: {points} of {points_needed}"),
            RedeemError::CatalogEmpty => write!(f, "no active kind word to draw"),
            RedeemError::Storage(err) => write!(f, "{err}"),
        };
    }
}

impl std::error::Error for RedeemError {}

impl From<LedgerError> for RedeemError {
    fn from(err: LedgerError) -> Self {
        return match err {
            // A lost debit race reads the same as arriving short.
            LedgerError::InsufficientBalance { points, .. } => RedeemError::NotEligible {
                points,
                points_needed: POINTS_NEEDED_FOR_WORD,
            },
            LedgerError::Storage(err) => RedeemError::Storage(err),
        };
    }
}

/// Spends `POINTS_NEEDED_FOR_WORD` and returns one kind word drawn uniformly
/// at random from the active catalog. Two concurrent calls against a balance
/// that only covers one redemption resolve to exactly one success, since the
/// debit is the store's atomic conditional update.
pub async fn try_redeem(store: &dyn Store, account_id: &str) -> Result<Redemption, RedeemError> {
    let points = ledger::balance(store, account_id).await?;

    if points < POINTS_NEEDED_FOR_WORD {
        return Err(RedeemError::NotEligible {
            points,
            points_needed: POINTS_NEEDED_FOR_WORD,
        });
    }

    // Drawing before the debit keeps an empty catalog from costing points;
    // the draw itself writes nothing.
    let word = store
        .random_kind_word()
        .await
        .map_err(RedeemError::Storage)?
        .ok_or(RedeemError::CatalogEmpty)?;

    let points = ledger::debit(store, account_id, POINTS_NEEDED_FOR_WORD).await?;

    return Ok(Redemption { word, points });
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use crate::store::MemoryStore;

    const ACCOUNT: &str = "default";

    async fn store_with(points: u64, words: &[&str]) -> MemoryStore {
        let store = MemoryStore::new();
        store.insert_account(ACCOUNT, points).await.unwrap();
        for word in words {
            store.insert_kind_word(word).await.unwrap();
        }
        return store;
    }

    #[tokio::test]
    async fn redemption_costs_exactly_the_threshold() {
        let store = store_with(20, &["You've got this!"]).await;

        let redemption = try_redeem(&store, ACCOUNT).await.unwrap();

        assert_eq!(redemption.points, 5);
        assert_eq!(redemption.word.message, "You've got this!");
        assert_eq!(ledger::balance(&store, ACCOUNT).await.unwrap(), 5);
    }

    #[tokio::test]
    async fn short_balance_reports_the_shortfall_data() {
        let store = store_with(10, &["You've got this!"]).await;

        let err = try_redeem(&store, ACCOUNT).await.unwrap_err();

        assert!(matches!(
            err,
            RedeemError::NotEligible {
                points: 10,
                points_needed: POINTS_NEEDED_FOR_WORD,
            }
        ));
        assert_eq!(ledger::balance(&store, ACCOUNT).await.unwrap(), 10);
    }

    #[tokio::test]
    async fn exact_balance_is_eligible() {
        let store = store_with(15, &["You've got this!"]).await;

        let redemption = try_redeem(&store, ACCOUNT).await.unwrap();

        assert_eq!(redemption.points, 0);
    }

    #[tokio::test]
    async fn empty_catalog_fails_without_debiting() {
        let store = store_with(20, &[]).await;

        let err = try_redeem(&store, ACCOUNT).await.unwrap_err();

        assert!(matches!(err, RedeemError::CatalogEmpty));
        assert_eq!(ledger::balance(&store, ACCOUNT).await.unwrap(), 20);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn concurrent_redeems_settle_to_one_success() {
        let store = Arc::new(store_with(15, &["You've got this!"]).await);

        let a = tokio::spawn({
            let store = store.clone();
            async move { try_redeem(store.as_ref(), ACCOUNT).await }
        });
        let b = tokio::spawn({
            let store = store.clone();
            async move { try_redeem(store.as_ref(), ACCOUNT).await }
        });

        let results = [a.await.unwrap(), b.await.unwrap()];

        let successes = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(successes, 1);

        let loser = results.iter().find(|r| r.is_err()).unwrap();
        assert!(matches!(
            loser,
            Err(RedeemError::NotEligible { points: 0, .. })
        ));
        assert_eq!(ledger::balance(store.as_ref(), ACCOUNT).await.unwrap(), 0);
    }
}
