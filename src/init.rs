use crate::config::Config;
use crate::models::DEFAULT_ACCOUNT_ID;
use crate::store::Store;
use crate::Result;

use sqlx::PgPool;

const STARTING_POINTS: u64 = 10;

pub const SEED_KIND_WORDS: [&str; 20] = [
    "Every day is a new opportunity to shine!",
    "You make the world a better place just by being you!",
    "Your potential is limitless!",
    "You're stronger than you know!",
    "Your smile brightens everyone's day!",
    "You've got this! Keep pushing forward!",
    "Every small step counts towards your goals!",
    "Your determination is inspiring!",
    "Success is in your future!",
    "You're making progress every day!",
    "It's okay to take things one day at a time.",
    "You're doing the best you can, and that's enough.",
    "Every storm passes eventually.",
    "You're never alone in this journey.",
    "Your feelings are valid and important.",
    "You inspire others more than you realize!",
    "Your kindness makes a difference!",
    "You're capable of amazing things!",
    "Your presence is a gift to those around you!",
    "You have a beautiful heart!",
];

pub async fn init_pg_pool(cfg: &Config) -> Result<PgPool> {
    let pool = PgPool::connect(&cfg.db_connection_url).await?;

    sqlx::migrate!().run(&pool).await?;

    return Ok(pool);
}

/// Populates an empty catalog and creates the default account. Runs on
/// every startup; both steps are skipped once their collection is non-empty.
pub async fn seed(store: &dyn Store) -> Result {
    if store.count_kind_words().await? == 0 {
        for message in SEED_KIND_WORDS {
            store.insert_kind_word(message).await?;
        }

        tracing::info!("seeded kind word catalog");
    }

    if store.find_account(DEFAULT_ACCOUNT_ID).await?.is_none() {
        store.insert_account(DEFAULT_ACCOUNT_ID, STARTING_POINTS).await?;

        tracing::info!("created default account with {STARTING_POINTS} points");
    }

    return Ok(());
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::store::MemoryStore;

    #[tokio::test]
    async fn seeding_is_idempotent() {
        let store = MemoryStore::new();

        seed(&store).await.unwrap();
        seed(&store).await.unwrap();

        assert_eq!(store.count_kind_words().await.unwrap(), 20);

        let account = store
            .find_account(DEFAULT_ACCOUNT_ID)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(account.points, 10);
    }

    #[tokio::test]
    async fn seeding_skips_a_populated_catalog() {
        let store = MemoryStore::new();
        store.insert_kind_word("Already here.").await.unwrap();

        seed(&store).await.unwrap();

        assert_eq!(store.count_kind_words().await.unwrap(), 1);
    }
}
