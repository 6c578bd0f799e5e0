use super::Store;

use crate::models::{Account, KindWord};

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        return PostgresStore { pool };
    }
}

#[async_trait]
impl Store for PostgresStore {
    async fn find_account(&self, account_id: &str) -> Result<Option<Account>> {
        let account = sqlx::query_as("SELECT * FROM accounts WHERE account_id = $1 LIMIT 1")
            .bind(account_id)
            .fetch_optional(&self.pool)
            .await?;

        return Ok(account);
    }

    async fn insert_account(&self, account_id: &str, points: u64) -> Result<Account> {
        let account =
            sqlx::query_as("INSERT INTO accounts (account_id, points) VALUES ($1, $2) RETURNING *")
                .bind(account_id)
                .bind(i64::try_from(points)?)
                .fetch_one(&self.pool)
                .await?;

        return Ok(account);
    }

    async fn credit_points(
        &self,
        account_id: &str,
        amount: u64,
        played_at: DateTime<Utc>,
    ) -> Result<u64> {
        let points: i64 = sqlx::query_scalar(
            "UPDATE accounts SET points = points + $2, last_game_played = $3 WHERE account_id = $1 RETURNING points",
        )
        .bind(account_id)
        .bind(i64::try_from(amount)?)
        .bind(played_at)
        .fetch_optional(&self.pool)
        .await?
        .with_context(|| format!("account not found: {account_id}"))?;

        return Ok(u64::try_from(points)?);
    }

    async fn debit_points(&self, account_id: &str, amount: u64) -> Result<Option<u64>> {
        // The balance check and the subtraction are one statement, so two
        // racing debits can never both pass against the same points.
        let points: Option<i64> = sqlx::query_scalar(
            "UPDATE accounts SET points = points - $2 WHERE account_id = $1 AND points >= $2 RETURNING points",
        )
        .bind(account_id)
        .bind(i64::try_from(amount)?)
        .fetch_optional(&self.pool)
        .await?;

        return match points {
            Some(points) => Ok(Some(u64::try_from(points)?)),
            None => Ok(None),
        };
    }

    async fn count_kind_words(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM kind_words")
            .fetch_one(&self.pool)
            .await?;

        return Ok(u64::try_from(count)?);
    }

    async fn insert_kind_word(&self, message: &str) -> Result<KindWord> {
        let word = sqlx::query_as("INSERT INTO kind_words (message) VALUES ($1) RETURNING *")
            .bind(message)
            .fetch_one(&self.pool)
            .await?;

        return Ok(word);
    }

    async fn random_kind_word(&self) -> Result<Option<KindWord>> {
        // The catalog stays small; RANDOM() keeps the draw uniform over
        // active entries.
        let word = sqlx::query_as(
            "SELECT * FROM kind_words WHERE is_active ORDER BY RANDOM() LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        return Ok(word);
    }
}
